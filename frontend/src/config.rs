//! Application configuration.
//!
//! Centralized configuration for the Recap frontend. Values are fixed at
//! compile time; the backend location can be overridden when building.

/// Backend API base URL.
///
/// Empty means "same origin as the page", which is how the analysis server
/// serves this frontend. Set `RECAP_BACKEND_URL` at build time to point
/// elsewhere (e.g. `http://localhost:5000` while running `trunk serve`).
pub const BACKEND_URL: &str = match option_env!("RECAP_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// `accept` filter for the hidden file input.
pub const FILE_PICKER_ACCEPT: &str = "video/mp4,audio/mpeg,.mp4,.mp3";

/// Icon shown next to each recent entry.
pub const FILE_ICON_SRC: &str = "/static/file.svg";

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_UNSUPPORTED_TYPE: &str = "Please upload an MP4 video or MP3 audio file.";
pub const MSG_NO_FILE: &str = "No file selected.";
pub const MSG_UPLOAD_FAILED: &str = "An error occurred during analysis.";
pub const MSG_OPEN_FAILED: &str = "Error loading analysis.";
pub const MSG_NO_ENTRIES: &str = "No recent entries";
pub const MSG_ENTRIES_FAILED: &str = "Error loading recent entries";
pub const MSG_CONFIRM_DELETE: &str = "Are you sure you want to delete this entry?";
pub const MSG_DELETE_RETRY: &str = "Error deleting entry. Please try again.";

/// Alert text for a delete the backend refused.
pub fn delete_refused_message(reason: Option<&str>) -> String {
    format!("Error deleting entry: {}", reason.unwrap_or("unknown reason"))
}
