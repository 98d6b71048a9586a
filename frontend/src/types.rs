//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Result Types** - What the result area displays
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// A previously analyzed file, as listed by `/recent_entries`.
///
/// `filename` is the stable key used for display and deletion;
/// `analysis_html` identifies the stored rendering under `/analysis/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentEntry {
    pub filename: String,
    pub analysis_html: String,
    /// Creation time as written by the backend (`YYYY-mm-dd HH:MM:SS`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Plain-text transcript and analysis, served from the same route
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_txt: Option<String>,
}

impl RecentEntry {
    pub fn new(filename: impl Into<String>, analysis_html: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            analysis_html: analysis_html.into(),
            date: None,
            analysis_txt: None,
        }
    }
}

/// Response from the `/upload` endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Rendered analysis markup
    pub analysis: String,
    /// Entry the backend recorded for this upload
    #[serde(default)]
    pub entry: Option<RecentEntry>,
}

/// Response from the `/delete_entry/{filename}` endpoint.
///
/// The backend sends this body for refusals too (404/500), so it is
/// decoded whatever the status code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned by `/upload` on non-2xx statuses.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Result Types
// =============================================================================

/// Content of the result area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultContent {
    /// Backend-rendered markup, inserted as-is
    Markup(String),
    /// Plain text notice (failures are shown in place of a result)
    Notice(String),
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Input rejected before any request was made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request could not complete.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A browser API call failed.
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_with_backend_metadata() {
        let json = r#"[
            {
                "filename": "20240601_101500.mp3",
                "date": "2024-06-01 10:15:00",
                "analysis_html": "20240601_101500_analysis.html",
                "analysis_txt": "20240601_101500_analysis.txt"
            },
            {"filename": "clip1.mp4", "analysis_html": "clip1_analysis.html"}
        ]"#;

        let entries: Vec<RecentEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date.as_deref(), Some("2024-06-01 10:15:00"));
        assert_eq!(entries[0].analysis_txt.as_deref(), Some("20240601_101500_analysis.txt"));
        assert_eq!(entries[1], RecentEntry::new("clip1.mp4", "clip1_analysis.html"));
    }

    #[test]
    fn test_upload_response_without_entry() {
        let response: UploadResponse = serde_json::from_str(r#"{"analysis": "<div>ok</div>"}"#).unwrap();
        assert_eq!(response.analysis, "<div>ok</div>");
        assert!(response.entry.is_none());
    }

    #[test]
    fn test_delete_response_message_optional() {
        let ok: DeleteResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.success);
        assert_eq!(ok.message, None);

        let refused: DeleteResponse =
            serde_json::from_str(r#"{"success": false, "message": "locked"}"#).unwrap();
        assert!(!refused.success);
        assert_eq!(refused.message.as_deref(), Some("locked"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Server { status: 400, message: "Invalid file type".into() };
        assert_eq!(err.to_string(), "Server error (400): Invalid file type");
    }
}
