//! File ingestion: one path for dropped and picked files.
//!
//! Drop events and file-input change events both end up in
//! [`select_media`], which keeps the first candidate and checks its
//! declared media type. Nothing here performs a request.

use std::fmt;

use crate::config::{MSG_NO_FILE, MSG_UNSUPPORTED_TYPE};
use crate::types::{AppError, AppResult};

/// Media types the backend can analyze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaType {
    /// `video/mp4`
    Mp4,
    /// `audio/mpeg`
    Mpeg,
}

impl MediaType {
    /// Parse a declared MIME type. Only exact matches are accepted.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "video/mp4" => Some(MediaType::Mp4),
            "audio/mpeg" => Some(MediaType::Mpeg),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Mp4 => "video/mp4",
            MediaType::Mpeg => "audio/mpeg",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

/// Anything the browser hands us as a file.
pub trait CandidateFile {
    fn name(&self) -> String;
    /// MIME type as declared by the browser (may be empty).
    fn declared_type(&self) -> String;
}

impl CandidateFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn declared_type(&self) -> String {
        self.type_()
    }
}

/// A file that passed the media type gate, ready for upload.
#[derive(Clone, Debug)]
pub struct MediaFile<F> {
    pub name: String,
    pub media_type: MediaType,
    pub payload: F,
}

/// Keep the first candidate and validate its declared type.
pub fn select_media<F, I>(candidates: I) -> AppResult<MediaFile<F>>
where
    F: CandidateFile,
    I: IntoIterator<Item = F>,
{
    let file = candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Validation(MSG_NO_FILE.to_string()))?;

    let declared = file.declared_type();
    let media_type = MediaType::from_mime(&declared).ok_or_else(|| {
        log::warn!("⚠️ Rejected {} (declared type {:?})", file.name(), declared);
        AppError::Validation(MSG_UNSUPPORTED_TYPE.to_string())
    })?;

    Ok(MediaFile {
        name: file.name(),
        media_type,
        payload: file,
    })
}

/// Collect a browser `FileList` in order.
pub fn files_from_list(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Drag events the drop surface listens to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Enter,
    Over,
    Leave,
    Drop,
}

impl DragPhase {
    /// Whether the drop surface shows its "armed" affordance after this event.
    pub fn armed(&self) -> bool {
        matches!(self, DragPhase::Enter | DragPhase::Over)
    }
}
