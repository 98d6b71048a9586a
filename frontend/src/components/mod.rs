//! UI Components for the Recap application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`DropSurface`] - Drag & drop zone and file picker
//! - [`ResultPanel`] - Loading indicator, analysis result, "new analysis"
//! - [`RecentEntries`] - Previously analyzed files (open / delete)

mod hero;
mod upload;
mod result;
mod recent;
mod footer;

pub use hero::*;
pub use upload::*;
pub use result::*;
pub use recent::*;
pub use footer::*;
