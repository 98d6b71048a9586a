//! Browser-side services.
//!
//! # Services
//!
//! - [`api`] - HTTP calls to the analysis backend
//! - [`dialogs`] - `alert` / `confirm` prompts
//!
//! Both are traits with a browser implementation, so the controller can be
//! driven by fakes in tests.

pub mod api;
pub mod dialogs;

pub use api::*;
pub use dialogs::*;
