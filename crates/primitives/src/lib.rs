//! Value types and conversion helpers shared by modkit crates.

/// Empty-aware fallback between two values.
pub mod coalesce;
/// Opening local files named by `file://` URLs.
pub mod file_url;
pub mod version;

pub use coalesce::Coalesce;
pub use file_url::{FileUrlError, open_file_url};
pub use version::{InvalidVersionFormat, Version};
