//! Release metadata model and the "latest matching release" selection.

mod selector;
mod types;

pub use selector::{ARCHIVE_KIND, Selection, select_latest};
pub use types::{DecodeError, Release, ReleaseFile, decode};
