//! Document importers.
//!
//! The reader core treats document conversion as an external concern: an
//! [`Importer`] turns raw bytes in some source format into the internal
//! [`Document`] model. One concrete importer ships with the crate, a JSON
//! importer used by the CLI (feature `cli`).

#[cfg(feature = "cli")]
mod json;

#[cfg(feature = "cli")]
pub use json::JsonImporter;

use crate::document::Document;
use crate::error::Result;

/// Converts an external document format into the internal model.
pub trait Importer {
    fn import(&self, data: &[u8]) -> Result<Document>;
}
