//! Format converters for segmented documents.
//!
//! The segmentation engine produces one run sequence per page; everything
//! here is a thin formatting collaborator over that sequence:
//! - **Full JSON**: complete document tree with metadata and embedded images
//! - **Compact JSON**: short-key document-store shape, single line
//! - **HTML**: layout-preserved page rendering with absolutely positioned
//!   spans
//!
//! Converters never mutate the document; the same [`ExtractedDocument`] can
//! be rendered through any number of them.
//!
//! # Examples
//!
//! ```
//! use pdf_runs::{
//!     DocumentMetadata, ExtractedDocument, JsonConverter, OutputConverter,
//! };
//!
//! let doc = ExtractedDocument::assemble("empty.pdf", DocumentMetadata::default(), vec![]);
//! let json = JsonConverter::new().convert(&doc).unwrap();
//! assert!(json.contains("\"pdf_name\": \"empty.pdf\""));
//! ```

pub mod html;
pub mod json;

// Re-export main types
pub use html::HtmlConverter;
pub use json::{CompactJsonConverter, JsonConverter};

use std::path::Path;

use crate::document::ExtractedDocument;
use crate::error::Result;

/// A pluggable output format over a segmented document.
pub trait OutputConverter {
    /// Render the document to this converter's output format.
    fn convert(&self, document: &ExtractedDocument) -> Result<String>;
}

/// Render a document through a converter and write the result to a file.
pub fn write_output(
    path: impl AsRef<Path>,
    converter: &dyn OutputConverter,
    document: &ExtractedDocument,
) -> Result<()> {
    let output = converter.convert(document)?;
    std::fs::write(path, output)?;
    Ok(())
}

/// Escape text for HTML emission.
///
/// # Examples
///
/// ```
/// use pdf_runs::converters::escape_html;
///
/// assert_eq!(escape_html("a < b & c"), "a &lt; b &amp; c");
/// ```
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
