//! Document and page models at the crate's input/output boundaries.
//!
//! The decoding collaborator supplies one [`PageInput`] per page: the
//! ordered glyph sequence, the page dimensions, and any images it already
//! rendered to PNG. The pipeline turns each into an [`ExtractedPage`] of
//! styled runs, and [`ExtractedDocument`] assembles pages with document
//! metadata for the format converters.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};

use crate::glyph::Glyph;
use crate::text::run::Run;
use crate::utils::round2;

/// An image placed on a page, already decoded to PNG by the collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageImage {
    /// PNG-encoded pixel data.
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,

    /// X coordinate of the image's left edge.
    pub x0: f32,

    /// Y coordinate of the image's top edge.
    pub y0: f32,

    /// Rendered width.
    pub width: f32,

    /// Rendered height.
    pub height: f32,
}

impl PageImage {
    /// Create a page image from PNG bytes and its placement rectangle.
    pub fn new(data: Vec<u8>, x0: f32, y0: f32, width: f32, height: f32) -> Self {
        Self {
            data,
            x0,
            y0,
            width,
            height,
        }
    }

    /// Base64-encode the PNG payload.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.data)
    }

    /// Encode as a `data:image/png;base64,...` URI for HTML embedding.
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", self.to_base64())
    }
}

/// Serde adapter storing image bytes as base64 strings in glyph dumps.
mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded).map_err(serde::de::Error::custom)
    }
}

/// One page of decoder output: the segmentation engine's input boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// Page width in points (positive).
    pub width: f32,

    /// Page height in points (positive).
    pub height: f32,

    /// Glyphs in the decoder's reading order.
    pub glyphs: Vec<Glyph>,

    /// Images placed on the page.
    #[serde(default)]
    pub images: Vec<PageImage>,
}

impl PageInput {
    /// Create a page input without images.
    pub fn new(width: f32, height: f32, glyphs: Vec<Glyph>) -> Self {
        Self {
            width,
            height,
            glyphs,
            images: Vec::new(),
        }
    }

    /// Attach images to the page.
    pub fn with_images(mut self, images: Vec<PageImage>) -> Self {
        self.images = images;
        self
    }
}

/// One segmented page: the engine's output boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPage {
    /// Zero-based page index.
    pub index: usize,

    /// Page width, rounded to two decimals.
    pub width: f32,

    /// Page height, rounded to two decimals.
    pub height: f32,

    /// Styled runs in document order.
    pub runs: Vec<Run>,

    /// Images carried through from the input page.
    pub images: Vec<PageImage>,
}

impl ExtractedPage {
    /// Segment a page input into its run sequence.
    pub fn from_input(index: usize, page: PageInput) -> Self {
        let runs = crate::text::segment(&page.glyphs);
        Self {
            index,
            width: round2(page.width),
            height: round2(page.height),
            runs,
            images: page.images,
        }
    }
}

/// Document-level metadata as reported by the decoding collaborator.
///
/// Field names mirror the decoder's metadata dictionary; absent entries are
/// skipped on serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Document title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Document subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Keyword list, as a single string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,

    /// Creating application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,

    /// Producing application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,

    /// Creation timestamp, in the decoder's date format.
    #[serde(
        default,
        rename = "creationDate",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<String>,

    /// Modification timestamp, in the decoder's date format.
    #[serde(default, rename = "modDate", skip_serializing_if = "Option::is_none")]
    pub mod_date: Option<String>,
}

/// A decoded document ready for segmentation: the shape of a glyph dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecodedDocument {
    /// Source document name.
    pub name: String,

    /// Document metadata.
    #[serde(default)]
    pub metadata: DocumentMetadata,

    /// Decoded pages in document order.
    pub pages: Vec<PageInput>,
}

/// A fully segmented document, ready for a format converter.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedDocument {
    /// Source document name.
    pub name: String,

    /// Document metadata.
    pub metadata: DocumentMetadata,

    /// Total page count.
    pub page_count: usize,

    /// Segmented pages in page-index order.
    pub pages: Vec<ExtractedPage>,
}

impl ExtractedDocument {
    /// Assemble a document from segmented pages.
    pub fn assemble(
        name: impl Into<String>,
        metadata: DocumentMetadata,
        pages: Vec<ExtractedPage>,
    ) -> Self {
        Self {
            name: name.into(),
            metadata,
            page_count: pages.len(),
            pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Color;

    fn page_with_glyphs() -> PageInput {
        PageInput::new(
            612.004,
            791.996,
            vec![
                Glyph::new("o", 12.0, "Arial", 0.0, 0.0, Color::black()),
                Glyph::new("k", 12.0, "Arial", 6.0, 0.0, Color::black()),
            ],
        )
    }

    #[test]
    fn test_from_input_rounds_dimensions() {
        let page = ExtractedPage::from_input(0, page_with_glyphs());
        assert_eq!(page.width, 612.0);
        assert_eq!(page.height, 792.0);
        assert_eq!(page.runs.len(), 1);
        assert_eq!(page.runs[0].text, "ok");
    }

    #[test]
    fn test_image_base64_round_trip() {
        let image = PageImage::new(vec![0x89, b'P', b'N', b'G'], 10.0, 20.0, 100.0, 50.0);
        assert_eq!(image.to_base64(), "iVBORw==");
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));

        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains("iVBORw=="));
        let back: PageImage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_metadata_skips_absent_fields() {
        let meta = DocumentMetadata {
            title: Some("Report".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["title"], "Report");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn test_decoded_document_from_json() {
        let dump = r#"{
            "name": "sample.pdf",
            "metadata": {"title": "Sample", "creationDate": "D:20240101"},
            "pages": [{
                "width": 612.0,
                "height": 792.0,
                "glyphs": [
                    {"text": "a", "font_size": 12.0, "font_id": "Arial", "x": 0.0, "top": 0.0, "color": [0.0, 0.0, 0.0]}
                ]
            }]
        }"#;
        let doc: DecodedDocument = serde_json::from_str(dump).unwrap();
        assert_eq!(doc.name, "sample.pdf");
        assert_eq!(doc.metadata.creation_date.as_deref(), Some("D:20240101"));
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.pages[0].glyphs[0].text, "a");
    }

    #[test]
    fn test_assemble_counts_pages() {
        let doc = ExtractedDocument::assemble(
            "a.pdf",
            DocumentMetadata::default(),
            vec![
                ExtractedPage::from_input(0, page_with_glyphs()),
                ExtractedPage::from_input(1, page_with_glyphs()),
            ],
        );
        assert_eq!(doc.page_count, 2);
        assert_eq!(doc.pages[1].index, 1);
    }
}
