//! JSON converters: the full document tree and the compact document-store
//! shape.

use serde::Serialize;

use crate::converters::OutputConverter;
use crate::document::{DocumentMetadata, ExtractedDocument, ExtractedPage, PageImage};
use crate::error::Result;
use crate::text::run::Run;
use crate::utils::round2;

/// Full JSON converter.
///
/// Emits the complete document tree, pretty-printed:
///
/// ```json
/// {
///   "pdf_name": "...",
///   "metadata": { ... },
///   "page_count": 2,
///   "pages": [
///     {
///       "size": { "width": 612.0, "height": 792.0 },
///       "images": [ { "base64": "...", "position": { ... } } ],
///       "text": [ { "word": "...", ... } ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Default)]
pub struct JsonConverter;

impl JsonConverter {
    /// Create a new full JSON converter.
    pub fn new() -> Self {
        Self
    }
}

impl OutputConverter for JsonConverter {
    fn convert(&self, document: &ExtractedDocument) -> Result<String> {
        let tree = JsonDocument::from(document);
        Ok(serde_json::to_string_pretty(&tree)?)
    }
}

#[derive(Serialize)]
struct JsonDocument<'a> {
    pdf_name: &'a str,
    metadata: &'a DocumentMetadata,
    page_count: usize,
    pages: Vec<JsonPage<'a>>,
}

impl<'a> From<&'a ExtractedDocument> for JsonDocument<'a> {
    fn from(document: &'a ExtractedDocument) -> Self {
        Self {
            pdf_name: &document.name,
            metadata: &document.metadata,
            page_count: document.page_count,
            pages: document.pages.iter().map(JsonPage::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct JsonPage<'a> {
    size: JsonSize,
    images: Vec<JsonImage>,
    text: &'a [Run],
}

impl<'a> From<&'a ExtractedPage> for JsonPage<'a> {
    fn from(page: &'a ExtractedPage) -> Self {
        Self {
            size: JsonSize {
                width: page.width,
                height: page.height,
            },
            images: page.images.iter().map(JsonImage::from).collect(),
            text: &page.runs,
        }
    }
}

#[derive(Serialize)]
struct JsonSize {
    width: f32,
    height: f32,
}

#[derive(Serialize)]
struct JsonImage {
    base64: String,
    position: JsonPosition,
}

impl From<&PageImage> for JsonImage {
    fn from(image: &PageImage) -> Self {
        Self {
            base64: image.to_base64(),
            position: JsonPosition {
                x0: round2(image.x0),
                y0: round2(image.y0),
                width: round2(image.width),
                height: round2(image.height),
            },
        }
    }
}

#[derive(Serialize)]
struct JsonPosition {
    x0: f32,
    y0: f32,
    width: f32,
    height: f32,
}

/// Compact JSON converter for document-store persistence.
///
/// Same information as [`JsonConverter`] under short keys (`w`, `fs`, `fn`,
/// `fw`, `fst`, `c`, `x`, `y`, `sup`, `sub` per run; `s`, `imgs`, `txt` per
/// page; `pdf`, `meta`, `p_count`, `p` at the top), emitted on a single
/// line. A persistence collaborator stores the result as one record per
/// document.
#[derive(Debug, Default)]
pub struct CompactJsonConverter;

impl CompactJsonConverter {
    /// Create a new compact JSON converter.
    pub fn new() -> Self {
        Self
    }
}

impl OutputConverter for CompactJsonConverter {
    fn convert(&self, document: &ExtractedDocument) -> Result<String> {
        let tree = CompactDocument::from(document);
        Ok(serde_json::to_string(&tree)?)
    }
}

#[derive(Serialize)]
struct CompactDocument<'a> {
    pdf: &'a str,
    meta: &'a DocumentMetadata,
    p_count: usize,
    p: Vec<CompactPage<'a>>,
}

impl<'a> From<&'a ExtractedDocument> for CompactDocument<'a> {
    fn from(document: &'a ExtractedDocument) -> Self {
        Self {
            pdf: &document.name,
            meta: &document.metadata,
            p_count: document.page_count,
            p: document.pages.iter().map(CompactPage::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct CompactPage<'a> {
    s: CompactSize,
    imgs: Vec<CompactImage>,
    txt: Vec<CompactRun<'a>>,
}

impl<'a> From<&'a ExtractedPage> for CompactPage<'a> {
    fn from(page: &'a ExtractedPage) -> Self {
        Self {
            s: CompactSize {
                w: page.width,
                h: page.height,
            },
            imgs: page.images.iter().map(CompactImage::from).collect(),
            txt: page.runs.iter().map(CompactRun::from).collect(),
        }
    }
}

#[derive(Serialize)]
struct CompactSize {
    w: f32,
    h: f32,
}

#[derive(Serialize)]
struct CompactImage {
    b64: String,
    pos: CompactPosition,
}

impl From<&PageImage> for CompactImage {
    fn from(image: &PageImage) -> Self {
        Self {
            b64: image.to_base64(),
            pos: CompactPosition {
                x: round2(image.x0),
                y: round2(image.y0),
                w: round2(image.width),
                h: round2(image.height),
            },
        }
    }
}

#[derive(Serialize)]
struct CompactPosition {
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

#[derive(Serialize)]
struct CompactRun<'a> {
    w: &'a str,
    fs: f32,
    #[serde(rename = "fn")]
    font: &'a str,
    fw: &'a str,
    fst: &'a str,
    c: &'a str,
    x: f32,
    y: f32,
    sup: bool,
    sub: bool,
}

impl<'a> From<&'a Run> for CompactRun<'a> {
    fn from(run: &'a Run) -> Self {
        Self {
            w: &run.text,
            fs: run.font_size,
            font: &run.font_name,
            fw: run.font_weight.as_css(),
            fst: run.font_style.as_css(),
            c: &run.color,
            x: run.x,
            y: run.y,
            sup: run.is_superscript,
            sub: run.is_subscript,
        }
    }
}
