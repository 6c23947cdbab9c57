//! Layout-preserved HTML converter.
//!
//! Renders each page as a sized container with one absolutely positioned
//! `<span>` per run, reproducing the page geometry the decoder reported.
//! Super- and subscript runs carry a `vertical-align` hint; images are
//! embedded as `data:` URIs.

use std::fmt::Write as _;

use crate::converters::{escape_html, OutputConverter};
use crate::document::{ExtractedDocument, ExtractedPage, PageImage};
use crate::error::Result;
use crate::text::run::Run;

/// Converter producing a standalone HTML document.
///
/// # Examples
///
/// ```
/// use pdf_runs::{
///     DocumentMetadata, ExtractedDocument, HtmlConverter, OutputConverter,
/// };
///
/// let doc = ExtractedDocument::assemble("empty.pdf", DocumentMetadata::default(), vec![]);
/// let html = HtmlConverter::new().convert(&doc).unwrap();
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
#[derive(Debug, Default)]
pub struct HtmlConverter;

impl HtmlConverter {
    /// Create a new HTML converter.
    pub fn new() -> Self {
        Self
    }

    fn render_page(&self, html: &mut String, page: &ExtractedPage) {
        let _ = writeln!(
            html,
            "<div class=\"page\" style=\"width: {}px; height: {}px;\">",
            page.width, page.height
        );
        for image in &page.images {
            self.render_image(html, image);
        }
        for run in &page.runs {
            self.render_run(html, run);
        }
        html.push_str("</div>\n");
    }

    fn render_image(&self, html: &mut String, image: &PageImage) {
        let _ = writeln!(
            html,
            "  <img src=\"{}\" style=\"left: {}px; top: {}px; width: {}px; height: {}px;\" alt=\"\">",
            image.to_data_uri(),
            image.x0,
            image.y0,
            image.width,
            image.height
        );
    }

    fn render_run(&self, html: &mut String, run: &Run) {
        let vertical = if run.is_superscript {
            " vertical-align: super;"
        } else if run.is_subscript {
            " vertical-align: sub;"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "  <span class=\"run\" style=\"left: {}px; top: {}px; font-size: {}px; \
             font-family: {}; font-weight: {}; font-style: {}; color: {};{}\">{}</span>",
            run.x,
            run.y,
            run.font_size,
            escape_html(&run.font_name),
            run.font_weight.as_css(),
            run.font_style.as_css(),
            run.color,
            vertical,
            escape_html(&run.text)
        );
    }
}

impl OutputConverter for HtmlConverter {
    fn convert(&self, document: &ExtractedDocument) -> Result<String> {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&document.name));
        html.push_str("<style>\n");
        html.push_str(".page {\n  position: relative;\n  margin: 0 auto;\n}\n");
        html.push_str(".run {\n  position: absolute;\n  white-space: pre;\n}\n");
        html.push_str(".page img {\n  position: absolute;\n}\n");
        html.push_str("</style>\n</head>\n<body>\n");

        for page in &document.pages {
            self.render_page(&mut html, page);
        }

        html.push_str("</body>\n</html>\n");
        Ok(html)
    }
}
