//! Decoded glyph input model.
//!
//! Glyphs are produced by an external PDF decoding collaborator and are
//! read-only to this crate. A page's glyphs arrive in the decoder's
//! left-to-right, top-to-bottom reading order; the segmentation engine never
//! reorders them, and a violated ordering produces incorrect but
//! non-crashing output.

use serde::{Deserialize, Serialize};

/// A text color as decoded from the page content stream.
///
/// PDF non-stroking colors reach the decoder as either a single grayscale
/// component or an RGB triple, all channels in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use pdf_runs::glyph::Color;
///
/// assert_eq!(Color::Rgb(1.0, 0.0, 0.0).to_css(), "rgb(255, 0, 0)");
/// assert_eq!(Color::Gray(0.5).to_css(), "rgb(127.5, 127.5, 127.5)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub enum Color {
    /// Single-channel grayscale color.
    Gray(f32),
    /// Three-channel RGB color.
    Rgb(f32, f32, f32),
}

impl Color {
    /// Black in grayscale, the decoder's fallback when a glyph carries no
    /// explicit color.
    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    /// Render as a CSS `rgb(...)` string.
    ///
    /// Channels are scaled by 255 and emitted as-is: a grayscale component is
    /// broadcast across all three channels, and no channel is ever rounded.
    pub fn to_css(&self) -> String {
        match *self {
            Color::Rgb(r, g, b) => {
                format!("rgb({}, {}, {})", r * 255.0, g * 255.0, b * 255.0)
            },
            Color::Gray(v) => {
                let c = v * 255.0;
                format!("rgb({}, {}, {})", c, c, c)
            },
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

// Glyph dumps carry colors as the decoder's 1- or 3-component tuples.
impl TryFrom<Vec<f32>> for Color {
    type Error = String;

    fn try_from(components: Vec<f32>) -> std::result::Result<Self, Self::Error> {
        match components.as_slice() {
            [v] => Ok(Color::Gray(*v)),
            [r, g, b] => Ok(Color::Rgb(*r, *g, *b)),
            other => Err(format!(
                "expected 1 or 3 color components, found {}",
                other.len()
            )),
        }
    }
}

impl From<Color> for Vec<f32> {
    fn from(color: Color) -> Self {
        match color {
            Color::Gray(v) => vec![v],
            Color::Rgb(r, g, b) => vec![r, g, b],
        }
    }
}

/// A single positioned glyph as decoded from a page.
///
/// Coordinates use a top-left origin with `y` increasing downward, matching
/// the decoder's page space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glyph {
    /// The decoded character or symbol. Usually a single character; the
    /// decoder may hand over multi-character strings for ligatures.
    ///
    /// The decoder never supplies an empty string here; the engine does not
    /// validate this precondition and its output for empty text is
    /// unspecified.
    pub text: String,

    /// Font size in points (positive).
    pub font_size: f32,

    /// Raw font identifier, possibly carrying a subset prefix
    /// (`ABCDEE+Arial`) and style suffixes (`-BoldMT`).
    pub font_id: String,

    /// X coordinate of the glyph's left edge.
    pub x: f32,

    /// Y coordinate of the glyph's top edge.
    pub top: f32,

    /// Non-stroking color of the glyph.
    #[serde(default)]
    pub color: Color,
}

impl Glyph {
    /// Create a glyph.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_runs::glyph::{Color, Glyph};
    ///
    /// let g = Glyph::new("a", 12.0, "Times-Roman", 72.0, 100.0, Color::black());
    /// assert_eq!(g.text, "a");
    /// assert_eq!(g.font_size, 12.0);
    /// ```
    pub fn new(
        text: impl Into<String>,
        font_size: f32,
        font_id: impl Into<String>,
        x: f32,
        top: f32,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_id: font_id.into(),
            x,
            top,
            color,
        }
    }
}
