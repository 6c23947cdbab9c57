//! Styled run output records.

use serde::{Deserialize, Serialize};

use crate::fonts::{FontStyle, FontWeight};
use crate::text::style::StyleSignature;
use crate::utils::round2;

/// A styled run: a word, a single symbol, or a single super/subscript glyph.
///
/// Runs are the output boundary of the segmentation engine. Each carries one
/// consistent style, the anchor position of its first glyph, and the
/// super/subscript flags (set only on script runs, which are always emitted
/// alone and never merged into words). `font_size`, `x`, and `y` are rounded
/// to two decimals at construction; the color string is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// Run text: a whole word, or a single character for symbol and script
    /// runs.
    #[serde(rename = "word")]
    pub text: String,

    /// Font size in points, rounded to two decimals.
    pub font_size: f32,

    /// Normalized font family.
    pub font_name: String,

    /// Font weight.
    pub font_weight: FontWeight,

    /// Font style.
    pub font_style: FontStyle,

    /// CSS `rgb(...)` color string.
    pub color: String,

    /// X coordinate of the anchor glyph, rounded to two decimals.
    pub x: f32,

    /// Y coordinate of the anchor glyph, rounded to two decimals.
    pub y: f32,

    /// True for a superscript script run.
    pub is_superscript: bool,

    /// True for a subscript script run.
    pub is_subscript: bool,
}

impl Run {
    /// Build a run from its parts, applying the output rounding.
    pub fn styled(
        text: impl Into<String>,
        signature: &StyleSignature,
        color: impl Into<String>,
        x: f32,
        y: f32,
        is_superscript: bool,
        is_subscript: bool,
    ) -> Self {
        Self {
            text: text.into(),
            font_size: round2(signature.font_size),
            font_name: signature.family.clone(),
            font_weight: signature.weight,
            font_style: signature.style,
            color: color.into(),
            x: round2(x),
            y: round2(y),
            is_superscript,
            is_subscript,
        }
    }

    /// Whether this is a super- or subscript run.
    pub fn is_script(&self) -> bool {
        self.is_superscript || self.is_subscript
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::FontDescriptor;

    fn signature(font_size: f32, font_id: &str) -> StyleSignature {
        let d = FontDescriptor::normalize(font_id);
        StyleSignature {
            font_size,
            family: d.family,
            weight: d.weight,
            style: d.style,
        }
    }

    #[test]
    fn test_rounding_on_construction() {
        let run = Run::styled(
            "word",
            &signature(11.999, "Arial"),
            "rgb(0, 0, 0)",
            10.005,
            3.14159,
            false,
            false,
        );
        assert_eq!(run.font_size, 12.0);
        assert_eq!(run.x, 10.01);
        assert_eq!(run.y, 3.14);
    }

    #[test]
    fn test_serialized_field_names() {
        let run = Run::styled(
            "Hi",
            &signature(12.0, "Arial-BoldMT"),
            "rgb(0, 0, 0)",
            0.0,
            0.0,
            false,
            false,
        );
        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["word"], "Hi");
        assert_eq!(json["font_name"], "Arial");
        assert_eq!(json["font_weight"], "bold");
        assert_eq!(json["font_style"], "normal");
        assert_eq!(json["is_superscript"], false);
        assert!(json.get("text").is_none());
    }

    #[test]
    fn test_is_script() {
        let sig = signature(6.0, "Arial");
        let sup = Run::styled("2", &sig, "rgb(0, 0, 0)", 0.0, 0.0, true, false);
        let word = Run::styled("x", &sig, "rgb(0, 0, 0)", 0.0, 0.0, false, false);
        assert!(sup.is_script());
        assert!(!word.is_script());
    }
}
