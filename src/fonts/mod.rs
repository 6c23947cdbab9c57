//! Font descriptor normalization.
//!
//! Raw font identifiers from PDF content streams carry subset prefixes
//! (`ABCDEE+Calibri`), foundry suffixes (`ArialMT`), and style qualifiers
//! (`Helvetica-BoldOblique`, `Courier-BoldItalicMT`). This module reduces an
//! identifier to a canonical family name plus weight and style flags, which
//! the segmentation engine uses as part of a run's style signature.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Trailing style/weight qualifiers, each optionally hyphenated, stripped
    /// greedily so compound suffixes like `-BoldItalic` fall off in one pass.
    static ref RE_STYLE_QUALIFIERS: Regex = Regex::new(
        r"(-?(Bold|Italic|Oblique|Light|Regular|SemiBold|Medium|Black|ExtraBold|Condensed|Extended|Thin))+$"
    )
    .unwrap();
}

/// Font weight carried by a run.
///
/// The output boundary distinguishes only normal and bold; finer-grained
/// weights collapse into these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    /// Normal (regular) weight.
    #[default]
    Normal,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// CSS keyword for this weight.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    /// Check whether this weight is bold.
    pub fn is_bold(&self) -> bool {
        matches!(self, FontWeight::Bold)
    }
}

/// Font style carried by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright style.
    #[default]
    Normal,
    /// Italic or oblique style.
    Italic,
}

impl FontStyle {
    /// CSS keyword for this style.
    pub fn as_css(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }

    /// Check whether this style is italic.
    pub fn is_italic(&self) -> bool {
        matches!(self, FontStyle::Italic)
    }
}

/// A normalized font descriptor: canonical family name plus weight and
/// style flags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    /// Canonical family name with prefixes and qualifiers stripped.
    pub family: String,
    /// Weight derived from the raw identifier.
    pub weight: FontWeight,
    /// Style derived from the raw identifier.
    pub style: FontStyle,
}

impl FontDescriptor {
    /// Normalize a raw font identifier.
    ///
    /// The family is derived by stripping, in order: everything up to and
    /// including the last `+` (subset prefix), one trailing `MT`, trailing
    /// style qualifiers (repeatedly, each optionally hyphenated), one
    /// trailing hyphen, and surrounding whitespace. Weight and style are
    /// keyed off the *original* identifier: `Bold` anywhere makes the weight
    /// bold, `Italic` or `Oblique` anywhere makes the style italic.
    ///
    /// Any string is valid input; in the worst case the family is the
    /// trimmed input unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_runs::fonts::FontDescriptor;
    ///
    /// let d = FontDescriptor::normalize("ABCDEE+Arial-BoldMT");
    /// assert_eq!(d.family, "Arial");
    /// assert!(d.weight.is_bold());
    /// assert!(!d.style.is_italic());
    ///
    /// let d = FontDescriptor::normalize("TimesNewRomanPS-ItalicMT");
    /// assert_eq!(d.family, "TimesNewRomanPS");
    /// assert!(d.style.is_italic());
    /// ```
    pub fn normalize(font_id: &str) -> Self {
        let weight = if font_id.contains("Bold") {
            FontWeight::Bold
        } else {
            FontWeight::Normal
        };
        let style = if font_id.contains("Italic") || font_id.contains("Oblique") {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        };

        let tail = font_id.rsplit('+').next().unwrap_or(font_id);
        let tail = tail.strip_suffix("MT").unwrap_or(tail);
        let stripped = RE_STYLE_QUALIFIERS.replace(tail, "");
        let stripped = stripped.strip_suffix('-').unwrap_or(&stripped);

        Self {
            family: stripped.trim().to_string(),
            weight,
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn family(font_id: &str) -> String {
        FontDescriptor::normalize(font_id).family
    }

    #[test]
    fn test_subset_prefix_stripped() {
        assert_eq!(family("ABCDEE+Calibri"), "Calibri");
        // only the last '+' counts
        assert_eq!(family("AB+CD+Georgia"), "Georgia");
    }

    #[test]
    fn test_trailing_mt_stripped() {
        assert_eq!(family("ArialMT"), "Arial");
        // not stripped mid-name
        assert_eq!(family("MTSymbol"), "MTSymbol");
    }

    #[test]
    fn test_compound_qualifiers_stripped() {
        assert_eq!(family("Courier-BoldItalicMT"), "Courier");
        assert_eq!(family("Helvetica-BoldOblique"), "Helvetica");
        assert_eq!(family("OpenSans-SemiBoldItalic"), "OpenSans");
    }

    #[test]
    fn test_unhyphenated_qualifiers_stripped() {
        assert_eq!(family("FuturaCondensed"), "Futura");
        assert_eq!(family("LatoBlack"), "Lato");
    }

    #[test]
    fn test_plain_name_untouched() {
        assert_eq!(family("Symbol"), "Symbol");
        assert_eq!(family("Times New Roman"), "Times New Roman");
    }

    #[test]
    fn test_weight_from_original_id() {
        assert!(FontDescriptor::normalize("Arial-BoldMT").weight.is_bold());
        // 'Black' is a stripped qualifier but not a bold marker
        assert!(!FontDescriptor::normalize("Arial-Black").weight.is_bold());
    }

    #[test]
    fn test_style_from_original_id() {
        assert!(FontDescriptor::normalize("Courier-Oblique").style.is_italic());
        assert!(FontDescriptor::normalize("ABC+Georgia-Italic").style.is_italic());
        assert!(!FontDescriptor::normalize("Georgia").style.is_italic());
    }

    #[test]
    fn test_empty_and_degenerate_input() {
        assert_eq!(family(""), "");
        assert_eq!(family("+"), "");
        assert_eq!(family("-"), "");
        assert_eq!(family("Bold"), "");
    }

    #[test]
    fn test_css_keywords() {
        assert_eq!(FontWeight::Bold.as_css(), "bold");
        assert_eq!(FontWeight::Normal.as_css(), "normal");
        assert_eq!(FontStyle::Italic.as_css(), "italic");
        assert_eq!(FontStyle::Normal.as_css(), "normal");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&FontWeight::Bold).unwrap(), "\"bold\"");
        assert_eq!(
            serde_json::to_string(&FontStyle::Normal).unwrap(),
            "\"normal\""
        );
    }
}
