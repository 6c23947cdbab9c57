//! Style signatures gating run membership.

use crate::fonts::{FontDescriptor, FontStyle, FontWeight};
use crate::glyph::Glyph;

/// The style identity of a glyph: size plus normalized font descriptor.
///
/// Two glyphs may share a word run only if their signatures are equal and no
/// boundary condition fires between them. Signatures are derived per glyph
/// and never persisted; font size compares exactly, as decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSignature {
    /// Font size in points.
    pub font_size: f32,
    /// Normalized font family.
    pub family: String,
    /// Font weight.
    pub weight: FontWeight,
    /// Font style.
    pub style: FontStyle,
}

impl StyleSignature {
    /// Compute the signature of a glyph via the font normalizer.
    pub fn of(glyph: &Glyph) -> Self {
        let descriptor = FontDescriptor::normalize(&glyph.font_id);
        Self {
            font_size: glyph.font_size,
            family: descriptor.family,
            weight: descriptor.weight,
            style: descriptor.style,
        }
    }
}
