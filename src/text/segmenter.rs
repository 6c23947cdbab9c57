//! Single-pass glyph-to-run segmentation.
//!
//! The scan walks one page's glyphs in decoder order and emits runs as
//! boundaries fire. Word glyphs accumulate in an explicit buffer; symbols
//! and super/subscript glyphs are emitted immediately as their own runs.
//! The buffer flushes on a style change, before a script or symbol glyph,
//! at a line break, and at end of input.

use log::trace;

use crate::glyph::Glyph;
use crate::text::run::Run;
use crate::text::style::StyleSignature;

/// Vertical offset (points) a glyph must clear relative to its predecessor
/// to count as super- or subscript.
const SCRIPT_TOP_OFFSET: f32 = 2.0;

/// A script glyph must also be smaller than this fraction of its
/// predecessor's font size.
const SCRIPT_SIZE_RATIO: f32 = 0.9;

/// A next glyph farther than this fraction of the current font size away
/// vertically starts a new line, forcing a run boundary.
const LINE_BREAK_RATIO: f32 = 0.5;

/// Vertical placement of a script glyph relative to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScriptPosition {
    Superscript,
    Subscript,
}

/// The in-progress word: accumulated text, the anchor position of the first
/// glyph, and the signature captured when the buffer opened. Every appended
/// glyph shares that signature, since a change flushes first.
#[derive(Debug)]
struct WordBuffer {
    text: String,
    x: f32,
    top: f32,
    signature: StyleSignature,
}

impl WordBuffer {
    fn open(glyph: &Glyph, signature: StyleSignature) -> Self {
        Self {
            text: glyph.text.clone(),
            x: glyph.x,
            top: glyph.top,
            signature,
        }
    }

    /// Close the buffer into a word run. The color is the color string of
    /// the glyph being processed when the flush fires.
    fn into_word_run(self, color: &str) -> Run {
        Run::styled(self.text, &self.signature, color, self.x, self.top, false, false)
    }
}

/// Classify a glyph against its immediate predecessor in the page stream.
///
/// The comparison always uses the previous glyph by absolute index, not the
/// first glyph of the current run: a script glyph right after a flushed
/// word is judged against that word's last character.
fn script_position(glyph: &Glyph, prev: &Glyph) -> Option<ScriptPosition> {
    if glyph.font_size >= prev.font_size * SCRIPT_SIZE_RATIO {
        return None;
    }
    if glyph.top < prev.top - SCRIPT_TOP_OFFSET {
        Some(ScriptPosition::Superscript)
    } else if glyph.top > prev.top + SCRIPT_TOP_OFFSET {
        Some(ScriptPosition::Subscript)
    } else {
        None
    }
}

/// A glyph joins a word only if all its characters are alphanumeric.
/// Ligature strings from the decoder count as word text.
fn is_word_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphanumeric)
}

/// Segment one page's ordered glyph sequence into styled runs.
///
/// Single pass, O(n) in glyph count. The engine never fails: an empty
/// sequence yields an empty run sequence, and malformed ordering degrades
/// output quality without panicking. Glyphs are consumed in the order given;
/// the concatenation of all emitted run texts equals the concatenation of
/// all glyph texts.
///
/// # Examples
///
/// ```
/// use pdf_runs::{segment, Color, Glyph};
///
/// let glyphs = vec![
///     Glyph::new("a", 12.0, "Arial", 0.0, 0.0, Color::black()),
///     Glyph::new(",", 12.0, "Arial", 6.0, 0.0, Color::black()),
/// ];
/// let runs = segment(&glyphs);
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].text, "a");
/// assert_eq!(runs[1].text, ",");
/// ```
pub fn segment(glyphs: &[Glyph]) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    let mut buffer: Option<WordBuffer> = None;

    for (i, glyph) in glyphs.iter().enumerate() {
        let signature = StyleSignature::of(glyph);
        let color = glyph.color.to_css();

        // Style-change boundary: a differing signature closes the open word
        // before this glyph is classified.
        if let Some(open) = buffer.take() {
            if open.signature == signature {
                buffer = Some(open);
            } else {
                runs.push(open.into_word_run(&color));
            }
        }

        let script = match i.checked_sub(1) {
            Some(p) => script_position(glyph, &glyphs[p]),
            None => None,
        };

        match script {
            Some(position) => {
                // Script glyphs stand alone, alphanumeric or not.
                if let Some(open) = buffer.take() {
                    runs.push(open.into_word_run(&color));
                }
                runs.push(Run::styled(
                    glyph.text.clone(),
                    &signature,
                    color.as_str(),
                    glyph.x,
                    glyph.top,
                    position == ScriptPosition::Superscript,
                    position == ScriptPosition::Subscript,
                ));
            },
            None if is_word_text(&glyph.text) => match buffer.as_mut() {
                Some(open) => open.text.push_str(&glyph.text),
                None => buffer = Some(WordBuffer::open(glyph, signature)),
            },
            None => {
                // Symbol boundary: flush the word, then the symbol itself.
                if let Some(open) = buffer.take() {
                    runs.push(open.into_word_run(&color));
                }
                runs.push(Run::styled(
                    glyph.text.clone(),
                    &signature,
                    color.as_str(),
                    glyph.x,
                    glyph.top,
                    false,
                    false,
                ));
            },
        }

        // Line-break lookahead: a large vertical jump to the next glyph ends
        // the current word even when the style is unchanged.
        if let Some(next) = glyphs.get(i + 1) {
            if (next.top - glyph.top).abs() > glyph.font_size * LINE_BREAK_RATIO {
                if let Some(open) = buffer.take() {
                    runs.push(open.into_word_run(&color));
                }
            }
        }
    }

    // Trailing word at end of input.
    if let Some(open) = buffer.take() {
        let color = glyphs
            .last()
            .map(|g| g.color.to_css())
            .unwrap_or_default();
        runs.push(open.into_word_run(&color));
    }

    trace!("segmented {} glyphs into {} runs", glyphs.len(), runs.len());
    runs
}
