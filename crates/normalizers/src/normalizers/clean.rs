//! Control character and whitespace cleanup.

use crate::normalizers::Normalizer;
use normalign_core::{chars, AlignedString, CharOrigin, Result, Span};

/// Drops control characters and canonicalizes whitespace.
///
/// Two behaviors bundled as one stage:
/// - control and format characters are removed, along with U+0000,
///   U+FFFD and the zero-width no-break space (BOM); tab, newline and
///   carriage return survive as whitespace
/// - every whitespace character is replaced one-for-one with U+0020;
///   runs are not collapsed here, that is left to later stages
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanText;

impl Normalizer for CleanText {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        let replacement: Vec<(char, CharOrigin)> = text
            .aligned_chars()
            .filter_map(|(c, span)| {
                if chars::is_whitespace(c) {
                    Some((' ', CharOrigin::Source(span)))
                } else if c == '\0' || c == '\u{fffd}' || chars::is_control(c) {
                    None
                } else {
                    Some((c, CharOrigin::Source(span)))
                }
            })
            .collect();
        text.replace_range(Span::new(0, text.char_len()), replacement)
    }
}
