//! Whitespace trimming and accent stripping.

use crate::normalizers::Normalizer;
use normalign_core::{chars, AlignedString, CharOrigin, Result, Span};
use unicode_normalization::UnicodeNormalization;

/// Removes leading and/or trailing whitespace from the working text.
///
/// Only whitespace at the very start and end of the current text is
/// touched; interior whitespace stays. With both flags off this is the
/// identity transform.
#[derive(Debug, Clone, Copy)]
pub struct Strip {
    /// Remove leading whitespace
    left: bool,
    /// Remove trailing whitespace
    right: bool,
}

impl Strip {
    /// Create a new strip normalizer.
    pub fn new(left: bool, right: bool) -> Self {
        Self { left, right }
    }

    /// Strip leading whitespace only.
    pub fn left() -> Self {
        Self::new(true, false)
    }

    /// Strip trailing whitespace only.
    pub fn right() -> Self {
        Self::new(false, true)
    }
}

impl Default for Strip {
    /// Strips both sides.
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Normalizer for Strip {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        if self.right {
            let total = text.char_len();
            let trailing = text
                .normalized()
                .chars()
                .rev()
                .take_while(|c| chars::is_whitespace(*c))
                .count();
            if trailing > 0 {
                text.replace_range(
                    Span::new(total - trailing, total),
                    std::iter::empty::<(char, CharOrigin)>(),
                )?;
            }
        }
        if self.left {
            let leading = text
                .normalized()
                .chars()
                .take_while(|c| chars::is_whitespace(*c))
                .count();
            if leading > 0 {
                text.replace_range(
                    Span::new(0, leading),
                    std::iter::empty::<(char, CharOrigin)>(),
                )?;
            }
        }
        Ok(())
    }
}

/// Removes combining marks after canonical decomposition.
///
/// Each character is decomposed (NFD) and every combining mark in the
/// result is dropped; surviving characters keep the span of the character
/// they decomposed from. The output stays decomposed (there is no
/// recomposition pass), so "é" comes out as plain "e" either way it was
/// encoded in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct StripAccents;

impl Normalizer for StripAccents {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        let replacement: Vec<(char, CharOrigin)> = text
            .aligned_chars()
            .flat_map(|(c, span)| {
                c.nfd()
                    .filter(|d| !chars::is_combining_mark(*d))
                    .map(move |d| (d, CharOrigin::Source(span)))
            })
            .collect();
        text.replace_range(Span::new(0, text.char_len()), replacement)
    }
}
