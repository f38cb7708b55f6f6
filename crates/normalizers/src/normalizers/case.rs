//! Case folding.

use crate::normalizers::Normalizer;
use normalign_core::{AlignedString, CharOrigin, Result, Span};

/// Lowercases the working text character by character.
///
/// Uses the locale-independent per-character lowercase mapping. A single
/// character may map to more than one (e.g. U+0130, LATIN CAPITAL LETTER
/// I WITH DOT ABOVE); every output character inherits the source
/// character's original span.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl Normalizer for Lowercase {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        let replacement: Vec<(char, CharOrigin)> = text
            .aligned_chars()
            .flat_map(|(c, span)| c.to_lowercase().map(move |l| (l, CharOrigin::Source(span))))
            .collect();
        text.replace_range(Span::new(0, text.char_len()), replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let result = Lowercase.normalize_str("HELLO").unwrap();
        assert_eq!(result.normalized(), "hello");
    }

    #[test]
    fn test_already_lowercase() {
        let result = Lowercase.normalize_str("hello").unwrap();
        assert_eq!(result.normalized(), "hello");
    }

    #[test]
    fn test_idempotent() {
        let once = Lowercase.normalize_str("MiXeD Case 123").unwrap();
        let twice = Lowercase.normalize_str(once.normalized()).unwrap();
        assert_eq!(once.normalized(), twice.normalized());
    }

    #[test]
    fn test_spans_preserved() {
        let result = Lowercase.normalize_str("AbC").unwrap();
        assert_eq!(
            result.alignment(),
            &[Span::new(0, 1), Span::new(1, 2), Span::new(2, 3)]
        );
    }

    #[test]
    fn test_multi_char_expansion_shares_span() {
        // U+0130 lowercases to 'i' + combining dot above
        let result = Lowercase.normalize_str("\u{0130}x").unwrap();
        assert_eq!(result.normalized(), "i\u{0307}x");
        assert_eq!(result.alignment()[0], Span::new(0, 1));
        assert_eq!(result.alignment()[1], Span::new(0, 1));
        assert_eq!(result.alignment()[2], Span::new(1, 2));
    }

    #[test]
    fn test_no_eszett_expansion() {
        let result = Lowercase.normalize_str("straße").unwrap();
        assert_eq!(result.normalized(), "straße");
    }
}
