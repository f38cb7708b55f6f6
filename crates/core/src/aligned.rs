//! The alignment-tracking string buffer.
//!
//! [`AlignedString`] pairs the working (normalized) text with a
//! per-character mapping back to the original input, so that after any
//! chain of transforms a consumer can still report token offsets in
//! original-text coordinates.
//!
//! All mutation goes through [`AlignedString::replace_range`], which
//! updates the text and the alignment together. Transforms never touch
//! the two structures separately.

use crate::error::{NormalizeError, Result};
use crate::span::Span;

/// Provenance of a character handed to [`AlignedString::replace_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharOrigin {
    /// Derived from the given char range of the original text.
    Source(Span),
    /// Inserted with no original counterpart. The resulting alignment
    /// entry is an empty span anchored at the nearest neighbor boundary.
    Inserted,
}

/// Text buffer that tracks, for every character of the working text, the
/// half-open char range of the original input it derives from.
///
/// Invariants, upheld by `replace_range`:
/// - one alignment entry per char of the working text
/// - span starts are monotonically non-decreasing (normalization never
///   reorders text)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedString {
    /// The input text, immutable after construction
    original: String,
    /// The working text
    normalized: String,
    /// One span into `original` per char of `normalized`
    alignment: Vec<Span>,
}

/// Byte offset of the `char_offset`-th char of `text`, or `text.len()`
/// for the one-past-the-end position.
fn byte_offset_of(text: &str, char_offset: usize) -> Option<usize> {
    text.char_indices()
        .map(|(b, _)| b)
        .chain(std::iter::once(text.len()))
        .nth(char_offset)
}

impl AlignedString {
    /// Create an aligned string with the identity alignment: char `i` of
    /// the working text maps to `[i, i + 1)` of the original.
    pub fn new(text: &str) -> Self {
        let alignment = text
            .chars()
            .enumerate()
            .map(|(i, _)| Span::new(i, i + 1))
            .collect();
        Self {
            original: text.to_string(),
            normalized: text.to_string(),
            alignment,
        }
    }

    /// Create an aligned string from raw bytes, validating the encoding.
    ///
    /// This is the boundary constructor for callers that receive
    /// unchecked input. Malformed UTF-8 is reported as
    /// [`NormalizeError::InvalidEncoding`]; it is the only failure mode
    /// the engine has in ordinary operation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|e| NormalizeError::InvalidEncoding {
            valid_up_to: e.valid_up_to(),
        })?;
        Ok(Self::new(text))
    }

    /// The original input text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The current working text.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// One original-text span per char of the working text.
    pub fn alignment(&self) -> &[Span] {
        &self.alignment
    }

    /// Number of chars in the working text.
    pub fn char_len(&self) -> usize {
        self.alignment.len()
    }

    /// Check if the working text is empty.
    pub fn is_empty(&self) -> bool {
        self.alignment.is_empty()
    }

    /// Iterate over the chars of the working text with their original
    /// spans.
    pub fn aligned_chars(&self) -> impl Iterator<Item = (char, Span)> + '_ {
        self.normalized.chars().zip(self.alignment.iter().copied())
    }

    /// Replace a char range of the working text.
    ///
    /// This is the single low-level mutation primitive every transform
    /// uses: the caller states, for each replacement char, which
    /// original-text range it derives from ([`CharOrigin::Source`]) or
    /// that it has none ([`CharOrigin::Inserted`]). Inserted chars get an
    /// empty span anchored at the end of the nearest preceding entry, or
    /// at the start of the following entry when nothing precedes them.
    ///
    /// `range` is in char offsets of the current working text. Inverted
    /// or out-of-bounds ranges are rejected.
    pub fn replace_range<I>(&mut self, range: Span, replacement: I) -> Result<()>
    where
        I: IntoIterator<Item = (char, CharOrigin)>,
    {
        let len = self.alignment.len();
        if range.start > range.end || range.end > len {
            return Err(NormalizeError::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        let oob = |pos: usize| NormalizeError::RangeOutOfBounds {
            start: pos,
            end: pos,
            len,
        };
        let byte_start = byte_offset_of(&self.normalized, range.start).ok_or(oob(range.start))?;
        let byte_end = byte_offset_of(&self.normalized, range.end).ok_or(oob(range.end))?;

        let mut text = String::new();
        let mut spans: Vec<Span> = Vec::new();
        // Chars inserted before any sourced char have no left anchor yet;
        // they are re-anchored once one is known.
        let mut pending = 0usize;
        let mut prev_end = (range.start > 0).then(|| self.alignment[range.start - 1].end);

        for (c, origin) in replacement {
            text.push(c);
            match origin {
                CharOrigin::Source(span) => {
                    if pending > 0 {
                        let anchor = Span::at(span.start);
                        for slot in spans.iter_mut().rev().take(pending) {
                            *slot = anchor;
                        }
                        pending = 0;
                    }
                    spans.push(span);
                    prev_end = Some(span.end);
                }
                CharOrigin::Inserted => match prev_end {
                    Some(end) => spans.push(Span::at(end)),
                    None => {
                        spans.push(Span::at(0));
                        pending += 1;
                    }
                },
            }
        }
        if pending > 0 {
            let next_start = self.alignment.get(range.end).map(|s| s.start).unwrap_or(0);
            let anchor = Span::at(next_start);
            for slot in spans.iter_mut().rev().take(pending) {
                *slot = anchor;
            }
        }

        self.normalized.replace_range(byte_start..byte_end, &text);
        self.alignment.splice(range.start..range.end, spans);
        Ok(())
    }

    /// Minimal original-text span covering a char range of the working
    /// text.
    ///
    /// Returns the union (min start, max end) of the alignment entries in
    /// the range. An empty request yields an empty span anchored at the
    /// nearest boundary. Returns `None` only for inverted or
    /// out-of-bounds ranges.
    pub fn to_original_range(&self, range: Span) -> Option<Span> {
        let len = self.alignment.len();
        if range.start > range.end || range.end > len {
            return None;
        }
        if range.start == range.end {
            let anchor = if range.start < len {
                self.alignment[range.start].start
            } else if let Some(last) = self.alignment.last() {
                last.end
            } else {
                0
            };
            return Some(Span::at(anchor));
        }
        let entries = &self.alignment[range.start..range.end];
        let start = entries.iter().map(|s| s.start).min()?;
        let end = entries.iter().map(|s| s.end).max()?;
        Some(Span::new(start, end))
    }

    /// The original-text fragment covered by `span` (char offsets into
    /// the original).
    pub fn original_slice(&self, span: Span) -> Option<&str> {
        if span.start > span.end {
            return None;
        }
        let start = byte_offset_of(&self.original, span.start)?;
        let end = byte_offset_of(&self.original, span.end)?;
        self.original.get(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_alignment() {
        let text = AlignedString::new("abc");
        assert_eq!(text.normalized(), "abc");
        assert_eq!(text.original(), "abc");
        assert_eq!(
            text.alignment(),
            &[Span::new(0, 1), Span::new(1, 2), Span::new(2, 3)]
        );
    }

    #[test]
    fn test_empty_input() {
        let text = AlignedString::new("");
        assert!(text.is_empty());
        assert_eq!(text.char_len(), 0);
        assert_eq!(text.to_original_range(Span::new(0, 0)), Some(Span::at(0)));
    }

    #[test]
    fn test_from_bytes_valid() {
        let text = AlignedString::from_bytes("héllo".as_bytes()).unwrap();
        assert_eq!(text.normalized(), "héllo");
    }

    #[test]
    fn test_from_bytes_invalid() {
        let err = AlignedString::from_bytes(&[0x68, 0xff, 0x68]).unwrap_err();
        match err {
            NormalizeError::InvalidEncoding { valid_up_to } => assert_eq!(valid_up_to, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_replace_range_substitution() {
        let mut text = AlignedString::new("abc");
        text.replace_range(
            Span::new(1, 2),
            [('X', CharOrigin::Source(Span::new(1, 2)))],
        )
        .unwrap();
        assert_eq!(text.normalized(), "aXc");
        assert_eq!(text.alignment()[1], Span::new(1, 2));
    }

    #[test]
    fn test_replace_range_deletion() {
        let mut text = AlignedString::new("abc");
        text.replace_range(Span::new(1, 2), std::iter::empty())
            .unwrap();
        assert_eq!(text.normalized(), "ac");
        assert_eq!(text.alignment(), &[Span::new(0, 1), Span::new(2, 3)]);
    }

    #[test]
    fn test_replace_range_split() {
        // One source char expanding to two, both pointing at the source
        let mut text = AlignedString::new("aéb");
        text.replace_range(
            Span::new(1, 2),
            [
                ('e', CharOrigin::Source(Span::new(1, 2))),
                ('\u{0301}', CharOrigin::Source(Span::new(1, 2))),
            ],
        )
        .unwrap();
        assert_eq!(text.normalized(), "ae\u{0301}b");
        assert_eq!(text.char_len(), 4);
        assert_eq!(text.alignment()[1], Span::new(1, 2));
        assert_eq!(text.alignment()[2], Span::new(1, 2));
    }

    #[test]
    fn test_replace_range_merge() {
        // Two source chars merging into one spanning both
        let mut text = AlignedString::new("e\u{0301}x");
        text.replace_range(
            Span::new(0, 2),
            [('é', CharOrigin::Source(Span::new(0, 2)))],
        )
        .unwrap();
        assert_eq!(text.normalized(), "éx");
        assert_eq!(text.alignment(), &[Span::new(0, 2), Span::new(2, 3)]);
    }

    #[test]
    fn test_inserted_anchors_to_previous_end() {
        let mut text = AlignedString::new("ab");
        text.replace_range(
            Span::new(1, 1),
            [(' ', CharOrigin::Inserted)],
        )
        .unwrap();
        assert_eq!(text.normalized(), "a b");
        assert_eq!(text.alignment()[1], Span::at(1));
    }

    #[test]
    fn test_inserted_at_start_anchors_to_following() {
        // Remove the first char, then insert at position 0: the inserted
        // char must anchor at the surviving neighbor's start, not at 0.
        let mut text = AlignedString::new("abc");
        text.replace_range(Span::new(0, 1), std::iter::empty())
            .unwrap();
        text.replace_range(Span::new(0, 0), [('_', CharOrigin::Inserted)])
            .unwrap();
        assert_eq!(text.normalized(), "_bc");
        assert_eq!(text.alignment()[0], Span::at(1));
    }

    #[test]
    fn test_replace_range_out_of_bounds() {
        let mut text = AlignedString::new("ab");
        let err = text
            .replace_range(Span::new(1, 5), std::iter::empty())
            .unwrap_err();
        assert!(matches!(err, NormalizeError::RangeOutOfBounds { .. }));
    }

    #[test]
    fn test_replace_range_multibyte_offsets() {
        // Char offsets, not byte offsets: é is 2 bytes, 你 is 3
        let mut text = AlignedString::new("é你a");
        text.replace_range(
            Span::new(1, 2),
            [('X', CharOrigin::Source(Span::new(1, 2)))],
        )
        .unwrap();
        assert_eq!(text.normalized(), "éXa");
    }

    #[test]
    fn test_to_original_range_union() {
        let mut text = AlignedString::new("abcd");
        text.replace_range(Span::new(1, 2), std::iter::empty())
            .unwrap();
        // Working text "acd"; chars 1..3 cover original chars 2..4
        assert_eq!(
            text.to_original_range(Span::new(1, 3)),
            Some(Span::new(2, 4))
        );
        // The full working text still covers the full original
        assert_eq!(
            text.to_original_range(Span::new(0, 3)),
            Some(Span::new(0, 4))
        );
    }

    #[test]
    fn test_to_original_range_empty_anchors() {
        let text = AlignedString::new("ab");
        assert_eq!(text.to_original_range(Span::new(1, 1)), Some(Span::at(1)));
        assert_eq!(text.to_original_range(Span::new(2, 2)), Some(Span::at(2)));
    }

    #[test]
    fn test_to_original_range_out_of_bounds() {
        let text = AlignedString::new("ab");
        assert_eq!(text.to_original_range(Span::new(0, 3)), None);
        assert_eq!(text.to_original_range(Span::new(2, 1)), None);
    }

    #[test]
    fn test_original_slice() {
        let text = AlignedString::new("héllo");
        assert_eq!(text.original_slice(Span::new(1, 3)), Some("él"));
        assert_eq!(text.original_slice(Span::new(0, 5)), Some("héllo"));
        assert_eq!(text.original_slice(Span::new(0, 9)), None);
    }

    #[test]
    fn test_alignment_length_invariant() {
        let mut text = AlignedString::new("hello");
        text.replace_range(
            Span::new(0, 2),
            [
                ('a', CharOrigin::Source(Span::new(0, 1))),
                ('b', CharOrigin::Source(Span::new(1, 2))),
                ('c', CharOrigin::Inserted),
            ],
        )
        .unwrap();
        assert_eq!(text.normalized().chars().count(), text.alignment().len());
    }
}
