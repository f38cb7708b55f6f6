//! Pattern replacement.

use crate::normalizers::Normalizer;
use normalign_core::{AlignedString, CharOrigin, NormalizeError, Result, Span};
use regex::Regex;

#[derive(Debug, Clone)]
enum Pattern {
    Literal(String),
    Regex(Regex),
}

/// Replaces every match of a pattern with fixed content.
///
/// Matches are non-overlapping, found left to right, and applied right to
/// left so earlier offsets stay valid while editing. Every character of
/// the replacement content maps back to the full original span of the
/// matched text; empty matches are skipped.
#[derive(Debug, Clone)]
pub struct Replace {
    pattern: Pattern,
    content: String,
}

impl Replace {
    /// Replace every occurrence of a literal string.
    pub fn new(pattern: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::Literal(pattern.into()),
            content: content.into(),
        }
    }

    /// Replace every match of a regular expression.
    pub fn regex(pattern: &str, content: impl Into<String>) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| NormalizeError::InvalidPattern(e.to_string()))?;
        Ok(Self {
            pattern: Pattern::Regex(regex),
            content: content.into(),
        })
    }

    /// Byte-offset matches in `text`, non-overlapping, left to right.
    fn find_matches(&self, text: &str) -> Vec<(usize, usize)> {
        match &self.pattern {
            Pattern::Literal(pattern) => {
                if pattern.is_empty() {
                    return Vec::new();
                }
                text.match_indices(pattern.as_str())
                    .map(|(start, matched)| (start, start + matched.len()))
                    .collect()
            }
            Pattern::Regex(regex) => regex
                .find_iter(text)
                .filter(|m| !m.as_str().is_empty())
                .map(|m| (m.start(), m.end()))
                .collect(),
        }
    }
}

impl Normalizer for Replace {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        let matches = self.find_matches(text.normalized());
        if matches.is_empty() {
            return Ok(());
        }

        // Match offsets are bytes; the alignment works in chars. Collect
        // the char boundary table once, before any edit.
        let boundaries: Vec<usize> = text
            .normalized()
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(text.normalized().len()))
            .collect();

        for &(byte_start, byte_end) in matches.iter().rev() {
            let start = boundaries.partition_point(|&b| b < byte_start);
            let end = boundaries.partition_point(|&b| b < byte_end);
            let range = Span::new(start, end);
            let span = text
                .to_original_range(range)
                .ok_or(NormalizeError::RangeOutOfBounds {
                    start,
                    end,
                    len: text.char_len(),
                })?;
            let replacement: Vec<(char, CharOrigin)> = self
                .content
                .chars()
                .map(|c| (c, CharOrigin::Source(span)))
                .collect();
            text.replace_range(range, replacement)?;
        }
        Ok(())
    }
}
