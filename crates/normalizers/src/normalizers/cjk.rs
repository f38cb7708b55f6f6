//! CJK character spacing.

use crate::normalizers::Normalizer;
use normalign_core::{chars, AlignedString, CharOrigin, Result, Span};

/// Inserts a single space before and after every CJK ideograph.
///
/// Downstream whitespace splitting then isolates each ideograph as its
/// own unit without any CJK-aware segmentation logic. Inserted spaces
/// have no original counterpart; their alignment entries are empty spans
/// anchored at the neighbor boundary. No space is inserted next to a
/// character that is already whitespace in the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct CjkSpacing;

impl Normalizer for CjkSpacing {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        let input: Vec<(char, Span)> = text.aligned_chars().collect();
        let mut replacement = Vec::with_capacity(input.len());
        for (i, &(c, span)) in input.iter().enumerate() {
            if !chars::is_cjk(c) {
                replacement.push((c, CharOrigin::Source(span)));
                continue;
            }
            let space_before = i > 0 && chars::is_whitespace(input[i - 1].0);
            let space_after = i + 1 < input.len() && chars::is_whitespace(input[i + 1].0);
            if !space_before {
                replacement.push((' ', CharOrigin::Inserted));
            }
            replacement.push((c, CharOrigin::Source(span)));
            if !space_after {
                replacement.push((' ', CharOrigin::Inserted));
            }
        }
        text.replace_range(Span::new(0, text.char_len()), replacement)
    }
}
