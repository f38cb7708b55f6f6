//! BERT-style composite normalization.

use crate::normalizers::{CjkSpacing, CleanText, Lowercase, Normalizer, StripAccents};
use normalign_core::{AlignedString, Result};

/// The classic BERT normalization recipe.
///
/// A fixed-order bundle of four standard transforms, each independently
/// toggleable: text cleanup, then CJK spacing, then accent stripping,
/// then lowercasing. Cleanup runs first so control characters cannot
/// interfere with the CJK block scan. The composite is pure
/// orchestration; all alignment bookkeeping lives in the primitives.
#[derive(Debug, Clone, Copy)]
pub struct BertNormalizer {
    /// Remove control characters and canonicalize whitespace
    clean_text: bool,
    /// Put spaces around CJK ideographs
    handle_chinese_chars: bool,
    /// Remove combining marks
    strip_accents: bool,
    /// Lowercase the text
    lowercase: bool,
}

impl BertNormalizer {
    /// Create a BERT normalizer with each stage toggled explicitly.
    pub fn new(
        clean_text: bool,
        handle_chinese_chars: bool,
        strip_accents: bool,
        lowercase: bool,
    ) -> Self {
        Self {
            clean_text,
            handle_chinese_chars,
            strip_accents,
            lowercase,
        }
    }
}

impl Default for BertNormalizer {
    /// All stages enabled.
    fn default() -> Self {
        Self::new(true, true, true, true)
    }
}

impl Normalizer for BertNormalizer {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        if self.clean_text {
            CleanText.normalize(text)?;
        }
        if self.handle_chinese_chars {
            CjkSpacing.normalize(text)?;
        }
        if self.strip_accents {
            StripAccents.normalize(text)?;
        }
        if self.lowercase {
            Lowercase.normalize(text)?;
        }
        tracing::debug!(
            clean_text = self.clean_text,
            handle_chinese_chars = self.handle_chinese_chars,
            strip_accents = self.strip_accents,
            lowercase = self.lowercase,
            chars = text.char_len(),
            "applied bert normalization"
        );
        Ok(())
    }
}
