//! Text normalizers.
//!
//! Every normalizer implements the [`Normalizer`] trait: it rewrites the
//! working text of an [`AlignedString`] in place while keeping the
//! per-character mapping back to the original input intact. Normalizers
//! carry only immutable configuration, so a single instance can be shared
//! across threads and reused for any number of inputs.

pub mod bert;
pub mod case;
pub mod cjk;
pub mod clean;
pub mod replace;
pub mod sequence;
pub mod strip;
pub mod unicode;

pub use bert::BertNormalizer;
pub use case::Lowercase;
pub use cjk::CjkSpacing;
pub use clean::CleanText;
pub use replace::Replace;
pub use sequence::Sequence;
pub use strip::{Strip, StripAccents};
pub use unicode::{NormalizationForm, UnicodeNormalizer};

use normalign_core::{AlignedString, Result};

/// Common interface for all text normalizers.
pub trait Normalizer {
    /// Apply the transformation to `text` in place, updating the working
    /// text and its alignment together.
    fn normalize(&self, text: &mut AlignedString) -> Result<()>;

    /// Normalize a raw input string, returning the aligned result.
    ///
    /// This is the entry point for callers that do not manage
    /// [`AlignedString`] instances themselves: the tokenization pipeline
    /// hands in raw text and gets back the normalized text plus the
    /// offset lookup.
    fn normalize_str(&self, text: &str) -> Result<AlignedString> {
        let mut aligned = AlignedString::new(text);
        self.normalize(&mut aligned)?;
        tracing::trace!(
            original_chars = text.chars().count(),
            normalized_chars = aligned.char_len(),
            "normalized input"
        );
        Ok(aligned)
    }
}

impl<N: Normalizer + ?Sized> Normalizer for Box<N> {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        (**self).normalize(text)
    }
}

/// Normalize a batch of texts (parallelized).
///
/// Normalizer instances are immutable, so one instance serves all worker
/// threads; every text gets its own [`AlignedString`]. Results come back
/// in input order.
pub fn normalize_batch<N>(normalizer: &N, texts: &[String]) -> Result<Vec<AlignedString>>
where
    N: Normalizer + Sync,
{
    use rayon::prelude::*;

    texts
        .par_iter()
        .map(|text| normalizer.normalize_str(text))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_str_identity_for_noop() {
        // An empty sequence is the identity transform
        let normalizer = Sequence::default();
        let result = normalizer.normalize_str("Héllo 世界").unwrap();
        assert_eq!(result.normalized(), "Héllo 世界");
        assert_eq!(result.original(), "Héllo 世界");
        for (i, span) in result.alignment().iter().enumerate() {
            assert_eq!((span.start, span.end), (i, i + 1));
        }
    }

    #[test]
    fn test_boxed_normalizer() {
        let boxed: Box<dyn Normalizer + Send + Sync> = Box::new(Lowercase);
        let result = boxed.normalize_str("ABC").unwrap();
        assert_eq!(result.normalized(), "abc");
    }

    #[test]
    fn test_normalize_batch_matches_sequential() {
        let normalizer = BertNormalizer::default();
        let texts = vec![
            "Héllò".to_string(),
            "  HELLO  ".to_string(),
            "你好".to_string(),
            String::new(),
        ];

        let batch = normalize_batch(&normalizer, &texts).unwrap();
        assert_eq!(batch.len(), texts.len());
        for (text, result) in texts.iter().zip(&batch) {
            let expected = normalizer.normalize_str(text).unwrap();
            assert_eq!(result, &expected);
        }
    }
}
