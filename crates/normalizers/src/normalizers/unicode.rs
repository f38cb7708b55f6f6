//! Unicode normalization forms.
//!
//! Alignment-aware application of the standard normalization forms (NFC,
//! NFD, NFKC, NFKD). The text is processed one combining cluster at a
//! time (a starter character plus the following characters that compose
//! or reorder with it) so the alignment can attribute every output
//! character to the input characters it came from. The normalization
//! algorithms themselves come from `unicode-normalization`.

use crate::normalizers::Normalizer;
use normalign_core::{AlignedString, CharOrigin, Result, Span};
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Normalization form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizationForm {
    /// Canonical composition
    #[default]
    NFC,
    /// Canonical decomposition
    NFD,
    /// Compatibility composition
    NFKC,
    /// Compatibility decomposition
    NFKD,
    /// No normalization
    None,
}

/// Applies a Unicode normalization form while tracking alignment.
///
/// Output characters of a single-character cluster inherit that
/// character's span; characters produced from a multi-character cluster
/// (e.g. a base letter composed with its accent) share the cluster's
/// combined span.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer {
    /// Normalization form to apply
    form: NormalizationForm,
}

/// True if `c` continues the current combining cluster: characters with
/// a non-zero canonical combining class, and Hangul jamo vowels/trailing
/// consonants, which compose with the preceding syllable part.
fn continues_cluster(c: char) -> bool {
    canonical_combining_class(c) != 0 || matches!(c as u32, 0x1161..=0x11FF)
}

impl UnicodeNormalizer {
    /// Create a new normalizer.
    pub fn new(form: NormalizationForm) -> Self {
        Self { form }
    }

    /// Create an NFC normalizer (the default).
    pub fn nfc() -> Self {
        Self::new(NormalizationForm::NFC)
    }

    /// Create an NFD normalizer.
    pub fn nfd() -> Self {
        Self::new(NormalizationForm::NFD)
    }

    /// Create an NFKC normalizer.
    pub fn nfkc() -> Self {
        Self::new(NormalizationForm::NFKC)
    }

    /// Create an NFKD normalizer.
    pub fn nfkd() -> Self {
        Self::new(NormalizationForm::NFKD)
    }

    /// Check if normalization is enabled.
    pub fn is_enabled(&self) -> bool {
        self.form != NormalizationForm::None
    }

    fn apply_cluster(&self, cluster: &str) -> String {
        match self.form {
            NormalizationForm::NFC => cluster.nfc().collect(),
            NormalizationForm::NFD => cluster.nfd().collect(),
            NormalizationForm::NFKC => cluster.nfkc().collect(),
            NormalizationForm::NFKD => cluster.nfkd().collect(),
            NormalizationForm::None => cluster.to_string(),
        }
    }
}

impl Normalizer for UnicodeNormalizer {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let input: Vec<(char, Span)> = text.aligned_chars().collect();
        let mut replacement: Vec<(char, CharOrigin)> = Vec::with_capacity(input.len());
        let mut i = 0;
        while i < input.len() {
            let mut j = i + 1;
            while j < input.len() && continues_cluster(input[j].0) {
                j += 1;
            }
            let cluster: String = input[i..j].iter().map(|&(c, _)| c).collect();
            let span = if j - i == 1 {
                input[i].1
            } else {
                Span::new(input[i].1.start, input[j - 1].1.end)
            };
            for out in self.apply_cluster(&cluster).chars() {
                replacement.push((out, CharOrigin::Source(span)));
            }
            i = j;
        }
        text.replace_range(Span::new(0, text.char_len()), replacement)
    }
}
