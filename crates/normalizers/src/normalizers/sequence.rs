//! Normalizer chaining.

use crate::normalizers::Normalizer;
use normalign_core::{AlignedString, Result};

/// Applies a list of normalizers in order.
///
/// Each stage consumes the previous stage's output. An empty sequence is
/// the identity transform. A sequence is itself a normalizer, so
/// sequences nest freely.
///
/// # Example
///
/// ```rust
/// use normalign::{Lowercase, Normalizer, Sequence, Strip};
///
/// let normalizer = Sequence::new(vec![
///     Box::new(Lowercase),
///     Box::new(Strip::default()),
/// ]);
/// let result = normalizer.normalize_str("  HELLO  ")?;
/// assert_eq!(result.normalized(), "hello");
/// # Ok::<(), normalign::NormalizeError>(())
/// ```
#[derive(Default)]
pub struct Sequence {
    normalizers: Vec<Box<dyn Normalizer + Send + Sync>>,
}

impl Sequence {
    /// Create a sequence from an ordered list of normalizers.
    pub fn new(normalizers: Vec<Box<dyn Normalizer + Send + Sync>>) -> Self {
        Self { normalizers }
    }

    /// Append a normalizer to the end of the chain.
    pub fn push(&mut self, normalizer: Box<dyn Normalizer + Send + Sync>) {
        self.normalizers.push(normalizer);
    }

    /// Append a normalizer, consuming and returning the sequence.
    pub fn with(mut self, normalizer: Box<dyn Normalizer + Send + Sync>) -> Self {
        self.push(normalizer);
        self
    }

    /// Number of stages in the chain.
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    /// Check if the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }
}

impl Normalizer for Sequence {
    fn normalize(&self, text: &mut AlignedString) -> Result<()> {
        for (stage, normalizer) in self.normalizers.iter().enumerate() {
            normalizer.normalize(text)?;
            tracing::trace!(stage, chars = text.char_len(), "sequence stage applied");
        }
        Ok(())
    }
}
