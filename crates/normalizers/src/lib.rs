//! Normalign - alignment-preserving text normalization
//!
//! This crate is the text-normalization stage of a tokenization pipeline:
//! it transforms raw input text into a canonical form before tokenization
//! while keeping, for every normalized character, the span of the
//! original text it derives from. Downstream consumers use that mapping
//! to report token offsets in original-text coordinates.
//!
//! # Features
//!
//! - Composable transforms behind a single [`Normalizer`] trait
//! - BERT-style composite recipe with independently toggleable stages
//! - Arbitrary chaining and nesting via [`Sequence`]
//! - Unicode normalization forms (NFC/NFD/NFKC/NFKD) with alignment
//! - Literal and regex pattern replacement
//! - Parallel batch normalization
//!
//! # Example
//!
//! ```rust
//! use normalign::{BertNormalizer, Normalizer, Span};
//!
//! let normalizer = BertNormalizer::default();
//! let result = normalizer.normalize_str("Héllò")?;
//! assert_eq!(result.normalized(), "hello");
//!
//! // Every normalized char still maps back to the original text
//! assert_eq!(result.to_original_range(Span::new(0, 5)), Some(Span::new(0, 5)));
//! # Ok::<(), normalign::NormalizeError>(())
//! ```

// Re-export core types
pub use normalign_core::{AlignedString, CharOrigin, NormalizeError, Result, Span};

// Normalizers
pub mod normalizers;
pub use normalizers::{
    normalize_batch, BertNormalizer, CjkSpacing, CleanText, Lowercase, NormalizationForm,
    Normalizer, Replace, Sequence, Strip, StripAccents, UnicodeNormalizer,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
