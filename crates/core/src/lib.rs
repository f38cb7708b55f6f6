//! Normalign-core - alignment-tracking text primitives
//!
//! This crate provides the fundamental data structures for the normalign
//! text normalizer: the [`AlignedString`] buffer that maps every character
//! of a normalized text back to its source span in the original input,
//! the [`Span`] offset type, and the Unicode classification helpers the
//! transforms rely on.
//!
//! # Features
//!
//! - Single mutation primitive (`replace_range`) that updates text and
//!   alignment together, so per-transform bookkeeping stays trivial
//! - Char-offset spans that survive splits, merges, insertions and
//!   deletions in any order
//! - Read-only Unicode lookup tables (CJK blocks, format characters)
//! - Error handling with detailed diagnostics
//!
//! # Example
//!
//! ```rust
//! use normalign_core::{AlignedString, Span};
//!
//! let text = AlignedString::new("Héllo");
//! assert_eq!(text.normalized(), "Héllo");
//! assert_eq!(text.alignment().len(), 5);
//! assert_eq!(text.to_original_range(Span::new(0, 2)), Some(Span::new(0, 2)));
//! ```

pub mod error;
pub use error::{NormalizeError, Result};

pub mod span;
pub use span::Span;

pub mod aligned;
pub use aligned::{AlignedString, CharOrigin};

// Unicode classification tables
pub mod chars;
