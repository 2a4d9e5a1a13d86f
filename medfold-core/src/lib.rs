//! Accent and diacritic folding for text analysis
//!
//! This crate folds accented Latin and Greek letters, ligatures and
//! typographic punctuation to their base forms. It has no dependencies and
//! works in `no_std` environments with `alloc`.
//!
//! - [`table`]: the static folding table and single-character lookup
//! - [`transducer`]: token rewriting with a reusable output buffer
//!
//! # Example
//!
//! ```rust
//! use medfold_core::FoldingTransducer;
//!
//! let mut transducer = FoldingTransducer::new();
//! assert_eq!(transducer.fold("Müller—Schmidt"), "Muller-Schmidt");
//! assert_eq!(transducer.fold("þing"), "þing");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod table;
#[cfg(feature = "alloc")]
pub mod transducer;

pub use table::{fold_char, is_interesting, Folded, RANGE_END, RANGE_START};
#[cfg(feature = "alloc")]
pub use transducer::{fold_str, needs_folding, FoldingTransducer, INITIAL_CAPACITY};
