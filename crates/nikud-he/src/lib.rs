//! Hebrew niqqud analysis.
//!
//! - [`pattern`] -- diacritic stripping and structural patterns
//! - [`rules`] -- named ending and containment rules
//! - [`shva`], [`syllable`], [`special`] -- per-word classifiers
//! - [`analyzer`] -- runs the classifiers into one `WordAnalysis`
//! - [`cache`] -- memoizing analysis cache
//! - `tokenizer` -- text segmentation (feature `tokenize`)
//! - `search` -- in-memory search and statistics (feature `search`)
//! - `handle` -- `NikudHandle`, the top-level entry point (feature `handle`)

pub mod analyzer;
pub mod cache;
pub mod pattern;
pub mod rules;
pub mod shva;
pub mod special;
pub mod syllable;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "handle")]
pub mod handle;

pub use analyzer::{AnalyzeError, Analyzer, NikudAnalyzer};
#[cfg(feature = "handle")]
pub use handle::NikudHandle;
