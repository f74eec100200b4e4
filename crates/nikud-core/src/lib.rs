//! Shared types for Hebrew niqqud analysis.
//!
//! - [`character`] -- Hebrew letter predicates and the niqqud mark table
//! - [`enums`] -- syllable, shva, special-case and pattern-tag enumerations
//! - [`analysis`] -- the `WordAnalysis` result and its serialized forms
//! - [`token`] -- text segmenter output

pub mod analysis;
pub mod character;
pub mod enums;
pub mod token;
