// Corpus statistics over analyzed words

use std::collections::{BTreeMap, HashSet};

use nikud_core::analysis::WordAnalysis;
use nikud_core::enums::{ShvaType, SpecialCase, SyllableType};

/// Counts over a set of analyzed words. Every occurrence counts, except for
/// `unique_words`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub total_words: usize,
    /// Distinct vocalized words.
    pub unique_words: usize,
    pub words_with_shva: usize,
    pub words_with_dagesh: usize,
    pub syllable_distribution: BTreeMap<SyllableType, usize>,
    pub shva_distribution: BTreeMap<ShvaType, usize>,
    pub special_cases: BTreeMap<SpecialCase, usize>,
}

impl Statistics {
    pub fn from_analyses<T: AsRef<WordAnalysis>>(words: &[T]) -> Self {
        let mut stats = Statistics::default();
        let mut seen: HashSet<&str> = HashSet::new();
        for w in words {
            let a = w.as_ref();
            stats.total_words += 1;
            if seen.insert(a.word()) {
                stats.unique_words += 1;
            }
            if a.has_shva() {
                stats.words_with_shva += 1;
            }
            if a.has_dagesh() {
                stats.words_with_dagesh += 1;
            }
            *stats.syllable_distribution.entry(a.syllable_type()).or_default() += 1;
            *stats.shva_distribution.entry(a.shva_type()).or_default() += 1;
            for &case in a.special_cases() {
                *stats.special_cases.entry(case).or_default() += 1;
            }
        }
        stats
    }
}
