// Word analyzer: runs every classifier over one word
//
// The analyzer carries no state. One value can be created at startup and
// shared by reference, or created on the spot; both are free.

use nikud_core::analysis::WordAnalysis;

use crate::{pattern, shva, special, syllable};

/// Error for input the analyzer refuses before classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    /// The word is empty once surrounding whitespace is removed.
    #[error("cannot analyze an empty word")]
    EmptyWord,
}

/// Trait for word analyzers.
///
/// Consumers such as the analysis cache and the search helpers work
/// against this trait so that a recording or canned analyzer can stand in
/// during tests.
pub trait Analyzer {
    /// Analyze a single word. Surrounding whitespace is ignored.
    fn analyze(&self, word: &str) -> Result<WordAnalysis, AnalyzeError>;
}

/// The niqqud analyzer.
#[derive(Debug, Clone, Copy, Default)]
pub struct NikudAnalyzer;

impl NikudAnalyzer {
    pub const fn new() -> Self {
        Self
    }

    /// Analyze a single word.
    ///
    /// Returns `AnalyzeError::EmptyWord` for empty or whitespace-only input.
    /// Any other input yields an analysis, possibly with an `Unknown`
    /// syllable type.
    pub fn analyze(&self, word: &str) -> Result<WordAnalysis, AnalyzeError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(AnalyzeError::EmptyWord);
        }
        let chars: Vec<char> = word.chars().collect();

        let analysis = WordAnalysis::new(
            word,
            pattern::strip_nikud(word),
            pattern::extract_pattern(word),
            syllable::classify_chars(&chars),
            shva::classify_chars(&chars),
            pattern::nikud_marks(word),
            special::detect_chars(&chars),
        );
        tracing::trace!(
            word,
            syllable = %analysis.syllable_type(),
            shva = %analysis.shva_type(),
            "analyzed word"
        );
        Ok(analysis)
    }

    /// Analyze many words, keeping input order.
    ///
    /// With the `parallel` feature the words are spread over the rayon
    /// thread pool.
    pub fn analyze_batch<S>(&self, words: &[S]) -> Vec<Result<WordAnalysis, AnalyzeError>>
    where
        S: AsRef<str> + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            words.par_iter().map(|w| self.analyze(w.as_ref())).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            words.iter().map(|w| self.analyze(w.as_ref())).collect()
        }
    }
}

impl Analyzer for NikudAnalyzer {
    fn analyze(&self, word: &str) -> Result<WordAnalysis, AnalyzeError> {
        NikudAnalyzer::analyze(self, word)
    }
}
