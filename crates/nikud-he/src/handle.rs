// NikudHandle: top-level entry point for niqqud analysis.
//
// Owns the analyzer, the segmenter with its options, and a memoizing cache
// of word analyses. Methods take `&self`; the cache sits behind a `RefCell`
// so repeated words in a text are analyzed once. A handle is meant for one
// thread. Create one per worker, or use `NikudAnalyzer::analyze_batch` for
// parallel work.

use std::cell::RefCell;

use nikud_core::analysis::WordAnalysis;
use nikud_core::token::Token;

use crate::analyzer::{AnalyzeError, NikudAnalyzer};
use crate::cache::AnalysisCache;
use crate::rules::{self, RuleError};
use crate::search::{AnalyzedWord, Statistics};
use crate::tokenizer::{Segmenter, SegmenterOptions, sentence_context};

/// Top-level handle for analysis, segmentation and rule matching.
#[derive(Debug, Default)]
pub struct NikudHandle {
    analyzer: NikudAnalyzer,
    segmenter: Segmenter,

    /// Analyses of previously seen words.
    cache: RefCell<AnalysisCache>,
}

impl NikudHandle {
    /// Create a handle with default segmenter options and cache size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle with custom segmenter options.
    pub fn with_options(options: SegmenterOptions) -> Self {
        Self {
            segmenter: Segmenter::new(options),
            ..Self::default()
        }
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Analyze a single word, bypassing segmentation.
    ///
    /// Fails with `AnalyzeError::EmptyWord` for empty or whitespace-only
    /// input.
    pub fn analyze(&self, word: &str) -> Result<WordAnalysis, AnalyzeError> {
        self.cache
            .borrow_mut()
            .analyze_with_cache(&self.analyzer, word)
    }

    /// Segment `text` into candidate words.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.segmenter.tokens(text)
    }

    /// Segment and analyze `text`.
    ///
    /// Each result carries the ordinal of its token and the first
    /// period-delimited sentence of `text` that contains the word.
    pub fn analyze_text(&self, text: &str) -> Vec<AnalyzedWord> {
        let mut out = Vec::new();
        for (position, token) in self.segmenter.segments(text).enumerate() {
            match self.analyze(&token.text) {
                Ok(analysis) => {
                    let context = sentence_context(text, analysis.word()).to_string();
                    out.push(AnalyzedWord {
                        analysis,
                        position,
                        context,
                    });
                }
                Err(err) => {
                    tracing::warn!(token = %token.text, pos = token.pos, %err, "skipping token");
                }
            }
        }
        tracing::debug!(words = out.len(), "analyzed text");
        out
    }

    /// Statistics over the analyzed words of `text`.
    pub fn statistics(&self, text: &str) -> Statistics {
        Statistics::from_analyses(&self.analyze_text(text))
    }

    // =========================================================================
    // Rule matching
    // =========================================================================

    /// Check a named ending rule (English or Hebrew name).
    pub fn matches_ending(&self, word: &str, rule: &str) -> Result<bool, RuleError> {
        rules::matches_ending(word, rule)
    }

    /// Check a named containment rule (English or Hebrew name).
    pub fn contains(&self, word: &str, rule: &str) -> Result<bool, RuleError> {
        rules::contains(word, rule)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Replace the non-whitespace separator set.
    pub fn set_separators(&mut self, separators: Vec<char>) {
        self.segmenter.options_mut().separators = separators;
    }

    /// Set the minimum token length in characters.
    pub fn set_min_token_len(&mut self, value: usize) {
        self.segmenter.options_mut().min_token_len = value;
    }

    /// Resize the analysis cache. 0 disables caching.
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.cache.get_mut().set_capacity(capacity);
    }

    pub fn segmenter_options(&self) -> &SegmenterOptions {
        self.segmenter.options()
    }

    /// Return the crate version (from Cargo.toml).
    pub fn get_version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nikud_core::enums::{ShvaType, SyllableType};

    const GENESIS_1_1: &str = "בְּרֵאשִׁית בָּרָא אֱלֹהִים אֵת הַשָּׁמַיִם וְאֵת הָאָרֶץ.";

    #[test]
    fn analyze_word() {
        let handle = NikudHandle::new();
        let a = handle.analyze("שָׁלוֹם").unwrap();
        assert_eq!(a.syllable_type(), SyllableType::Open);
        assert_eq!(handle.analyze(" "), Err(AnalyzeError::EmptyWord));
    }

    #[test]
    fn repeated_analysis_is_stable() {
        let handle = NikudHandle::new();
        let first = handle.analyze("יְלָדִים").unwrap();
        let second = handle.analyze("יְלָדִים").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.shva_type(), ShvaType::Moving);
    }

    #[test]
    fn analyze_text_positions_and_context() {
        let handle = NikudHandle::new();
        let text = format!("{GENESIS_1_1} וְהָאָרֶץ הָיְתָה תֹהוּ וָבֹהוּ.");
        let words = handle.analyze_text(&text);
        assert_eq!(words.len(), 11);
        for (i, w) in words.iter().enumerate() {
            assert_eq!(w.position, i);
        }
        assert_eq!(words[0].analysis.word_plain(), "בראשית");
        assert_eq!(words[0].context, GENESIS_1_1.trim_end_matches('.'));
        assert_eq!(words[8].analysis.word(), "הָיְתָה");
        assert_eq!(words[8].context, "וְהָאָרֶץ הָיְתָה תֹהוּ וָבֹהוּ");
        // הָאָרֶץ (the earth) is first found in the first sentence
        assert_eq!(words[6].context, words[0].context);
    }

    #[test]
    fn tokens_and_setters() {
        let mut handle = NikudHandle::new();
        assert_eq!(handle.tokens("א בג").len(), 1);
        handle.set_min_token_len(1);
        assert_eq!(handle.tokens("א בג").len(), 2);

        handle.set_separators(vec!['/']);
        let tokens = handle.tokens("אב,גד/הו");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "אבגד");
        assert_eq!(handle.segmenter_options().separators, vec!['/']);
    }

    #[test]
    fn cache_can_be_disabled() {
        let mut handle = NikudHandle::new();
        handle.set_cache_capacity(0);
        assert!(handle.analyze("שָׁלוֹם").is_ok());
        assert!(handle.cache.borrow().is_empty());
    }

    #[test]
    fn rule_passthrough() {
        let handle = NikudHandle::new();
        assert_eq!(handle.matches_ending("תּוֹרָה", "he"), Ok(true));
        assert_eq!(handle.contains("רוּחַ", "shuruq"), Ok(true));
        assert!(handle.contains("רוּחַ", "nope").is_err());
    }

    #[test]
    fn statistics_of_text() {
        let handle = NikudHandle::new();
        let stats = handle.statistics(GENESIS_1_1);
        assert_eq!(stats.total_words, 7);
        assert_eq!(stats.unique_words, 7);
    }

    #[test]
    fn get_version_returns_cargo_version() {
        let version = NikudHandle::get_version();
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
        assert!(version.contains('.'));
    }
}
