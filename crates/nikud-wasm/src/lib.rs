// WASM bindings for Hebrew niqqud analysis.
//
// Provides a `WasmNikud` class exported via wasm-bindgen that wraps the
// `NikudHandle` from nikud-he. Analyses, tokens and statistics are
// serialized to JavaScript values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const nikud = new WasmNikud();
//   nikud.analyze("שָׁלוֹם");           // => { word, wordPlain, syllableType: "open", ... }
//   nikud.analyzeText("...");           // => [{ position, context, analysis }, ...]
//   nikud.tokens("...");                // => [{ text, tokenLen, pos }, ...]
//   nikud.matchesEnding("תּוֹרָה", "he"); // => true
//   nikud.contains("רוּחַ", "shuruq");   // => true
//   nikud.statistics("...");            // => { totalWords, uniqueWords, ... }

use std::collections::BTreeMap;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use nikud_core::analysis::WordAnalysis;
use nikud_core::token::Token;
use nikud_he::handle::NikudHandle;
use nikud_he::search::{AnalyzedWord, Statistics};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a word analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAnalysis {
    word: String,
    word_plain: String,
    nikud_pattern: String,
    syllable_type: &'static str,
    has_shva: bool,
    shva_type: &'static str,
    nikud_marks: Vec<String>,
    has_dagesh: bool,
    has_open_syllable: bool,
    has_closed_syllable: bool,
    special_cases: Vec<&'static str>,
}

/// Serializable representation of a word found in a text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsAnalyzedWord {
    position: usize,
    context: String,
    analysis: JsAnalysis,
}

/// Serializable representation of a token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsToken {
    text: String,
    token_len: usize,
    pos: usize,
}

/// Serializable representation of text statistics. Distribution keys are
/// the English labels.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStatistics {
    total_words: usize,
    unique_words: usize,
    words_with_shva: usize,
    words_with_dagesh: usize,
    syllable_distribution: BTreeMap<&'static str, usize>,
    shva_distribution: BTreeMap<&'static str, usize>,
    special_cases: BTreeMap<&'static str, usize>,
}

// ============================================================================
// Conversion helpers
// ============================================================================

impl From<&WordAnalysis> for JsAnalysis {
    fn from(a: &WordAnalysis) -> Self {
        Self {
            word: a.word().to_string(),
            word_plain: a.word_plain().to_string(),
            nikud_pattern: a.nikud_pattern().to_string(),
            syllable_type: a.syllable_type().label(),
            has_shva: a.has_shva(),
            shva_type: a.shva_type().label(),
            nikud_marks: a.nikud_marks().iter().map(|m| m.as_char().to_string()).collect(),
            has_dagesh: a.has_dagesh(),
            has_open_syllable: a.has_open_syllable(),
            has_closed_syllable: a.has_closed_syllable(),
            special_cases: a.special_cases().iter().map(|c| c.label()).collect(),
        }
    }
}

impl From<AnalyzedWord> for JsAnalyzedWord {
    fn from(w: AnalyzedWord) -> Self {
        Self {
            analysis: JsAnalysis::from(&w.analysis),
            position: w.position,
            context: w.context,
        }
    }
}

impl From<Token> for JsToken {
    fn from(t: Token) -> Self {
        Self {
            text: t.text,
            token_len: t.token_len,
            pos: t.pos,
        }
    }
}

impl From<&Statistics> for JsStatistics {
    fn from(s: &Statistics) -> Self {
        Self {
            total_words: s.total_words,
            unique_words: s.unique_words,
            words_with_shva: s.words_with_shva,
            words_with_dagesh: s.words_with_dagesh,
            syllable_distribution: s.syllable_distribution.iter().map(|(k, v)| (k.label(), *v)).collect(),
            shva_distribution: s.shva_distribution.iter().map(|(k, v)| (k.label(), *v)).collect(),
            special_cases: s.special_cases.iter().map(|(k, v)| (k.label(), *v)).collect(),
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmNikud
// ============================================================================

/// Hebrew niqqud analysis engine for WebAssembly.
#[wasm_bindgen]
#[derive(Default)]
pub struct WasmNikud {
    handle: NikudHandle,
}

#[wasm_bindgen]
impl WasmNikud {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmNikud {
        WasmNikud::default()
    }

    /// Analyze a single vocalized word.
    ///
    /// Throws for empty or whitespace-only input.
    pub fn analyze(&self, word: &str) -> Result<JsValue, JsError> {
        let analysis = self
            .handle
            .analyze(word)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&JsAnalysis::from(&analysis))
    }

    /// Segment and analyze running text.
    ///
    /// Returns an array of `{ position, context, analysis }` objects.
    #[wasm_bindgen(js_name = "analyzeText")]
    pub fn analyze_text(&self, text: &str) -> Result<JsValue, JsError> {
        let words: Vec<JsAnalyzedWord> = self
            .handle
            .analyze_text(text)
            .into_iter()
            .map(JsAnalyzedWord::from)
            .collect();
        to_js(&words)
    }

    /// Segment text into candidate words.
    ///
    /// Returns an array of token objects with fields `text`, `tokenLen`,
    /// `pos`.
    pub fn tokens(&self, text: &str) -> Result<JsValue, JsError> {
        let tokens: Vec<JsToken> = self.handle.tokens(text).into_iter().map(JsToken::from).collect();
        to_js(&tokens)
    }

    /// Check a named ending rule. Throws for an unknown rule name.
    #[wasm_bindgen(js_name = "matchesEnding")]
    pub fn matches_ending(&self, word: &str, rule: &str) -> Result<bool, JsError> {
        self.handle
            .matches_ending(word, rule)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Check a named containment rule. Throws for an unknown rule name.
    pub fn contains(&self, word: &str, rule: &str) -> Result<bool, JsError> {
        self.handle
            .contains(word, rule)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Statistics over the analyzed words of `text`.
    pub fn statistics(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&JsStatistics::from(&self.handle.statistics(text)))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        NikudHandle::get_version().to_string()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the minimum token length in characters.
    #[wasm_bindgen(js_name = "setMinTokenLen")]
    pub fn set_min_token_len(&mut self, value: usize) {
        self.handle.set_min_token_len(value);
    }

    /// Resize the analysis cache. 0 disables caching.
    #[wasm_bindgen(js_name = "setCacheCapacity")]
    pub fn set_cache_capacity(&mut self, capacity: usize) {
        self.handle.set_cache_capacity(capacity);
    }
}
