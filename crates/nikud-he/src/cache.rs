// Memoizing cache for word analyses

use hashbrown::HashMap;

use nikud_core::analysis::WordAnalysis;

use crate::analyzer::{AnalyzeError, Analyzer};

/// Default number of cached words.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Read-through cache of analyses keyed by the trimmed word.
///
/// Analysis is a pure function of the word, so entries never go stale. The
/// cache is bounded: when it is full it is cleared before the next insert.
/// Errors are not cached. A capacity of 0 disables caching.
#[derive(Debug, Clone)]
pub struct AnalysisCache {
    capacity: usize,
    entries: HashMap<String, WordAnalysis>,
}

impl AnalysisCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a cached analysis. `word` is trimmed first.
    pub fn get(&self, word: &str) -> Option<&WordAnalysis> {
        self.entries.get(word.trim())
    }

    /// Store an analysis under its own (already trimmed) word.
    pub fn insert(&mut self, analysis: WordAnalysis) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity && !self.entries.contains_key(analysis.word()) {
            tracing::debug!(entries = self.entries.len(), "analysis cache full, clearing");
            self.entries.clear();
        }
        self.entries.insert(analysis.word().to_string(), analysis);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Change the capacity, dropping every entry if it shrank below the
    /// current size.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        if self.entries.len() > capacity {
            self.entries.clear();
        }
    }

    /// Return the cached analysis of `word`, or analyze and remember it.
    pub fn analyze_with_cache(
        &mut self,
        analyzer: &dyn Analyzer,
        word: &str,
    ) -> Result<WordAnalysis, AnalyzeError> {
        if let Some(hit) = self.get(word) {
            return Ok(hit.clone());
        }
        let analysis = analyzer.analyze(word)?;
        self.insert(analysis.clone());
        Ok(analysis)
    }
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
