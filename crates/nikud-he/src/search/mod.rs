// In-memory search over analyzed words
//
// Two query styles: a flat filter set where every present field must match,
// and a chain of structural rules joined with AND/OR. Both return
// references into the input slice, ordered by the vocalized word.

mod stats;

pub use stats::Statistics;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use nikud_core::analysis::WordAnalysis;
use nikud_core::enums::{ParseLabelError, ShvaType, SyllableType};

use crate::rules::{ContainmentRule, RuleError, SuffixRule};

// ---------------------------------------------------------------------------
// AnalyzedWord
// ---------------------------------------------------------------------------

/// A word analysis with its place in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedWord {
    pub analysis: WordAnalysis,

    /// Ordinal of the token among the tokens of the text.
    pub position: usize,

    /// Trimmed period-delimited sentence containing the word, or empty.
    pub context: String,
}

impl AsRef<WordAnalysis> for AnalyzedWord {
    fn as_ref(&self) -> &WordAnalysis {
        &self.analysis
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Field filters. `None` fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Substring of the vocalized word.
    pub word: Option<String>,
    /// Substring of the plain word.
    pub word_plain: Option<String>,
    pub syllable_type: Option<SyllableType>,
    pub has_shva: Option<bool>,
    pub shva_type: Option<ShvaType>,
    pub has_dagesh: Option<bool>,
    pub has_open_syllable: Option<bool>,
    pub has_closed_syllable: Option<bool>,
    /// Minimum plain-word length in characters.
    pub min_length: Option<usize>,
    /// Maximum plain-word length in characters.
    pub max_length: Option<usize>,
}

impl SearchFilters {
    /// Check whether `a` passes every present filter.
    pub fn matches(&self, a: &WordAnalysis) -> bool {
        fn eq<T: PartialEq>(want: &Option<T>, got: T) -> bool {
            want.as_ref().is_none_or(|w| *w == got)
        }

        if let Some(sub) = &self.word {
            if !a.word().contains(sub.as_str()) {
                return false;
            }
        }
        if let Some(sub) = &self.word_plain {
            if !a.word_plain().contains(sub.as_str()) {
                return false;
            }
        }
        if !(eq(&self.syllable_type, a.syllable_type())
            && eq(&self.has_shva, a.has_shva())
            && eq(&self.shva_type, a.shva_type())
            && eq(&self.has_dagesh, a.has_dagesh())
            && eq(&self.has_open_syllable, a.has_open_syllable())
            && eq(&self.has_closed_syllable, a.has_closed_syllable()))
        {
            return false;
        }
        let len = a.word_plain().chars().count();
        self.min_length.is_none_or(|min| len >= min) && self.max_length.is_none_or(|max| len <= max)
    }
}

/// Indices of `words` sorted by vocalized word; ties keep input order.
fn sorted_by_word<T: AsRef<WordAnalysis>>(words: &[T]) -> Vec<&T> {
    let mut out: Vec<&T> = words.iter().collect();
    out.sort_by(|a, b| a.as_ref().word().cmp(b.as_ref().word()));
    out
}

/// Return the words passing `filters`, ordered by vocalized word.
pub fn search<'a, T: AsRef<WordAnalysis>>(words: &'a [T], filters: &SearchFilters) -> Vec<&'a T> {
    sorted_by_word(words)
        .into_iter()
        .filter(|w| filters.matches(w.as_ref()))
        .collect()
}

// ---------------------------------------------------------------------------
// Rule chains
// ---------------------------------------------------------------------------

/// Shva condition of a [`ComplexRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShvaQuery {
    Present,
    Absent,
    Type(ShvaType),
}

/// One structural condition in a rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexRule {
    EndsWith(SuffixRule),
    Contains(ContainmentRule),
    Syllable(SyllableType),
    Shva(ShvaQuery),
}

impl ComplexRule {
    pub fn matches(&self, a: &WordAnalysis) -> bool {
        match *self {
            ComplexRule::EndsWith(rule) => rule.matches(a.word()),
            ComplexRule::Contains(rule) => rule.matches(a.word()),
            ComplexRule::Syllable(t) => a.syllable_type() == t,
            ComplexRule::Shva(ShvaQuery::Present) => a.has_shva(),
            ComplexRule::Shva(ShvaQuery::Absent) => !a.has_shva(),
            ComplexRule::Shva(ShvaQuery::Type(t)) => a.shva_type() == t,
        }
    }
}

/// Error for a rule string that is not `kind:value`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseRuleError {
    #[error("expected KIND:VALUE, got {0:?}")]
    MissingSeparator(String),

    #[error("unknown rule kind: {0:?} (expected ends, contains, syllable or shva)")]
    UnknownKind(String),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error(transparent)]
    Label(#[from] ParseLabelError),
}

impl FromStr for ComplexRule {
    type Err = ParseRuleError;

    /// Parse `ends:NAME`, `contains:NAME`, `syllable:TYPE` or
    /// `shva:present|absent|TYPE`. Hebrew names and labels are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| ParseRuleError::MissingSeparator(s.to_string()))?;
        let value = value.trim();
        let rule = match kind.trim() {
            "ends" | "ends-with" => ComplexRule::EndsWith(value.parse()?),
            "contains" => ComplexRule::Contains(value.parse()?),
            "syllable" => ComplexRule::Syllable(value.parse()?),
            "shva" => ComplexRule::Shva(match value {
                "present" | "יש" => ShvaQuery::Present,
                "absent" | "אין" => ShvaQuery::Absent,
                other => ShvaQuery::Type(other.parse()?),
            }),
            other => return Err(ParseRuleError::UnknownKind(other.to_string())),
        };
        Ok(rule)
    }
}

impl fmt::Display for ComplexRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexRule::EndsWith(r) => write!(f, "ends:{r}"),
            ComplexRule::Contains(r) => write!(f, "contains:{r}"),
            ComplexRule::Syllable(t) => write!(f, "syllable:{t}"),
            ComplexRule::Shva(ShvaQuery::Present) => f.write_str("shva:present"),
            ComplexRule::Shva(ShvaQuery::Absent) => f.write_str("shva:absent"),
            ComplexRule::Shva(ShvaQuery::Type(t)) => write!(f, "shva:{t}"),
        }
    }
}

/// How a rule's matches join the running result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleOperator {
    /// Keep only entries whose word also matched this rule.
    #[default]
    And,
    /// Append this rule's matches whose word is not in the result yet.
    Or,
}

/// A rule with its join operator. The operator of the first rule in a
/// chain is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedRule {
    pub rule: ComplexRule,
    pub operator: RuleOperator,
}

impl CombinedRule {
    pub fn and(rule: ComplexRule) -> Self {
        Self {
            rule,
            operator: RuleOperator::And,
        }
    }

    pub fn or(rule: ComplexRule) -> Self {
        Self {
            rule,
            operator: RuleOperator::Or,
        }
    }
}

/// Evaluate a rule chain over `words`.
///
/// The first rule seeds the result with its matches in word order. Each
/// further rule is evaluated over all of `words` and joined by word: `And`
/// keeps entries whose word is among the rule's matches, `Or` appends the
/// matches whose word was not in the result before this step. An empty
/// chain yields nothing.
pub fn search_by_rules<'a, T: AsRef<WordAnalysis>>(
    words: &'a [T],
    rules: &[CombinedRule],
) -> Vec<&'a T> {
    let sorted = sorted_by_word(words);
    let mut result: Option<Vec<&'a T>> = None;

    for combined in rules {
        let matched: Vec<&'a T> = sorted
            .iter()
            .copied()
            .filter(|w| combined.rule.matches(w.as_ref()))
            .collect();

        result = Some(match result {
            None => matched,
            Some(current) => match combined.operator {
                RuleOperator::And => {
                    let keep: HashSet<&str> = matched.iter().map(|w| w.as_ref().word()).collect();
                    current
                        .into_iter()
                        .filter(|w| keep.contains(w.as_ref().word()))
                        .collect()
                }
                RuleOperator::Or => {
                    let mut current = current;
                    let existing: HashSet<&str> =
                        current.iter().map(|w| w.as_ref().word()).collect();
                    let added: Vec<&'a T> = matched
                        .into_iter()
                        .filter(|w| !existing.contains(w.as_ref().word()))
                        .collect();
                    current.extend(added);
                    current
                }
            },
        });
    }
    result.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::NikudAnalyzer;

    fn analyses(words: &[&str]) -> Vec<WordAnalysis> {
        words
            .iter()
            .map(|w| NikudAnalyzer.analyze(w).unwrap())
            .collect()
    }

    fn words<T: AsRef<WordAnalysis>>(found: &[&T]) -> Vec<String> {
        found.iter().map(|w| w.as_ref().word().to_string()).collect()
    }

    const SAMPLE: &[&str] = &["שָׁלוֹם", "יְלָדִים", "בְּרֵאשִׁית", "תּוֹרָה", "הַמֶּלֶךְ"];

    // -- search --

    #[test]
    fn empty_filters_return_everything_sorted() {
        let all = analyses(SAMPLE);
        let found = search(&all, &SearchFilters::default());
        let mut expected: Vec<String> = SAMPLE.iter().map(|s| s.to_string()).collect();
        expected.sort();
        assert_eq!(words(&found), expected);
    }

    #[test]
    fn filter_by_shva_and_syllable() {
        let all = analyses(SAMPLE);
        let filters = SearchFilters {
            has_shva: Some(true),
            syllable_type: Some(SyllableType::Closed),
            ..SearchFilters::default()
        };
        let found = search(&all, &filters);
        // הַמֶּלֶךְ ends in a shva, so its final syllable is unknown
        assert_eq!(words(&found), vec!["בְּרֵאשִׁית", "יְלָדִים"]);

        let filters = SearchFilters {
            syllable_type: Some(SyllableType::Unknown),
            ..SearchFilters::default()
        };
        assert_eq!(words(&search(&all, &filters)), vec!["הַמֶּלֶךְ"]);
    }

    #[test]
    fn filter_by_substring_and_length() {
        let all = analyses(SAMPLE);
        let filters = SearchFilters {
            word_plain: Some("ו".to_string()),
            max_length: Some(4),
            ..SearchFilters::default()
        };
        let found = search(&all, &filters);
        assert_eq!(words(&found), vec!["שָׁלוֹם", "תּוֹרָה"]);

        let filters = SearchFilters {
            min_length: Some(6),
            ..SearchFilters::default()
        };
        assert_eq!(words(&search(&all, &filters)), vec!["בְּרֵאשִׁית"]);
    }

    #[test]
    fn filter_by_shva_type() {
        let all = analyses(SAMPLE);
        let filters = SearchFilters {
            shva_type: Some(ShvaType::Resting),
            ..SearchFilters::default()
        };
        assert_eq!(words(&search(&all, &filters)), vec!["הַמֶּלֶךְ"]);
    }

    // -- rule chains --

    #[test]
    fn and_chain() {
        let all = analyses(SAMPLE);
        let rules = [
            CombinedRule::and(ComplexRule::Shva(ShvaQuery::Present)),
            CombinedRule::and(ComplexRule::Contains(ContainmentRule::Hiriq)),
        ];
        let found = search_by_rules(&all, &rules);
        assert_eq!(words(&found), vec!["בְּרֵאשִׁית", "יְלָדִים"]);
    }

    #[test]
    fn or_appends_new_words_after_seed() {
        let all = analyses(SAMPLE);
        let rules = [
            CombinedRule::and(ComplexRule::Syllable(SyllableType::Open)),
            CombinedRule::or(ComplexRule::Shva(ShvaQuery::Type(ShvaType::Moving))),
        ];
        let found = search_by_rules(&all, &rules);
        assert_eq!(
            words(&found),
            vec!["שָׁלוֹם", "תּוֹרָה", "בְּרֵאשִׁית", "יְלָדִים"]
        );
    }

    #[test]
    fn ends_with_rule() {
        let all = analyses(SAMPLE);
        let rules = [CombinedRule::and(ComplexRule::EndsWith(SuffixRule::EndsWithHe))];
        assert_eq!(words(&search_by_rules(&all, &rules)), vec!["תּוֹרָה"]);
    }

    #[test]
    fn empty_chain_is_empty() {
        let all = analyses(SAMPLE);
        assert!(search_by_rules(&all, &[]).is_empty());
    }

    #[test]
    fn works_on_analyzed_words() {
        let all: Vec<AnalyzedWord> = analyses(SAMPLE)
            .into_iter()
            .enumerate()
            .map(|(position, analysis)| AnalyzedWord {
                analysis,
                position,
                context: String::new(),
            })
            .collect();
        let rules = [CombinedRule::and(ComplexRule::Shva(ShvaQuery::Absent))];
        let found = search_by_rules(&all, &rules);
        assert_eq!(
            found.iter().map(|w| w.position).collect::<Vec<_>>(),
            vec![0, 3]
        );
    }

    // -- parsing --

    #[test]
    fn parse_rules() {
        assert_eq!(
            "ends:patah-het".parse::<ComplexRule>(),
            Ok(ComplexRule::EndsWith(SuffixRule::PatahHet))
        );
        assert_eq!(
            "contains:שורוק".parse::<ComplexRule>(),
            Ok(ComplexRule::Contains(ContainmentRule::Shuruq))
        );
        assert_eq!(
            "syllable:סגורה".parse::<ComplexRule>(),
            Ok(ComplexRule::Syllable(SyllableType::Closed))
        );
        assert_eq!(
            "shva:יש".parse::<ComplexRule>(),
            Ok(ComplexRule::Shva(ShvaQuery::Present))
        );
        assert_eq!(
            "shva:double-resting".parse::<ComplexRule>(),
            Ok(ComplexRule::Shva(ShvaQuery::Type(ShvaType::DoubleResting)))
        );
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "patah-het".parse::<ComplexRule>(),
            Err(ParseRuleError::MissingSeparator(_))
        ));
        assert!(matches!(
            "starts:aleph".parse::<ComplexRule>(),
            Err(ParseRuleError::UnknownKind(_))
        ));
        assert!(matches!(
            "ends:nope".parse::<ComplexRule>(),
            Err(ParseRuleError::Rule(RuleError::UnknownSuffixRule(_)))
        ));
        assert!(matches!(
            "syllable:nope".parse::<ComplexRule>(),
            Err(ParseRuleError::Label(_))
        ));
    }

    #[test]
    fn display_round_trips() {
        for s in ["ends:qamats", "contains:shuruq", "syllable:unknown", "shva:absent", "shva:moving"] {
            let rule: ComplexRule = s.parse().unwrap();
            assert_eq!(rule.to_string(), s);
        }
    }
}
