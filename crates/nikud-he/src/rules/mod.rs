// Structural rule matchers: word endings and mark containment
//
// Both catalogs are closed enums. String names (English or Hebrew) are
// resolved once at the boundary through `FromStr`; an unknown name is a
// caller defect and is reported as `RuleError`, never as a non-match.

pub mod containment;
pub mod suffix;

pub use containment::ContainmentRule;
pub use suffix::SuffixRule;

/// Error for rule names outside the fixed catalogs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("unknown ending rule: {0:?}")]
    UnknownSuffixRule(String),

    #[error("unknown containment rule: {0:?}")]
    UnknownContainmentRule(String),
}

/// Check whether `word` ends with the structure named by `rule`.
///
/// Empty or whitespace-only words never match.
pub fn matches_ending(word: &str, rule: &str) -> Result<bool, RuleError> {
    let rule: SuffixRule = rule.parse()?;
    Ok(rule.matches(word))
}

/// Check whether `word` contains the mark (or mark combination) named by `rule`.
pub fn contains(word: &str, rule: &str) -> Result<bool, RuleError> {
    let rule: ContainmentRule = rule.parse()?;
    Ok(rule.matches(word))
}

/// Trailing lookback window of a word.
///
/// Returns the characters at indices `i` with `len - to < i <= len - from`.
/// The lower bound is exclusive and clamped at zero, so index 0 is never part
/// of a window; short words therefore get shorter windows, possibly empty.
pub(crate) fn tail_window(chars: &[char], from: usize, to: usize) -> &[char] {
    let len = chars.len();
    let Some(hi) = len.checked_sub(from) else {
        return &[];
    };
    let lo = len.saturating_sub(to) + 1;
    if lo > hi || hi >= len {
        return &[];
    }
    &chars[lo..=hi]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    // -- tail_window --

    #[test]
    fn window_last_two() {
        let w = chars("abcdef");
        assert_eq!(tail_window(&w, 1, 3), &['e', 'f']);
    }

    #[test]
    fn window_skipping_final_char() {
        let w = chars("abcdef");
        assert_eq!(tail_window(&w, 2, 4), &['d', 'e']);
        assert_eq!(tail_window(&w, 1, 5), &['c', 'd', 'e', 'f']);
        assert_eq!(tail_window(&w, 3, 5), &['c', 'd']);
    }

    #[test]
    fn window_never_reaches_index_zero() {
        assert_eq!(tail_window(&chars("ab"), 1, 3), &['b']);
        assert_eq!(tail_window(&chars("abc"), 2, 4), &['b']);
        assert!(tail_window(&chars("a"), 1, 3).is_empty());
    }

    #[test]
    fn window_on_short_input_is_empty() {
        assert!(tail_window(&[], 1, 3).is_empty());
        assert!(tail_window(&chars("a"), 2, 4).is_empty());
        assert!(tail_window(&chars("ab"), 3, 5).is_empty());
    }

    // -- string entry points --

    #[test]
    fn matches_ending_by_name() {
        assert_eq!(matches_ending("שָׁלוֹם", "holam"), Ok(true));
        assert_eq!(matches_ending("שָׁלוֹם", "חולם"), Ok(true));
        assert_eq!(matches_ending("שָׁלוֹם", "aleph"), Ok(false));
    }

    #[test]
    fn unknown_names_are_errors() {
        assert_eq!(
            matches_ending("שלום", "ends-with-x"),
            Err(RuleError::UnknownSuffixRule("ends-with-x".to_string()))
        );
        assert_eq!(
            contains("שלום", "kamatz-gadol"),
            Err(RuleError::UnknownContainmentRule("kamatz-gadol".to_string()))
        );
    }

    #[test]
    fn valid_name_on_empty_word_is_false_not_error() {
        assert_eq!(matches_ending("", "qamats"), Ok(false));
        assert_eq!(matches_ending("   ", "aleph"), Ok(false));
        assert_eq!(contains("", "shva"), Ok(false));
    }
}
