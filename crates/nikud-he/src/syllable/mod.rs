// Final syllable classification

use nikud_core::character::{AYIN, ALEPH, HE, is_hebrew_letter, is_vowel_mark};
use nikud_core::enums::SyllableType;

use crate::rules::{SuffixRule, tail_window};

/// Endings that make the final syllable open, in the order they are tried.
pub const OPEN_ENDINGS: [SuffixRule; 8] = [
    SuffixRule::EndsWithAleph,
    SuffixRule::EndsWithHe,
    SuffixRule::EndsWithAyin,
    SuffixRule::QamatsNearEnd,
    SuffixRule::TzereYod,
    SuffixRule::HiriqYod,
    SuffixRule::HolamVav,
    SuffixRule::HolamNearEnd,
];

/// Classify the final syllable of a trimmed, collected word.
///
/// Any open ending gives `Open`. Otherwise a final plain letter with no full
/// vowel in the last two characters gives `Closed`. Everything else is
/// `Unknown`, which callers must not read as closed.
pub fn classify_chars(chars: &[char]) -> SyllableType {
    if OPEN_ENDINGS.iter().any(|rule| rule.matches_chars(chars)) {
        return SyllableType::Open;
    }
    if let Some(&last) = chars.last() {
        let plain_final = is_hebrew_letter(last) && !matches!(last, ALEPH | HE | AYIN);
        if plain_final && !tail_window(chars, 1, 3).iter().any(|&c| is_vowel_mark(c)) {
            return SyllableType::Closed;
        }
    }
    SyllableType::Unknown
}

/// Classify the final syllable of `word`. Surrounding whitespace is ignored.
pub fn classify(word: &str) -> SyllableType {
    let chars: Vec<char> = word.trim().chars().collect();
    classify_chars(&chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_endings() {
        assert_eq!(classify("שָׁלוֹם"), SyllableType::Open);
        assert_eq!(classify("תּוֹרָה"), SyllableType::Open);
        assert_eq!(classify("בָּרָא"), SyllableType::Open);
        assert_eq!(classify("שִׁירִי"), SyllableType::Open);
    }

    #[test]
    fn closed_when_no_vowel_near_end() {
        assert_eq!(classify("יְלָדִים"), SyllableType::Closed);
        assert_eq!(classify("בְּרֵאשִׁית"), SyllableType::Closed);
        assert_eq!(classify("ספר"), SyllableType::Closed);
    }

    #[test]
    fn vowel_on_last_letter_without_open_pattern_is_unknown() {
        // final letter followed by a patah
        assert_eq!(classify("הַמַּיִם\u{05B7}"), SyllableType::Unknown);
        // patah right before the final letter
        assert_eq!(classify("אֵל\u{05B7}ב"), SyllableType::Unknown);
    }

    #[test]
    fn vowel_outside_window_is_closed() {
        // the tzere sits before the window of the last two characters
        assert_eq!(classify("בֵּית"), SyllableType::Closed);
    }

    #[test]
    fn degenerate_input() {
        assert_eq!(classify(""), SyllableType::Unknown);
        assert_eq!(classify("   "), SyllableType::Unknown);
        assert_eq!(classify("abc"), SyllableType::Unknown);
        // single letter: empty window, plain final letter
        assert_eq!(classify("ב"), SyllableType::Closed);
    }

    #[test]
    fn open_ending_order() {
        assert_eq!(OPEN_ENDINGS[0], SuffixRule::EndsWithAleph);
        assert_eq!(OPEN_ENDINGS[7], SuffixRule::HolamNearEnd);
        assert!(!OPEN_ENDINGS.contains(&SuffixRule::PatahHet));
    }
}
