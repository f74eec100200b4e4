// Ending rules: bounded lookback over the last few characters of a word

use std::fmt;
use std::str::FromStr;

use nikud_core::character::{AYIN, ALEPH, DiacriticMark, HE, HET, VAV, YOD};

use super::{RuleError, tail_window};

const DAGESH: char = DiacriticMark::Dagesh.as_char();
const QAMATS: char = DiacriticMark::Qamats.as_char();
const TZERE: char = DiacriticMark::Tzere.as_char();
const HIRIQ: char = DiacriticMark::Hiriq.as_char();
const HOLAM: char = DiacriticMark::Holam.as_char();
const HOLAM_MALE: char = DiacriticMark::HolamMale.as_char();
const PATAH: char = DiacriticMark::Patah.as_char();
const SHVA: char = DiacriticMark::Shva.as_char();

/// Named structural word endings.
///
/// Each rule looks only at a small window at the end of the word (at most
/// the last four characters); vocalization rules are local to the final
/// syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuffixRule {
    /// Final character is a bare aleph.
    EndsWithAleph,
    /// Final character is a bare he.
    EndsWithHe,
    /// Final character is a bare ayin.
    EndsWithAyin,
    /// Final he with a dagesh (mappiq) among the last two characters.
    DageshFinalHe,
    /// Qamats among the last two characters.
    QamatsNearEnd,
    /// Final yod with tzere two or three characters back.
    TzereYod,
    /// Final yod with hiriq two or three characters back.
    HiriqYod,
    /// Final vav with holam two or three characters back (melopum).
    HolamVav,
    /// Holam among the last two characters.
    HolamNearEnd,
    /// Final het with patah two or three characters back.
    PatahHet,
    /// Two or more shvas among the last four characters.
    TwoShvas,
}

impl SuffixRule {
    pub const ALL: [SuffixRule; 11] = [
        SuffixRule::EndsWithAleph,
        SuffixRule::EndsWithHe,
        SuffixRule::EndsWithAyin,
        SuffixRule::DageshFinalHe,
        SuffixRule::QamatsNearEnd,
        SuffixRule::TzereYod,
        SuffixRule::HiriqYod,
        SuffixRule::HolamVav,
        SuffixRule::HolamNearEnd,
        SuffixRule::PatahHet,
        SuffixRule::TwoShvas,
    ];

    /// Canonical English name.
    pub const fn name(self) -> &'static str {
        match self {
            SuffixRule::EndsWithAleph => "aleph",
            SuffixRule::EndsWithHe => "he",
            SuffixRule::EndsWithAyin => "ayin",
            SuffixRule::DageshFinalHe => "dagesh-he",
            SuffixRule::QamatsNearEnd => "qamats",
            SuffixRule::TzereYod => "tzere-yod",
            SuffixRule::HiriqYod => "hiriq-yod",
            SuffixRule::HolamVav => "holam-vav",
            SuffixRule::HolamNearEnd => "holam",
            SuffixRule::PatahHet => "patah-het",
            SuffixRule::TwoShvas => "two-shvas",
        }
    }

    /// Name used in the Hebrew rule tables.
    pub const fn hebrew_name(self) -> &'static str {
        match self {
            SuffixRule::EndsWithAleph => "א",
            SuffixRule::EndsWithHe => "ה",
            SuffixRule::EndsWithAyin => "ע",
            SuffixRule::DageshFinalHe => "ה דגושה",
            SuffixRule::QamatsNearEnd => "קמץ",
            SuffixRule::TzereYod => "צירה י",
            SuffixRule::HiriqYod => "חיריק י",
            SuffixRule::HolamVav => "מלאופום",
            SuffixRule::HolamNearEnd => "חולם",
            SuffixRule::PatahHet => "ח ופתח",
            SuffixRule::TwoShvas => "שווא אות שווא",
        }
    }

    /// Check whether `word` ends with this structure.
    ///
    /// The word is trimmed first; an empty word never matches.
    pub fn matches(self, word: &str) -> bool {
        let chars: Vec<char> = word.trim().chars().collect();
        self.matches_chars(&chars)
    }

    /// Same as [`SuffixRule::matches`] on an already trimmed, collected word.
    pub(crate) fn matches_chars(self, chars: &[char]) -> bool {
        let Some(&last) = chars.last() else {
            return false;
        };
        let len = chars.len();
        match self {
            SuffixRule::EndsWithAleph => last == ALEPH,
            SuffixRule::EndsWithHe => last == HE,
            SuffixRule::EndsWithAyin => last == AYIN,
            SuffixRule::DageshFinalHe => {
                len >= 2 && last == HE && tail_window(chars, 1, 3).contains(&DAGESH)
            }
            SuffixRule::QamatsNearEnd => tail_window(chars, 1, 3).contains(&QAMATS),
            SuffixRule::TzereYod => {
                len >= 2 && last == YOD && tail_window(chars, 2, 4).contains(&TZERE)
            }
            SuffixRule::HiriqYod => {
                len >= 2 && last == YOD && tail_window(chars, 2, 4).contains(&HIRIQ)
            }
            SuffixRule::HolamVav => {
                len >= 2
                    && last == VAV
                    && tail_window(chars, 2, 4)
                        .iter()
                        .any(|&c| c == HOLAM || c == HOLAM_MALE)
            }
            SuffixRule::HolamNearEnd => tail_window(chars, 1, 3)
                .iter()
                .any(|&c| c == HOLAM || c == HOLAM_MALE),
            SuffixRule::PatahHet => {
                len >= 2 && last == HET && tail_window(chars, 2, 4).contains(&PATAH)
            }
            SuffixRule::TwoShvas => {
                len >= 4 && tail_window(chars, 1, 5).iter().filter(|&&c| c == SHVA).count() >= 2
            }
        }
    }
}

impl fmt::Display for SuffixRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuffixRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        SuffixRule::ALL
            .iter()
            .copied()
            .find(|r| r.name() == s || r.hebrew_name() == s)
            .ok_or_else(|| RuleError::UnknownSuffixRule(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Bare letter endings --

    #[test]
    fn bare_letter_endings() {
        assert!(SuffixRule::EndsWithAleph.matches("בָּרָא"));
        assert!(SuffixRule::EndsWithHe.matches("תּוֹרָה"));
        assert!(SuffixRule::EndsWithAyin.matches("שָׁמַע"));
        assert!(!SuffixRule::EndsWithAleph.matches("שָׁלוֹם"));
    }

    #[test]
    fn bare_letter_ending_is_exact_final_char() {
        // A mark after the letter means the word no longer ends in the letter.
        assert!(!SuffixRule::EndsWithHe.matches("הֶ"));
        assert!(SuffixRule::EndsWithHe.matches("ה"));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(SuffixRule::EndsWithAleph.matches("  בָּרָא \n"));
    }

    #[test]
    fn empty_input_never_matches() {
        for rule in SuffixRule::ALL {
            assert!(!rule.matches(""), "{rule} matched empty input");
            assert!(!rule.matches(" \t "), "{rule} matched whitespace");
        }
    }

    // -- Mark windows --

    #[test]
    fn dagesh_final_he() {
        // dagesh right before the final he
        assert!(SuffixRule::DageshFinalHe.matches("לָּה"));
        assert!(!SuffixRule::DageshFinalHe.matches("לָה"));
        // dagesh too far back
        assert!(!SuffixRule::DageshFinalHe.matches("בּלָה"));
    }

    #[test]
    fn qamats_near_end() {
        assert!(SuffixRule::QamatsNearEnd.matches("דָּבָר\u{05B8}"));
        assert!(SuffixRule::QamatsNearEnd.matches("אבָ"));
        assert!(!SuffixRule::QamatsNearEnd.matches("אָבג"));
    }

    #[test]
    fn qamats_at_index_zero_is_outside_window() {
        // Two-character word: the window holds only index 1.
        assert!(!SuffixRule::QamatsNearEnd.matches("\u{05B8}א"));
    }

    #[test]
    fn tzere_and_hiriq_before_yod() {
        assert!(SuffixRule::TzereYod.matches("בֵּי"));
        assert!(SuffixRule::HiriqYod.matches("שִׁירִי"));
        assert!(!SuffixRule::TzereYod.matches("שִׁירִי"));
        assert!(!SuffixRule::HiriqYod.matches("שִׁירִים"));
    }

    #[test]
    fn holam_before_vav() {
        // lamed, holam, vav
        assert!(SuffixRule::HolamVav.matches("לֹו"));
        assert!(SuffixRule::HolamVav.matches("לו\u{05BA}ו"));
        assert!(!SuffixRule::HolamVav.matches("לוֹ"));
    }

    #[test]
    fn holam_near_end() {
        assert!(SuffixRule::HolamNearEnd.matches("שָׁלוֹם"));
        assert!(SuffixRule::HolamNearEnd.matches("לוֹ"));
        assert!(!SuffixRule::HolamNearEnd.matches("שָׁלוֹמִי"));
    }

    #[test]
    fn patah_before_het() {
        assert!(SuffixRule::PatahHet.matches("לוּ\u{05B7}ח"));
        assert!(!SuffixRule::PatahHet.matches("רוּחַ"));
    }

    #[test]
    fn two_shvas_near_end() {
        // kaf with shva, then tav with shva and dagesh
        assert!(SuffixRule::TwoShvas.matches("הָלַכְתְּ"));
        assert!(!SuffixRule::TwoShvas.matches("יְלָדִים"));
        // needs at least four characters
        assert!(!SuffixRule::TwoShvas.matches("\u{05B0}\u{05B0}\u{05B0}"));
    }

    // -- Names --

    #[test]
    fn english_and_hebrew_names_parse() {
        for rule in SuffixRule::ALL {
            assert_eq!(rule.name().parse::<SuffixRule>(), Ok(rule));
            assert_eq!(rule.hebrew_name().parse::<SuffixRule>(), Ok(rule));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            "ends-in-tav".parse::<SuffixRule>(),
            Err(RuleError::UnknownSuffixRule("ends-in-tav".to_string()))
        );
    }
}
