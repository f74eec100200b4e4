// Special-case detection: reduced qamats, furtive patach, double shva

use nikud_core::character::{DiacriticMark, YOD, is_hebrew_letter};
use nikud_core::enums::SpecialCase;

use crate::rules::{SuffixRule, tail_window};

const QAMATS: char = DiacriticMark::Qamats.as_char();
const SHVA: char = DiacriticMark::Shva.as_char();

/// Detect every special case in a trimmed, collected word.
///
/// Cases come back in `SpecialCase::ALL` order, each at most once.
pub fn detect_chars(chars: &[char]) -> Vec<SpecialCase> {
    SpecialCase::ALL
        .into_iter()
        .filter(|&case| has_case(chars, case))
        .collect()
}

/// Detect every special case in `word`. Surrounding whitespace is ignored.
pub fn detect(word: &str) -> Vec<SpecialCase> {
    let chars: Vec<char> = word.trim().chars().collect();
    detect_chars(&chars)
}

/// Check a single case.
pub fn has_case(chars: &[char], case: SpecialCase) -> bool {
    match case {
        SpecialCase::ReducedQamats => is_reduced_qamats(chars),
        SpecialCase::FurtivePatach => SuffixRule::PatahHet.matches_chars(chars),
        SpecialCase::DoubleShva => chars.iter().filter(|&&c| c == SHVA).count() >= 2,
    }
}

/// Qamats in a position where it reads as a short "o".
///
/// Four shapes are recognized:
/// - a final he with dagesh, with a qamats three or four characters back;
/// - qamats, letter, shva (the shva not being the last character);
/// - qamats, letter, letter, shva (likewise);
/// - qamats directly followed by yod.
pub fn is_reduced_qamats(chars: &[char]) -> bool {
    if SuffixRule::DageshFinalHe.matches_chars(chars)
        && tail_window(chars, 3, 5).contains(&QAMATS)
    {
        return true;
    }

    // The four- and five-wide windows keep one trailing character after the
    // shva.
    let one_letter = chars.windows(4).any(|w| {
        w[0] == QAMATS && is_hebrew_letter(w[1]) && w[2] == SHVA
    });
    if one_letter {
        return true;
    }
    let two_letters = chars.windows(5).any(|w| {
        w[0] == QAMATS && is_hebrew_letter(w[1]) && is_hebrew_letter(w[2]) && w[3] == SHVA
    });
    if two_letters {
        return true;
    }

    chars.windows(2).any(|w| w[0] == QAMATS && w[1] == YOD)
}
