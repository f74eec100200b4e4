// Shva classification
//
// Every shva is classified from its character offset and its left neighbour
// only. This is a positional heuristic and not a full syllabification: a
// shva within the first three characters is taken as moving, everything
// else as resting. Changing it changes stored classifications.

use nikud_core::character::{DiacriticMark, is_vowel_mark};
use nikud_core::enums::ShvaType;

const SHVA: char = DiacriticMark::Shva.as_char();

/// Highest character index at which a shva is still taken as moving.
pub const MOVING_SHVA_MAX_INDEX: usize = 2;

/// Classification of one shva occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShvaKind {
    /// Near the start of the word.
    Moving,
    /// After a full vowel, or by default.
    Resting,
    /// Directly after another shva.
    DoubleResting,
}

impl ShvaKind {
    pub const fn is_moving(self) -> bool {
        matches!(self, ShvaKind::Moving)
    }
}

/// Classify every shva in `chars`, returning `(index, kind)` pairs in word
/// order.
pub fn classify_each(chars: &[char]) -> Vec<(usize, ShvaKind)> {
    chars
        .iter()
        .enumerate()
        .filter(|&(_, &c)| c == SHVA)
        .map(|(i, _)| (i, classify_at(chars, i)))
        .collect()
}

fn classify_at(chars: &[char], index: usize) -> ShvaKind {
    if index <= MOVING_SHVA_MAX_INDEX {
        return ShvaKind::Moving;
    }
    let prev = chars[index - 1];
    if is_vowel_mark(prev) {
        ShvaKind::Resting
    } else if prev == SHVA {
        ShvaKind::DoubleResting
    } else {
        ShvaKind::Resting
    }
}

/// Collapse per-shva kinds into the word-level label.
///
/// No shva gives `None`, a single shva keeps its own reading. With two or
/// more, all moving gives `DoubleMoving`, none moving gives `DoubleResting`
/// and a mix gives `MovingAndResting`.
pub fn collapse(kinds: &[ShvaKind]) -> ShvaType {
    match kinds {
        [] => ShvaType::None,
        [kind] => {
            if kind.is_moving() {
                ShvaType::Moving
            } else {
                ShvaType::Resting
            }
        }
        _ => {
            let moving = kinds.iter().filter(|k| k.is_moving()).count();
            if moving == kinds.len() {
                ShvaType::DoubleMoving
            } else if moving == 0 {
                ShvaType::DoubleResting
            } else {
                ShvaType::MovingAndResting
            }
        }
    }
}

/// Word-level shva label of an already collected word.
pub fn classify_chars(chars: &[char]) -> ShvaType {
    let kinds: Vec<ShvaKind> = classify_each(chars).into_iter().map(|(_, k)| k).collect();
    collapse(&kinds)
}

/// Word-level shva label of `word`.
pub fn classify(word: &str) -> ShvaType {
    let chars: Vec<char> = word.chars().collect();
    classify_chars(&chars)
}
