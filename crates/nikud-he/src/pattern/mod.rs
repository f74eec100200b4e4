// Diacritic stripping and structural pattern extraction

use std::collections::BTreeSet;

use nikud_core::character::{CharClass, DiacriticMark, MarkGroup, classify, is_mark};
use nikud_core::enums::PatternTag;

/// Remove every niqqud mark from `text`, keeping all other characters in
/// order.
///
/// Idempotent: the output contains no marks, so stripping it again is a
/// no-op.
pub fn strip_nikud(text: &str) -> String {
    text.chars().filter(|&c| !is_mark(c)).collect()
}

/// Tag for a single character, or `None` for noise.
pub fn tag_of(c: char) -> Option<PatternTag> {
    match classify(c) {
        CharClass::Letter => Some(PatternTag::Letter),
        CharClass::Mark(mark) => Some(match mark.group() {
            MarkGroup::Shva => PatternTag::Shva,
            MarkGroup::Dagesh => PatternTag::Dagesh,
            MarkGroup::Vowel => PatternTag::Vowel,
            MarkGroup::ReducedVowel => PatternTag::ReducedVowel,
            MarkGroup::Other => PatternTag::Other,
        }),
        CharClass::Noise => None,
    }
}

/// Iterate over the tags of `word`, skipping noise characters.
pub fn pattern_tags(word: &str) -> impl Iterator<Item = PatternTag> + '_ {
    word.chars().filter_map(tag_of)
}

/// Build the structural fingerprint of `word`: one tag character per Hebrew
/// letter or mark.
pub fn extract_pattern(word: &str) -> String {
    pattern_tags(word).map(PatternTag::as_char).collect()
}

/// Distinct marks present in `word`.
pub fn nikud_marks(word: &str) -> BTreeSet<DiacriticMark> {
    word.chars().filter_map(DiacriticMark::from_char).collect()
}
