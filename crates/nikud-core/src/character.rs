// Hebrew character classification and the niqqud mark table.
//
// Every recognized diacritic is bound to exactly one code point and belongs
// to exactly one `MarkGroup`. Anything that is neither a Hebrew letter nor a
// recognized mark is noise: callers skip it, nothing here reports an error.

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

pub const ALEPH: char = '\u{05D0}';
pub const HE: char = '\u{05D4}';
pub const VAV: char = '\u{05D5}';
pub const HET: char = '\u{05D7}';
pub const YOD: char = '\u{05D9}';
pub const AYIN: char = '\u{05E2}';

/// Final (sofit) letter forms: ך ם ן ף ץ
const FINAL_LETTERS: &[char] = &['\u{05DA}', '\u{05DD}', '\u{05DF}', '\u{05E3}', '\u{05E5}'];

/// Guttural letters: א ה ח ע ר
const GUTTURALS: &[char] = &[ALEPH, HE, HET, AYIN, '\u{05E8}'];

/// Check whether a character is one of the 27 Hebrew letters (א..ת,
/// final forms included).
pub fn is_hebrew_letter(c: char) -> bool {
    ('\u{05D0}'..='\u{05EA}').contains(&c)
}

/// Check whether a character is a final-form letter.
pub fn is_final_letter(c: char) -> bool {
    FINAL_LETTERS.contains(&c)
}

/// Check whether a character is a guttural letter.
pub fn is_guttural(c: char) -> bool {
    GUTTURALS.contains(&c)
}

// ---------------------------------------------------------------------------
// Mark table
// ---------------------------------------------------------------------------

/// Semantic group of a diacritic mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkGroup {
    /// Full vowels: hiriq, tzere, segol, patah, qamats, holam, holam male, qubuts.
    Vowel,
    /// Hataf (reduced) vowels: hataf segol, hataf patah, hataf qamats.
    ReducedVowel,
    Shva,
    /// Dagesh, also mappiq and the dot of shuruq.
    Dagesh,
    /// Meteg, rafe, shin dot, sin dot.
    Other,
}

/// A recognized niqqud mark.
///
/// The variant order follows the code points, so the derived `Ord` sorts
/// marks the same way their characters sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiacriticMark {
    Shva,
    HatafSegol,
    HatafPatah,
    HatafQamats,
    Hiriq,
    Tzere,
    Segol,
    Patah,
    Qamats,
    Holam,
    HolamMale,
    Qubuts,
    Dagesh,
    Meteg,
    Rafe,
    ShinDot,
    SinDot,
}

impl DiacriticMark {
    /// All marks in code point order.
    pub const ALL: [DiacriticMark; 17] = [
        DiacriticMark::Shva,
        DiacriticMark::HatafSegol,
        DiacriticMark::HatafPatah,
        DiacriticMark::HatafQamats,
        DiacriticMark::Hiriq,
        DiacriticMark::Tzere,
        DiacriticMark::Segol,
        DiacriticMark::Patah,
        DiacriticMark::Qamats,
        DiacriticMark::Holam,
        DiacriticMark::HolamMale,
        DiacriticMark::Qubuts,
        DiacriticMark::Dagesh,
        DiacriticMark::Meteg,
        DiacriticMark::Rafe,
        DiacriticMark::ShinDot,
        DiacriticMark::SinDot,
    ];

    /// The code point this mark is written with.
    pub const fn as_char(self) -> char {
        match self {
            DiacriticMark::Shva => '\u{05B0}',
            DiacriticMark::HatafSegol => '\u{05B1}',
            DiacriticMark::HatafPatah => '\u{05B2}',
            DiacriticMark::HatafQamats => '\u{05B3}',
            DiacriticMark::Hiriq => '\u{05B4}',
            DiacriticMark::Tzere => '\u{05B5}',
            DiacriticMark::Segol => '\u{05B6}',
            DiacriticMark::Patah => '\u{05B7}',
            DiacriticMark::Qamats => '\u{05B8}',
            DiacriticMark::Holam => '\u{05B9}',
            DiacriticMark::HolamMale => '\u{05BA}',
            DiacriticMark::Qubuts => '\u{05BB}',
            DiacriticMark::Dagesh => '\u{05BC}',
            DiacriticMark::Meteg => '\u{05BD}',
            DiacriticMark::Rafe => '\u{05BF}',
            DiacriticMark::ShinDot => '\u{05C1}',
            DiacriticMark::SinDot => '\u{05C2}',
        }
    }

    /// Look up the mark written with `c`, if any.
    pub const fn from_char(c: char) -> Option<Self> {
        let mark = match c {
            '\u{05B0}' => DiacriticMark::Shva,
            '\u{05B1}' => DiacriticMark::HatafSegol,
            '\u{05B2}' => DiacriticMark::HatafPatah,
            '\u{05B3}' => DiacriticMark::HatafQamats,
            '\u{05B4}' => DiacriticMark::Hiriq,
            '\u{05B5}' => DiacriticMark::Tzere,
            '\u{05B6}' => DiacriticMark::Segol,
            '\u{05B7}' => DiacriticMark::Patah,
            '\u{05B8}' => DiacriticMark::Qamats,
            '\u{05B9}' => DiacriticMark::Holam,
            '\u{05BA}' => DiacriticMark::HolamMale,
            '\u{05BB}' => DiacriticMark::Qubuts,
            '\u{05BC}' => DiacriticMark::Dagesh,
            '\u{05BD}' => DiacriticMark::Meteg,
            '\u{05BF}' => DiacriticMark::Rafe,
            '\u{05C1}' => DiacriticMark::ShinDot,
            '\u{05C2}' => DiacriticMark::SinDot,
            _ => return None,
        };
        Some(mark)
    }

    pub const fn group(self) -> MarkGroup {
        match self {
            DiacriticMark::Shva => MarkGroup::Shva,
            DiacriticMark::HatafSegol | DiacriticMark::HatafPatah | DiacriticMark::HatafQamats => {
                MarkGroup::ReducedVowel
            }
            DiacriticMark::Hiriq
            | DiacriticMark::Tzere
            | DiacriticMark::Segol
            | DiacriticMark::Patah
            | DiacriticMark::Qamats
            | DiacriticMark::Holam
            | DiacriticMark::HolamMale
            | DiacriticMark::Qubuts => MarkGroup::Vowel,
            DiacriticMark::Dagesh => MarkGroup::Dagesh,
            DiacriticMark::Meteg
            | DiacriticMark::Rafe
            | DiacriticMark::ShinDot
            | DiacriticMark::SinDot => MarkGroup::Other,
        }
    }

    /// Hebrew display name, as used in spreadsheet exports.
    pub const fn hebrew_name(self) -> &'static str {
        match self {
            DiacriticMark::Shva => "שווא",
            DiacriticMark::HatafSegol => "חטף סגול",
            DiacriticMark::HatafPatah => "חטף פתח",
            DiacriticMark::HatafQamats => "חטף קמץ",
            DiacriticMark::Hiriq => "חיריק",
            DiacriticMark::Tzere => "צירה",
            DiacriticMark::Segol => "סגול",
            DiacriticMark::Patah => "פתח",
            DiacriticMark::Qamats => "קמץ",
            DiacriticMark::Holam => "חולם",
            DiacriticMark::HolamMale => "חולם מלא",
            DiacriticMark::Qubuts => "קובוץ",
            DiacriticMark::Dagesh => "דגש/שורוק",
            DiacriticMark::Meteg => "מתג",
            DiacriticMark::Rafe => "רפה",
            DiacriticMark::ShinDot => "שין ימנית",
            DiacriticMark::SinDot => "שין שמאלית",
        }
    }
}

/// Classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Letter,
    Mark(DiacriticMark),
    /// Neither a Hebrew letter nor a recognized mark.
    Noise,
}

/// Classify a character as letter, mark, or noise.
pub fn classify(c: char) -> CharClass {
    if is_hebrew_letter(c) {
        return CharClass::Letter;
    }
    match DiacriticMark::from_char(c) {
        Some(mark) => CharClass::Mark(mark),
        None => CharClass::Noise,
    }
}

/// Check whether a character is a recognized niqqud mark.
pub fn is_mark(c: char) -> bool {
    DiacriticMark::from_char(c).is_some()
}

/// Return the group of the mark written with `c`, or `None` for non-marks.
pub fn mark_group(c: char) -> Option<MarkGroup> {
    DiacriticMark::from_char(c).map(DiacriticMark::group)
}

/// Check whether `c` is a full vowel mark.
pub fn is_vowel_mark(c: char) -> bool {
    mark_group(c) == Some(MarkGroup::Vowel)
}

/// Check whether `c` breaks words during segmentation: space, tab, line
/// feed or carriage return. Other space characters (NBSP, the Unicode space
/// separators, vertical tab, form feed) are not word breaks.
pub fn is_word_break(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}
