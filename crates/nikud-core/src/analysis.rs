// Word analysis result types
//
// `WordAnalysis` is the immutable unit of output. `WordRecord` is its flat,
// serializable shape (the field names consumers depend on), and
// `LocalizedRow` is the same record rendered for spreadsheet export.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::character::DiacriticMark;
use crate::enums::{ShvaType, SpecialCase, SyllableType};

/// Localized rendering of `true` in exported rows.
pub const YES: &str = "כן";
/// Localized rendering of `false` in exported rows.
pub const NO: &str = "לא";

/// Analysis of a single vocalized word.
///
/// Constructed once by the word analyzer and immutable afterwards. The
/// boolean flags are derived in [`WordAnalysis::new`] so they can never
/// disagree with the marks and syllable type they summarize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordAnalysis {
    word: String,
    word_plain: String,
    nikud_pattern: String,
    syllable_type: SyllableType,
    shva_type: ShvaType,
    nikud_marks: BTreeSet<DiacriticMark>,
    special_cases: Vec<SpecialCase>,
}

impl WordAnalysis {
    /// Assemble an analysis from its classified parts.
    ///
    /// Duplicate special cases are dropped, keeping first occurrence order.
    pub fn new(
        word: impl Into<String>,
        word_plain: impl Into<String>,
        nikud_pattern: impl Into<String>,
        syllable_type: SyllableType,
        shva_type: ShvaType,
        nikud_marks: BTreeSet<DiacriticMark>,
        special_cases: Vec<SpecialCase>,
    ) -> Self {
        let mut cases: Vec<SpecialCase> = Vec::with_capacity(special_cases.len());
        for case in special_cases {
            if !cases.contains(&case) {
                cases.push(case);
            }
        }
        Self {
            word: word.into(),
            word_plain: word_plain.into(),
            nikud_pattern: nikud_pattern.into(),
            syllable_type,
            shva_type,
            nikud_marks,
            special_cases: cases,
        }
    }

    /// The word with diacritics, trimmed of surrounding whitespace.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The word with every niqqud mark removed.
    pub fn word_plain(&self) -> &str {
        &self.word_plain
    }

    /// Structural fingerprint, one tag per letter or mark.
    pub fn nikud_pattern(&self) -> &str {
        &self.nikud_pattern
    }

    pub fn syllable_type(&self) -> SyllableType {
        self.syllable_type
    }

    pub fn shva_type(&self) -> ShvaType {
        self.shva_type
    }

    pub fn has_shva(&self) -> bool {
        self.nikud_marks.contains(&DiacriticMark::Shva)
    }

    pub fn has_dagesh(&self) -> bool {
        self.nikud_marks.contains(&DiacriticMark::Dagesh)
    }

    pub fn has_open_syllable(&self) -> bool {
        self.syllable_type == SyllableType::Open
    }

    pub fn has_closed_syllable(&self) -> bool {
        self.syllable_type == SyllableType::Closed
    }

    /// Distinct marks present in the word, in code point order.
    pub fn nikud_marks(&self) -> &BTreeSet<DiacriticMark> {
        &self.nikud_marks
    }

    /// Detected special cases, in detection order.
    pub fn special_cases(&self) -> &[SpecialCase] {
        &self.special_cases
    }

    /// Flatten into the serializable record shape.
    pub fn to_record(&self) -> WordRecord {
        WordRecord::from(self)
    }
}

impl AsRef<WordAnalysis> for WordAnalysis {
    fn as_ref(&self) -> &WordAnalysis {
        self
    }
}

// ---------------------------------------------------------------------------
// WordRecord
// ---------------------------------------------------------------------------

/// Flat, serializable form of a [`WordAnalysis`].
///
/// Field names are part of the contract with storage and export consumers.
/// `shva_types` always holds exactly one label (`["none"]` for words without
/// shva).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub word_plain: String,
    pub nikud_pattern: String,
    pub syllable_type: SyllableType,
    pub has_shva: bool,
    pub shva_types: Vec<ShvaType>,
    pub nikud_marks: Vec<char>,
    pub has_dagesh: bool,
    pub has_open_syllable: bool,
    pub has_closed_syllable: bool,
    pub special_cases: Vec<SpecialCase>,
}

impl From<&WordAnalysis> for WordRecord {
    fn from(a: &WordAnalysis) -> Self {
        Self {
            word: a.word.clone(),
            word_plain: a.word_plain.clone(),
            nikud_pattern: a.nikud_pattern.clone(),
            syllable_type: a.syllable_type,
            has_shva: a.has_shva(),
            shva_types: vec![a.shva_type],
            nikud_marks: a.nikud_marks.iter().map(|m| m.as_char()).collect(),
            has_dagesh: a.has_dagesh(),
            has_open_syllable: a.has_open_syllable(),
            has_closed_syllable: a.has_closed_syllable(),
            special_cases: a.special_cases.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// LocalizedRow
// ---------------------------------------------------------------------------

/// A [`WordAnalysis`] rendered as a Hebrew spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRow {
    pub cells: [String; 11],
}

impl LocalizedRow {
    /// Column headers, in cell order.
    pub const HEADERS: [&'static str; 11] = [
        "מילה",
        "מילה ללא ניקוד",
        "סוג הברה",
        "תבנית ניקוד",
        "יש שווא",
        "סוגי שווא",
        "סימני ניקוד",
        "יש דגש",
        "הברה פתוחה",
        "הברה סגורה",
        "מקרים מיוחדים",
    ];
}

fn yes_no(value: bool) -> String {
    let s = if value { YES } else { NO };
    s.to_string()
}

impl From<&WordAnalysis> for LocalizedRow {
    fn from(a: &WordAnalysis) -> Self {
        let marks = a
            .nikud_marks
            .iter()
            .map(|m| m.hebrew_name())
            .collect::<Vec<_>>()
            .join(", ");
        let cases = a
            .special_cases
            .iter()
            .map(|c| c.hebrew_label())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            cells: [
                a.word.clone(),
                a.word_plain.clone(),
                a.syllable_type.hebrew_label().to_string(),
                a.nikud_pattern.clone(),
                yes_no(a.has_shva()),
                a.shva_type.hebrew_label().to_string(),
                marks,
                yes_no(a.has_dagesh()),
                yes_no(a.has_open_syllable()),
                yes_no(a.has_closed_syllable()),
                cases,
            ],
        }
    }
}
