// Shared enums: SyllableType, ShvaType, SpecialCase, PatternTag
//
// Each label enum has a stable English label (its serialized form) and a
// Hebrew display label. `FromStr` accepts either.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Failure to parse an enumeration label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {label:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub label: String,
}

/// Implements `Display` (English label) and `FromStr` (English or Hebrew
/// label) for a label enum with an `ALL` table.
macro_rules! label_enum {
    ($ty:ident, $kind:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == s || v.hebrew_label() == s)
                    .ok_or_else(|| ParseLabelError {
                        kind: $kind,
                        label: s.to_string(),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// SyllableType
// ---------------------------------------------------------------------------

/// Type of a word's final syllable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SyllableType {
    /// Ends in a vowel sound.
    Open,
    /// Ends in a consonant sound.
    Closed,
    /// No open or closed pattern matched. Not the same as `Closed`.
    #[default]
    Unknown,
}

impl SyllableType {
    pub const ALL: [SyllableType; 3] = [SyllableType::Open, SyllableType::Closed, SyllableType::Unknown];

    pub const fn label(self) -> &'static str {
        match self {
            SyllableType::Open => "open",
            SyllableType::Closed => "closed",
            SyllableType::Unknown => "unknown",
        }
    }

    pub const fn hebrew_label(self) -> &'static str {
        match self {
            SyllableType::Open => "פתוחה",
            SyllableType::Closed => "סגורה",
            SyllableType::Unknown => "לא ידוע",
        }
    }
}

label_enum!(SyllableType, "syllable type");

// ---------------------------------------------------------------------------
// ShvaType
// ---------------------------------------------------------------------------

/// Word-level shva classification.
///
/// Individual shva marks are classified as moving (na), resting (nach) or
/// double-resting; a word with several shvas collapses to one of the
/// combined values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShvaType {
    /// Pronounced shva (shva na).
    Moving,
    /// Silent shva (shva nach).
    Resting,
    /// The word has no shva.
    None,
    DoubleMoving,
    DoubleResting,
    MovingAndResting,
}

impl ShvaType {
    pub const ALL: [ShvaType; 6] = [
        ShvaType::Moving,
        ShvaType::Resting,
        ShvaType::None,
        ShvaType::DoubleMoving,
        ShvaType::DoubleResting,
        ShvaType::MovingAndResting,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ShvaType::Moving => "moving",
            ShvaType::Resting => "resting",
            ShvaType::None => "none",
            ShvaType::DoubleMoving => "double-moving",
            ShvaType::DoubleResting => "double-resting",
            ShvaType::MovingAndResting => "moving-and-resting",
        }
    }

    pub const fn hebrew_label(self) -> &'static str {
        match self {
            ShvaType::Moving => "נע",
            ShvaType::Resting => "נח",
            ShvaType::None => "אין",
            ShvaType::DoubleMoving => "שני שווא נע",
            ShvaType::DoubleResting => "שני שווא נח",
            ShvaType::MovingAndResting => "נע ונח",
        }
    }

    /// True for the values that describe at least one silent shva.
    pub const fn is_resting(self) -> bool {
        matches!(
            self,
            ShvaType::Resting | ShvaType::DoubleResting | ShvaType::MovingAndResting
        )
    }
}

label_enum!(ShvaType, "shva type");

// ---------------------------------------------------------------------------
// SpecialCase
// ---------------------------------------------------------------------------

/// Named orthographic/phonological anomalies, in detection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpecialCase {
    /// Qamats read as a short "o" (qamats katan).
    #[serde(rename = "reduced qamats")]
    ReducedQamats,
    /// Patach pronounced before a final guttural (patach genuvah).
    #[serde(rename = "furtive patach")]
    FurtivePatach,
    /// Two or more shva marks in the word.
    #[serde(rename = "double shva")]
    DoubleShva,
}

impl SpecialCase {
    /// Detection order.
    pub const ALL: [SpecialCase; 3] = [
        SpecialCase::ReducedQamats,
        SpecialCase::FurtivePatach,
        SpecialCase::DoubleShva,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SpecialCase::ReducedQamats => "reduced qamats",
            SpecialCase::FurtivePatach => "furtive patach",
            SpecialCase::DoubleShva => "double shva",
        }
    }

    pub const fn hebrew_label(self) -> &'static str {
        match self {
            SpecialCase::ReducedQamats => "קמץ קטן",
            SpecialCase::FurtivePatach => "פתח גנובה",
            SpecialCase::DoubleShva => "שני שוואים",
        }
    }
}

label_enum!(SpecialCase, "special case");

// ---------------------------------------------------------------------------
// PatternTag
// ---------------------------------------------------------------------------

/// One symbol of a structural niqqud pattern.
///
/// Tags render as single Hebrew letters so that pattern strings stay
/// compatible with stored data and searches written against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternTag {
    Letter,
    Shva,
    Dagesh,
    Vowel,
    ReducedVowel,
    Other,
}

impl PatternTag {
    pub const fn as_char(self) -> char {
        match self {
            PatternTag::Letter => 'ל',
            PatternTag::Shva => 'ש',
            PatternTag::Dagesh => 'ד',
            PatternTag::Vowel => 'ת',
            PatternTag::ReducedVowel => 'ח',
            PatternTag::Other => 'נ',
        }
    }

    pub const fn from_char(c: char) -> Option<Self> {
        let tag = match c {
            'ל' => PatternTag::Letter,
            'ש' => PatternTag::Shva,
            'ד' => PatternTag::Dagesh,
            'ת' => PatternTag::Vowel,
            'ח' => PatternTag::ReducedVowel,
            'נ' => PatternTag::Other,
            _ => return None,
        };
        Some(tag)
    }
}
