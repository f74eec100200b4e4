// Containment rules: presence of a vowel, shva or dagesh pattern anywhere

use std::fmt;
use std::str::FromStr;

use nikud_core::character::{DiacriticMark, VAV};

use super::RuleError;

/// Named "contains" predicates, scanned over the whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainmentRule {
    Shva,
    /// Qamats or hataf qamats.
    Qamats,
    HatafQamats,
    /// Patah or hataf patah.
    Patah,
    HatafPatah,
    Tzere,
    /// Segol or hataf segol.
    Segol,
    HatafSegol,
    Hiriq,
    /// Vav immediately followed by a dagesh.
    Shuruq,
    /// Holam or holam male.
    Holam,
}

impl ContainmentRule {
    pub const ALL: [ContainmentRule; 11] = [
        ContainmentRule::Shva,
        ContainmentRule::Qamats,
        ContainmentRule::HatafQamats,
        ContainmentRule::Patah,
        ContainmentRule::HatafPatah,
        ContainmentRule::Tzere,
        ContainmentRule::Segol,
        ContainmentRule::HatafSegol,
        ContainmentRule::Hiriq,
        ContainmentRule::Shuruq,
        ContainmentRule::Holam,
    ];

    /// Accepted names; the first is the canonical English name.
    pub const fn names(self) -> &'static [&'static str] {
        match self {
            ContainmentRule::Shva => &["shva", "שווא"],
            ContainmentRule::Qamats => &["qamats", "קמץ"],
            ContainmentRule::HatafQamats => &["hataf-qamats", "חטף קמץ"],
            ContainmentRule::Patah => &["patah", "פתח"],
            ContainmentRule::HatafPatah => &["hataf-patah", "חטף פתח"],
            ContainmentRule::Tzere => &["tzere", "צירה"],
            ContainmentRule::Segol => &["segol", "סגול"],
            ContainmentRule::HatafSegol => &["hataf-segol", "חטף סגול"],
            ContainmentRule::Hiriq => &["hiriq", "חיריק"],
            ContainmentRule::Shuruq => &["shuruq", "שורוק"],
            ContainmentRule::Holam => &["holam", "חולם", "melopum", "מלאופום"],
        }
    }

    pub const fn name(self) -> &'static str {
        self.names()[0]
    }

    /// Check whether `word` contains this pattern anywhere.
    pub fn matches(self, word: &str) -> bool {
        let has_any = |marks: &[DiacriticMark]| {
            word.chars().any(|c| marks.iter().any(|m| m.as_char() == c))
        };
        match self {
            ContainmentRule::Shva => has_any(&[DiacriticMark::Shva]),
            ContainmentRule::Qamats => has_any(&[DiacriticMark::Qamats, DiacriticMark::HatafQamats]),
            ContainmentRule::HatafQamats => has_any(&[DiacriticMark::HatafQamats]),
            ContainmentRule::Patah => has_any(&[DiacriticMark::Patah, DiacriticMark::HatafPatah]),
            ContainmentRule::HatafPatah => has_any(&[DiacriticMark::HatafPatah]),
            ContainmentRule::Tzere => has_any(&[DiacriticMark::Tzere]),
            ContainmentRule::Segol => has_any(&[DiacriticMark::Segol, DiacriticMark::HatafSegol]),
            ContainmentRule::HatafSegol => has_any(&[DiacriticMark::HatafSegol]),
            ContainmentRule::Hiriq => has_any(&[DiacriticMark::Hiriq]),
            ContainmentRule::Holam => has_any(&[DiacriticMark::Holam, DiacriticMark::HolamMale]),
            // vav carrying a dagesh directly
            ContainmentRule::Shuruq => {
                let dagesh = DiacriticMark::Dagesh.as_char();
                word.chars()
                    .zip(word.chars().skip(1))
                    .any(|(a, b)| a == VAV && b == dagesh)
            }
        }
    }
}

impl fmt::Display for ContainmentRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContainmentRule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ContainmentRule::ALL
            .iter()
            .copied()
            .find(|r| r.names().contains(&s))
            .ok_or_else(|| RuleError::UnknownContainmentRule(s.to_string()))
    }
}
