//! Behavioral properties of the analysis pipeline, checked end to end
//! through the public API.

use nikud_core::character::is_mark;
use nikud_core::enums::{ShvaType, SpecialCase, SyllableType};
use nikud_he::NikudAnalyzer;
use nikud_he::pattern::strip_nikud;
use nikud_he::tokenizer::segment;

/// Words covering every shva, syllable and special-case outcome, plus some
/// noise.
const WORDS: &[&str] = &[
    "שָׁלוֹם",
    "יְלָדִים",
    "בְּרֵאשִׁית",
    "הַמֶּלֶךְ",
    "הָיְתָה",
    "וְחֹשֶׁךְ",
    "לוּ\u{05B7}ח",
    "אבג\u{05B0}\u{05B0}",
    "מִשְׁפָּחָה",
    "יִשְׂרָאֵל",
    "abc",
    "א",
    "  תּוֹרָה  ",
];

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn stripping_is_idempotent() {
    for w in WORDS {
        let once = strip_nikud(w);
        assert_eq!(strip_nikud(&once), once, "{w}");
    }
}

#[test]
fn plain_word_is_word_without_marks() {
    let analyzer = NikudAnalyzer::new();
    for w in WORDS {
        let a = analyzer.analyze(w).unwrap();
        let expected: String = a.word().chars().filter(|&c| !is_mark(c)).collect();
        assert_eq!(a.word_plain(), expected);
        assert!(a.word_plain().chars().count() <= a.word().chars().count());
    }
}

#[test]
fn open_and_closed_are_exclusive() {
    let analyzer = NikudAnalyzer::new();
    for w in WORDS {
        let a = analyzer.analyze(w).unwrap();
        assert!(!(a.has_open_syllable() && a.has_closed_syllable()), "{w}");
        if a.syllable_type() == SyllableType::Unknown {
            assert!(!a.has_open_syllable() && !a.has_closed_syllable(), "{w}");
        }
    }
}

#[test]
fn shva_flag_tracks_shva_code_point() {
    let analyzer = NikudAnalyzer::new();
    for w in WORDS {
        let a = analyzer.analyze(w).unwrap();
        assert_eq!(a.has_shva(), w.contains('\u{05B0}'), "{w}");
        assert_eq!(a.has_shva(), a.shva_type() != ShvaType::None, "{w}");
    }
}

#[test]
fn special_cases_are_ordered_and_unique() {
    let analyzer = NikudAnalyzer::new();
    for w in WORDS {
        let a = analyzer.analyze(w).unwrap();
        let cases = a.special_cases();
        assert!(cases.windows(2).all(|p| p[0] < p[1]), "{w}: {cases:?}");
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn shalom_is_open_without_shva() {
    let a = NikudAnalyzer::new().analyze("שָׁלוֹם").unwrap();
    assert_eq!(a.word_plain(), "שלום");
    assert!(!a.has_shva());
    assert_eq!(a.syllable_type(), SyllableType::Open);
    assert!(a.special_cases().is_empty());
}

#[test]
fn yeladim_has_moving_shva() {
    let a = NikudAnalyzer::new().analyze("יְלָדִים").unwrap();
    assert!(a.has_shva());
    let json = serde_json::to_value(a.to_record()).unwrap();
    assert_eq!(json["shva_types"], serde_json::json!(["moving"]));
}

#[test]
fn patah_before_final_het_is_furtive_patach_only() {
    let a = NikudAnalyzer::new().analyze("לוּ\u{05B7}ח").unwrap();
    assert_eq!(a.special_cases(), &[SpecialCase::FurtivePatach]);
    let json = serde_json::to_value(a.to_record()).unwrap();
    assert_eq!(json["special_cases"], serde_json::json!(["furtive patach"]));
}

#[test]
fn segmenting_drops_punctuation() {
    let tokens = segment("שלום, עולם.");
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["שלום", "עולם"]);
}

#[test]
fn single_letter_is_never_a_token() {
    assert!(segment("א").is_empty());
    assert!(segment(" א ").is_empty());
}

#[test]
fn consecutive_shvas_are_double_resting() {
    let a = NikudAnalyzer::new().analyze("אבג\u{05B0}\u{05B0}").unwrap();
    assert_eq!(a.shva_type(), ShvaType::DoubleResting);
    assert_eq!(a.special_cases(), &[SpecialCase::DoubleShva]);
}

#[test]
fn empty_word_is_rejected_before_analysis() {
    assert!(NikudAnalyzer::new().analyze("   ").is_err());
}
