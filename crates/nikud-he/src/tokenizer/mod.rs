// Text segmentation into candidate words
//
// Text is cut at separators. Inside a run, Hebrew letters and niqqud marks
// are kept and every other character is dropped without ending the run. A
// run becomes a token only if it holds a Hebrew letter and is long enough.

use nikud_core::character::{CharClass, classify, is_word_break};
use nikud_core::token::Token;

/// Separators besides whitespace: ASCII punctuation, sof pasuq, maqaf, en
/// and em dash, bullet, middle dot, gershayim and geresh.
pub const DEFAULT_SEPARATORS: &[char] = &[
    ',', '.', ';', ':', '!', '?', '(', ')', '[', ']', '{', '}', '"', '\'', '\u{05C3}', '\u{05BE}',
    '\u{2013}', '\u{2014}', '\u{2022}', '\u{00B7}', '\u{05F4}', '\u{05F3}',
];

/// Segmenter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmenterOptions {
    /// Characters that end a word. Space, tab, line feed and carriage
    /// return always do, whether listed or not.
    pub separators: Vec<char>,

    /// Minimum token length in characters (letters plus marks). Shorter
    /// runs are discarded.
    pub min_token_len: usize,
}

impl Default for SegmenterOptions {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            min_token_len: 2,
        }
    }
}

impl SegmenterOptions {
    pub fn is_separator(&self, c: char) -> bool {
        is_word_break(c) || self.separators.contains(&c)
    }
}

/// Splits text into [`Token`]s.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    options: SegmenterOptions,
}

impl Segmenter {
    pub fn new(options: SegmenterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SegmenterOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut SegmenterOptions {
        &mut self.options
    }

    /// Lazily segment `text`. Each call starts over from the beginning.
    pub fn segments<'a>(&'a self, text: &'a str) -> Segments<'a> {
        Segments {
            chars: text.chars().enumerate(),
            options: &self.options,
        }
    }

    /// Segment `text` into a vector.
    pub fn tokens(&self, text: &str) -> Vec<Token> {
        self.segments(text).collect()
    }
}

/// Segment `text` with the default options.
pub fn segment(text: &str) -> Vec<Token> {
    Segmenter::default().tokens(text)
}

/// Iterator over the tokens of one text. See [`Segmenter::segments`].
pub struct Segments<'a> {
    chars: std::iter::Enumerate<std::str::Chars<'a>>,
    options: &'a SegmenterOptions,
}

/// A run of kept characters being accumulated.
#[derive(Default)]
struct Run {
    text: String,
    start: Option<usize>,
    has_letter: bool,
}

impl Run {
    fn push(&mut self, pos: usize, c: char) {
        self.start.get_or_insert(pos);
        self.text.push(c);
    }

    /// Close the run, returning a token if it qualifies.
    fn finish(&mut self, min_len: usize) -> Option<Token> {
        let run = std::mem::take(self);
        let start = run.start?;
        if !run.has_letter {
            return None;
        }
        let token = Token::new(run.text, start);
        (token.token_len >= min_len).then_some(token)
    }
}

impl Iterator for Segments<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let mut run = Run::default();
        for (pos, c) in self.chars.by_ref() {
            if self.options.is_separator(c) {
                if let Some(token) = run.finish(self.options.min_token_len) {
                    return Some(token);
                }
                continue;
            }
            match classify(c) {
                CharClass::Letter => {
                    run.has_letter = true;
                    run.push(pos, c);
                }
                CharClass::Mark(_) => run.push(pos, c),
                CharClass::Noise => {}
            }
        }
        run.finish(self.options.min_token_len)
    }
}

/// The trimmed period-delimited sentence of `text` that first contains
/// `word`, or `""` if none does.
pub fn sentence_context<'a>(text: &'a str, word: &str) -> &'a str {
    text.split('.')
        .find(|sentence| sentence.contains(word))
        .map(str::trim)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    // -- Separators --

    #[test]
    fn punctuation_is_dropped() {
        let tokens = segment("שלום, עולם.");
        assert_eq!(texts(&tokens), vec!["שלום", "עולם"]);
        assert_eq!(tokens[0].pos, 0);
        assert_eq!(tokens[1].pos, 6);
    }

    #[test]
    fn hebrew_punctuation_separates() {
        // maqaf, sof pasuq, gershayim; the trailing lamed alone is too short
        let tokens = segment("כל\u{05BE}הארץ\u{05C3}צה\u{05F4}ל");
        assert_eq!(texts(&tokens), vec!["כל", "הארץ", "צה"]);
    }

    #[test]
    fn ascii_whitespace_separates() {
        let tokens = segment("אב גד\tהו\nזח\r\nטי");
        assert_eq!(texts(&tokens), vec!["אב", "גד", "הו", "זח", "טי"]);
    }

    #[test]
    fn other_space_characters_are_noise() {
        // NBSP, thin space, vertical tab and form feed join the parts
        assert_eq!(texts(&segment("אב\u{00A0}גד")), vec!["אבגד"]);
        assert_eq!(texts(&segment("אב\u{2009}גד")), vec!["אבגד"]);
        assert_eq!(texts(&segment("אב\u{000B}גד")), vec!["אבגד"]);
        assert_eq!(texts(&segment("אב\u{000C}גד")), vec!["אבגד"]);
    }

    // -- Filtering --

    #[test]
    fn single_letter_is_not_a_token() {
        assert!(segment("א").is_empty());
        assert!(segment("  א , ב ").is_empty());
    }

    #[test]
    fn marks_without_letter_are_not_a_token() {
        assert!(segment("\u{05B0}\u{05B8} \u{05BC}\u{05B4}").is_empty());
    }

    #[test]
    fn letter_with_mark_is_long_enough() {
        let tokens = segment("בָ");
        assert_eq!(texts(&tokens), vec!["בָ"]);
        assert_eq!(tokens[0].token_len, 2);
    }

    #[test]
    fn noise_inside_a_word_vanishes() {
        let tokens = segment("x של1ום");
        assert_eq!(texts(&tokens), vec!["שלום"]);
        assert_eq!(tokens[0].pos, 2);
    }

    #[test]
    fn token_position_skips_leading_noise() {
        let tokens = segment("12אב");
        assert_eq!(tokens[0].pos, 2);
    }

    #[test]
    fn vocalized_text() {
        let tokens = segment("בְּרֵאשִׁית בָּרָא אֱלֹהִים");
        assert_eq!(texts(&tokens), vec!["בְּרֵאשִׁית", "בָּרָא", "אֱלֹהִים"]);
    }

    // -- Options --

    #[test]
    fn custom_min_len() {
        let seg = Segmenter::new(SegmenterOptions {
            min_token_len: 1,
            ..SegmenterOptions::default()
        });
        assert_eq!(texts(&seg.tokens("א ב")), vec!["א", "ב"]);
    }

    #[test]
    fn custom_separators() {
        let seg = Segmenter::new(SegmenterOptions {
            separators: vec!['/'],
            min_token_len: 2,
        });
        // comma is now noise, slash separates, whitespace still separates
        assert_eq!(texts(&seg.tokens("אב,גד/הו זח")), vec!["אבגד", "הו", "זח"]);
    }

    #[test]
    fn segmentation_is_restartable() {
        let seg = Segmenter::default();
        let text = "שָׁלוֹם עוֹלָם";
        let first: Vec<Token> = seg.segments(text).collect();
        let second: Vec<Token> = seg.segments(text).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn empty_text() {
        assert!(segment("").is_empty());
        assert!(segment(" .,; ").is_empty());
    }

    // -- sentence_context --

    #[test]
    fn context_is_first_containing_sentence() {
        let text = "אבג דה. וז חט דה. יכ";
        assert_eq!(sentence_context(text, "דה"), "אבג דה");
        assert_eq!(sentence_context(text, "חט"), "וז חט דה");
        assert_eq!(sentence_context(text, "יכ"), "יכ");
        assert_eq!(sentence_context(text, "לא"), "");
    }
}
