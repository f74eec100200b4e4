// Segmenter output token

/// A candidate word emitted by the text segmenter.
///
/// `text` holds only Hebrew letters and niqqud marks; any noise characters
/// that sat inside the word in the source text have been dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Letters and marks of the word, in source order.
    pub text: String,

    /// Length of `text` in characters.
    pub token_len: usize,

    /// Character offset in the source text of the token's first letter or
    /// mark.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            text,
            token_len,
            pos,
        }
    }
}
