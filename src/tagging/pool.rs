use super::token::Token;

/// Builds a pool from a word list: one label per line.
///
/// Lines are trimmed, blank lines and `#` comments are skipped. Inner spaces
/// are kept so a label may be a short phrase.
pub fn parse_word_list(text: &str) -> Vec<Token> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(Token::new)
        .collect()
}

/// Builds a pool from free text, one token per whitespace-separated word.
pub fn split_words(text: &str) -> Vec<Token> {
    text.split_whitespace().map(Token::new).collect()
}
