//! Possessive and acronym cleanup

use crate::token::{Token, TokenKind, TokenStream};

const POSSESSIVE_SUFFIXES: [&str; 4] = ["'s", "'S", "’s", "’S"];

/// Removes a trailing possessive `'s` from apostrophe tokens and the dots
/// from acronyms
pub struct StandardFilter<S> {
    tail: S,
}

impl<S: TokenStream> StandardFilter<S> {
    /// Wrap an upstream stream
    pub fn new(tail: S) -> Self {
        Self { tail }
    }
}

fn clean(token: &mut Token) {
    match token.kind {
        TokenKind::Apostrophe => {
            if let Some(suffix) = POSSESSIVE_SUFFIXES
                .iter()
                .find(|suffix| token.text.ends_with(*suffix))
            {
                let len = token.text.len() - suffix.len();
                token.text.truncate(len);
            }
        }
        TokenKind::Acronym => token.text.retain(|c| c != '.'),
        TokenKind::Word | TokenKind::Number => {}
    }
}

impl<S: TokenStream> TokenStream for StandardFilter<S> {
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        clean(self.tail.token_mut());
        true
    }

    fn token(&self) -> &Token {
        self.tail.token()
    }

    fn token_mut(&mut self) -> &mut Token {
        self.tail.token_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::PreTokenizedStream;

    fn run(tokens: Vec<Token>) -> Vec<String> {
        let mut stream = StandardFilter::new(PreTokenizedStream::new(tokens));
        let mut out = Vec::new();
        stream.process(&mut |t| out.push(t.text.clone()));
        out
    }

    fn token(text: &str, kind: TokenKind) -> Token {
        Token {
            text: text.to_string(),
            kind,
            ..Token::default()
        }
    }

    #[test]
    fn test_possessive_removed() {
        let out = run(vec![
            token("John's", TokenKind::Apostrophe),
            token("JOHN'S", TokenKind::Apostrophe),
            token("Bede’s", TokenKind::Apostrophe),
            token("o'clock", TokenKind::Apostrophe),
        ]);
        assert_eq!(out, vec!["John", "JOHN", "Bede", "o'clock"]);
    }

    #[test]
    fn test_acronym_dots_removed() {
        let out = run(vec![token("U.S.A.", TokenKind::Acronym)]);
        assert_eq!(out, vec!["USA"]);
    }

    #[test]
    fn test_words_untouched() {
        // Only apostrophe tokens lose the suffix
        let out = run(vec![token("it's", TokenKind::Word)]);
        assert_eq!(out, vec!["it's"]);
    }
}
