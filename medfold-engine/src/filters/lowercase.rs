//! Unicode lowercasing

use std::mem;

use crate::token::{Token, TokenStream};

/// Lowercases token text
///
/// ASCII text is lowercased in place; other text goes through a reusable
/// buffer.
pub struct LowerCaseFilter<S> {
    tail: S,
    buffer: String,
}

impl<S: TokenStream> LowerCaseFilter<S> {
    /// Wrap an upstream stream
    pub fn new(tail: S) -> Self {
        Self {
            tail,
            buffer: String::with_capacity(64),
        }
    }
}

pub(crate) fn to_lowercase_unicode(text: &str, output: &mut String) {
    output.clear();
    for c in text.chars() {
        // Char-by-char lowercasing skips the final-sigma context rule
        output.extend(c.to_lowercase());
    }
}

/// Lowercase `text` exactly as [`LowerCaseFilter`] lowercases token text
pub(crate) fn lowercase(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    to_lowercase_unicode(text, &mut output);
    output
}

impl<S: TokenStream> TokenStream for LowerCaseFilter<S> {
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        let text = &mut self.tail.token_mut().text;
        if text.is_ascii() {
            text.make_ascii_lowercase();
        } else {
            to_lowercase_unicode(text, &mut self.buffer);
            mem::swap(text, &mut self.buffer);
        }
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

    fn run(words: &[&str]) -> Vec<String> {
        let mut stream = LowerCaseFilter::new(PreTokenizedStream::from_words(words.iter().copied()));
        let mut out = Vec::new();
        stream.process(&mut |t| out.push(t.text.clone()));
        out
    }

    #[test]
    fn test_ascii() {
        assert_eq!(run(&["Hello", "WORLD"]), vec!["hello", "world"]);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(run(&["ÉTÉ", "Ἀθῆναι", "ΟΔΟΣ"]), vec!["été", "ἀθῆναι", "οδοσ"]);
    }

    #[test]
    fn test_keeps_accents() {
        // Lowercasing never removes diacritics
        assert_eq!(run(&["Müller"]), vec!["müller"]);
    }

    #[test]
    fn test_lowercase_helper_matches_filter() {
        for word in ["ΛΟΓΟΣ", "ÉTÉ", "Ἀθῆναι", "plain"] {
            assert_eq!(vec![lowercase(word)], run(&[word]));
        }
        assert_eq!(lowercase("ΟΔΟΣ"), "οδοσ");
    }
}
