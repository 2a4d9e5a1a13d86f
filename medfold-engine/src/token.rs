//! Tokens and the token stream interface

use serde::{Deserialize, Serialize};

/// Lexical class assigned by the tokenizer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// Letters, marks and digits
    #[default]
    Word,
    /// Digits only
    Number,
    /// Word with internal apostrophes (`o'clock`, `John's`)
    Apostrophe,
    /// Dotted initials (`U.S.A.`)
    Acronym,
}

/// A unit of text flowing through the analysis pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Current text, rewritten by filters
    pub text: String,
    /// Byte offset of the first character in the source text
    pub offset_from: usize,
    /// Byte offset one past the last character in the source text
    pub offset_to: usize,
    /// Ordinal of the token in the source; gaps mark removed tokens
    pub position: usize,
    /// Lexical class
    pub kind: TokenKind,
}

impl Token {
    /// Reset the token for reuse, keeping the text allocation
    pub fn reset(&mut self) {
        self.text.clear();
        self.offset_from = 0;
        self.offset_to = 0;
        self.position = 0;
        self.kind = TokenKind::Word;
    }
}

/// A stream of tokens
///
/// `advance` moves to the next token and returns `false` at end of stream.
/// The token returned by `token` is only valid until the next `advance`.
pub trait TokenStream {
    /// Move to the next token
    fn advance(&mut self) -> bool;

    /// Current token
    fn token(&self) -> &Token;

    /// Current token, mutable
    fn token_mut(&mut self) -> &mut Token;

    /// Advance and return the next token, if any
    fn next(&mut self) -> Option<&Token> {
        if self.advance() {
            Some(self.token())
        } else {
            None
        }
    }

    /// Feed every remaining token to `sink`
    fn process(&mut self, sink: &mut dyn FnMut(&Token)) {
        while self.advance() {
            sink(self.token());
        }
    }
}

/// Boxed token stream used to chain filters chosen at runtime
pub type BoxTokenStream<'a> = Box<dyn TokenStream + 'a>;

impl<T: TokenStream + ?Sized> TokenStream for Box<T> {
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    fn token(&self) -> &Token {
        (**self).token()
    }

    fn token_mut(&mut self) -> &mut Token {
        (**self).token_mut()
    }
}

/// Token stream over pre-built tokens
///
/// Useful as an upstream stage in tests and for re-analyzing stored tokens.
#[derive(Debug, Clone)]
pub struct PreTokenizedStream {
    tokens: Vec<Token>,
    current: Option<usize>,
    empty: Token,
}

impl PreTokenizedStream {
    /// Create a stream over `tokens`
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: None,
            empty: Token::default(),
        }
    }

    /// Create a stream with one `Word` token per string, positions in order
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = words
            .into_iter()
            .enumerate()
            .map(|(position, word)| {
                let text = word.into();
                Token {
                    offset_to: text.len(),
                    text,
                    position,
                    ..Token::default()
                }
            })
            .collect();
        Self::new(tokens)
    }
}

impl TokenStream for PreTokenizedStream {
    fn advance(&mut self) -> bool {
        let next = self.current.map_or(0, |i| i + 1);
        if next < self.tokens.len() {
            self.current = Some(next);
            true
        } else {
            self.current = Some(self.tokens.len());
            false
        }
    }

    fn token(&self) -> &Token {
        self.current
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.empty)
    }

    fn token_mut(&mut self) -> &mut Token {
        match self.current.and_then(|i| self.tokens.get_mut(i)) {
            Some(token) => token,
            None => &mut self.empty,
        }
    }
}
