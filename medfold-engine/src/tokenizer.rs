//! Regex-based word tokenizer
//!
//! Splits text into words, numbers, apostrophe words and acronyms. Combining
//! marks stay attached to the word they follow so that the folding stage can
//! remove them.

use regex::{CaptureMatches, Captures, Regex};

use crate::error::Result;
use crate::token::{Token, TokenKind, TokenStream};

/// Default token pattern
///
/// Named groups `acronym` and `apostrophe` select the token kind; anything
/// else is a word or a number.
pub const DEFAULT_PATTERN: &str = r"(?P<acronym>\p{L}\.(?:\p{L}\.)+)|(?P<apostrophe>[\p{L}\p{M}\p{N}]+(?:['’][\p{L}\p{M}\p{N}]+)+)|[\p{L}\p{M}\p{N}]+";

/// Default maximum token length in characters
pub const DEFAULT_MAX_TOKEN_LENGTH: usize = 255;

/// Word tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    max_token_length: usize,
}

impl Tokenizer {
    /// Create a tokenizer with the default pattern
    pub fn new(max_token_length: usize) -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN, max_token_length)
    }

    /// Create a tokenizer with a custom pattern
    ///
    /// Tokens longer than `max_token_length` characters are skipped but
    /// still consume a position.
    pub fn with_pattern(pattern: &str, max_token_length: usize) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            max_token_length,
        })
    }

    /// Maximum token length in characters
    pub fn max_token_length(&self) -> usize {
        self.max_token_length
    }

    /// Tokenize `text`
    pub fn token_stream<'a>(&'a self, text: &'a str) -> TokenizerStream<'a> {
        TokenizerStream {
            matches: self.pattern.captures_iter(text),
            max_token_length: self.max_token_length,
            next_position: 0,
            token: Token::default(),
        }
    }
}

fn classify(caps: &Captures<'_>, text: &str) -> TokenKind {
    if caps.name("acronym").is_some() {
        TokenKind::Acronym
    } else if caps.name("apostrophe").is_some() {
        TokenKind::Apostrophe
    } else if text.chars().all(char::is_numeric) {
        TokenKind::Number
    } else {
        TokenKind::Word
    }
}

/// Token stream produced by [`Tokenizer::token_stream`]
pub struct TokenizerStream<'a> {
    matches: CaptureMatches<'a, 'a>,
    max_token_length: usize,
    next_position: usize,
    token: Token,
}

impl TokenStream for TokenizerStream<'_> {
    fn advance(&mut self) -> bool {
        for caps in self.matches.by_ref() {
            let Some(m) = caps.get(0) else {
                continue;
            };
            let position = self.next_position;
            self.next_position += 1;

            if m.as_str().chars().count() > self.max_token_length {
                log::debug!(
                    "skipping token longer than {} chars at byte {}",
                    self.max_token_length,
                    m.start()
                );
                continue;
            }

            self.token.reset();
            self.token.text.push_str(m.as_str());
            self.token.offset_from = m.start();
            self.token.offset_to = m.end();
            self.token.position = position;
            self.token.kind = classify(&caps, m.as_str());
            return true;
        }
        false
    }

    fn token(&self) -> &Token {
        &self.token
    }

    fn token_mut(&mut self) -> &mut Token {
        &mut self.token
    }
}
