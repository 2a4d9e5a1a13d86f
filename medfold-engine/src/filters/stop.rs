//! Stop-word removal

use std::collections::HashSet;

use crate::token::{Token, TokenStream};

/// Set of stop words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from words taken as-is
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a set, passing each word through `normalize` first
    ///
    /// Used to apply the same lowercasing and folding as the token chain so
    /// that stop words match normalized tokens.
    pub fn normalized<I, S, F>(words: I, mut normalize: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str) -> String,
    {
        Self {
            words: words.into_iter().map(|w| normalize(w.as_ref())).collect(),
        }
    }

    /// Check membership
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Drops tokens whose text is a stop word
///
/// Remaining tokens keep their original positions, so removed words leave a
/// gap.
pub struct StopFilter<'s, S> {
    tail: S,
    stop_words: &'s StopWords,
}

impl<'s, S: TokenStream> StopFilter<'s, S> {
    /// Wrap an upstream stream
    pub fn new(tail: S, stop_words: &'s StopWords) -> Self {
        Self { tail, stop_words }
    }
}

impl<S: TokenStream> TokenStream for StopFilter<'_, S> {
    fn advance(&mut self) -> bool {
        while self.tail.advance() {
            if !self.stop_words.contains(&self.tail.token().text) {
                return true;
            }
        }
        false
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
    use crate::config::{AnalyzerConfig, DEFAULT_PRESET};
    use crate::token::PreTokenizedStream;

    fn english() -> StopWords {
        StopWords::new(AnalyzerConfig::preset(DEFAULT_PRESET).unwrap().stop_words.words)
    }

    #[test]
    fn test_removes_stop_words_and_keeps_positions() {
        let stop_words = english();
        let mut stream = StopFilter::new(
            PreTokenizedStream::from_words(["the", "city", "of", "the", "saints"]),
            &stop_words,
        );
        let mut out = Vec::new();
        stream.process(&mut |t| out.push((t.text.clone(), t.position)));
        assert_eq!(
            out,
            vec![("city".to_string(), 1), ("saints".to_string(), 4)]
        );
    }

    #[test]
    fn test_all_stop_words() {
        let stop_words = english();
        let mut stream =
            StopFilter::new(PreTokenizedStream::from_words(["a", "an", "the"]), &stop_words);
        assert!(!stream.advance());
    }

    #[test]
    fn test_normalized_set() {
        let stop_words = StopWords::normalized(["ÉTÉ", "Ǽ"], |w| w.to_lowercase());
        assert!(stop_words.contains("été"));
        assert!(stop_words.contains("ǽ"));
        assert!(!stop_words.contains("ÉTÉ"));
    }

    #[test]
    fn test_default_preset_list() {
        let stop_words = english();
        assert_eq!(stop_words.len(), 33);
        assert!(stop_words.contains("with"));
        assert!(!stop_words.contains("medieval"));
    }
}
