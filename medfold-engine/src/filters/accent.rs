//! Accent folding stage

use std::borrow::{Borrow, BorrowMut};

use medfold_core::FoldingTransducer;

use crate::token::{Token, TokenStream};

/// Folds accented characters, ligatures and typographic punctuation in each
/// token
///
/// The filter either owns its [`FoldingTransducer`] or borrows one, so an
/// analyzer can keep the same output buffer across documents. Tokens that
/// need no folding are passed through without being touched.
pub struct AccentFoldingFilter<S, T = FoldingTransducer> {
    tail: S,
    transducer: T,
}

impl<S: TokenStream> AccentFoldingFilter<S> {
    /// Wrap an upstream stream with a fresh transducer
    pub fn new(tail: S) -> Self {
        Self {
            tail,
            transducer: FoldingTransducer::new(),
        }
    }
}

impl<S, T> AccentFoldingFilter<S, T>
where
    S: TokenStream,
    T: BorrowMut<FoldingTransducer>,
{
    /// Wrap an upstream stream with an existing transducer
    pub fn with_transducer(tail: S, transducer: T) -> Self {
        Self { tail, transducer }
    }

    /// The transducer used by this filter
    pub fn transducer(&self) -> &FoldingTransducer {
        self.transducer.borrow()
    }
}

impl<S, T> TokenStream for AccentFoldingFilter<S, T>
where
    S: TokenStream,
    T: BorrowMut<FoldingTransducer>,
{
    fn advance(&mut self) -> bool {
        if !self.tail.advance() {
            return false;
        }
        let transducer = self.transducer.borrow_mut();
        let before = transducer.capacity();
        transducer.fold_token(&mut self.tail.token_mut().text);
        if transducer.capacity() != before {
            log::trace!(
                "folding buffer grown from {} to {} bytes",
                before,
                transducer.capacity()
            );
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
    use crate::token::{PreTokenizedStream, TokenKind};

    fn run(words: &[&str]) -> Vec<String> {
        let mut stream =
            AccentFoldingFilter::new(PreTokenizedStream::from_words(words.iter().copied()));
        let mut out = Vec::new();
        stream.process(&mut |t| out.push(t.text.clone()));
        out
    }

    #[test]
    fn test_scenarios() {
        assert_eq!(
            run(&["café", "ﬁre", "Æon", "naïve", "þing", "Müller—Schmidt"]),
            vec!["cafe", "fire", "Aeon", "naive", "þing", "Muller-Schmidt"]
        );
    }

    #[test]
    fn test_metadata_untouched() {
        let tokens = vec![Token {
            text: "Straße".to_string(),
            offset_from: 10,
            offset_to: 17,
            position: 4,
            kind: TokenKind::Word,
        }];
        let mut stream = AccentFoldingFilter::new(PreTokenizedStream::new(tokens));
        assert!(stream.advance());
        let token = stream.token();
        assert_eq!(token.text, "Strasse");
        assert_eq!((token.offset_from, token.offset_to), (10, 17));
        assert_eq!(token.position, 4);
        assert!(!stream.advance());
    }

    #[test]
    fn test_borrowed_transducer_keeps_buffer() {
        let mut transducer = FoldingTransducer::new();
        let long = "é".repeat(200);
        {
            let mut stream = AccentFoldingFilter::with_transducer(
                PreTokenizedStream::from_words([long.as_str()]),
                &mut transducer,
            );
            while stream.advance() {}
        }
        assert_eq!(transducer.capacity(), 1024);
        assert_eq!(transducer.grow_count(), 1);
    }

    #[test]
    fn test_end_of_stream_propagates() {
        let mut stream = AccentFoldingFilter::new(PreTokenizedStream::new(Vec::new()));
        assert!(!stream.advance());
        assert!(stream.next().is_none());
    }
}
