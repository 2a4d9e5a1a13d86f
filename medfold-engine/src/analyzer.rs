//! Analyzer: tokenizer plus filter chain
//!
//! Filter order is fixed: standard cleanup, lowercase, accent folding, stop
//! words. Folding runs before stop-word removal so that stop lists written
//! without diacritics match accented input.

use medfold_core::{fold_str, FoldingTransducer};

use crate::config::{AnalyzerConfig, DEFAULT_PRESET};
use crate::error::Result;
use crate::filters::lowercase::lowercase;
use crate::filters::{
    AccentFoldingFilter, LowerCaseFilter, StandardFilter, StopFilter, StopWords,
};
use crate::token::{BoxTokenStream, Token, TokenStream};
use crate::tokenizer::Tokenizer;

/// Text analyzer built from an [`AnalyzerConfig`]
///
/// The analyzer owns one [`FoldingTransducer`] whose buffer is reused for
/// every document it analyzes. Clone the analyzer to analyze documents on
/// several threads.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
    stop_words: StopWords,
    transducer: FoldingTransducer,
}

impl Analyzer {
    /// Create the default medieval Latin analyzer
    pub fn new() -> Result<Self> {
        Self::from_preset(DEFAULT_PRESET)
    }

    /// Create an analyzer from an embedded preset
    pub fn from_preset(name: &str) -> Result<Self> {
        Self::from_config(AnalyzerConfig::preset(name)?)
    }

    /// Create an analyzer from a configuration
    pub fn from_config(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = match &config.tokenizer.pattern {
            Some(pattern) => Tokenizer::with_pattern(pattern, config.tokenizer.max_token_length)?,
            None => Tokenizer::new(config.tokenizer.max_token_length)?,
        };

        let filters = config.filters;
        let stop_words = if filters.stop_words {
            StopWords::normalized(&config.stop_words.words, |word| {
                let word = if filters.lowercase {
                    lowercase(word)
                } else {
                    word.to_string()
                };
                if filters.fold_accents {
                    fold_str(&word).into_owned()
                } else {
                    word
                }
            })
        } else {
            StopWords::default()
        };

        log::debug!(
            "built analyzer '{}' ({} stop words)",
            config.metadata.name,
            stop_words.len()
        );

        Ok(Self {
            config,
            tokenizer,
            stop_words,
            transducer: FoldingTransducer::new(),
        })
    }

    /// Default filter chain with a custom stop list
    pub fn with_stop_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = AnalyzerConfig::preset(DEFAULT_PRESET)?;
        config.metadata.description = "custom stop words".to_string();
        config.stop_words.words = words.into_iter().map(Into::into).collect();
        Self::from_config(config)
    }

    /// The configuration this analyzer was built from
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// The normalized stop words in effect
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// The analyzer's folding transducer
    pub fn transducer(&self) -> &FoldingTransducer {
        &self.transducer
    }

    /// Build the token stream for `text`
    ///
    /// The stream borrows the analyzer's transducer, so only one stream per
    /// analyzer can be live at a time.
    pub fn token_stream<'a>(&'a mut self, text: &'a str) -> BoxTokenStream<'a> {
        let filters = self.config.filters;
        let mut stream: BoxTokenStream<'a> = Box::new(self.tokenizer.token_stream(text));
        if filters.standard {
            stream = Box::new(StandardFilter::new(stream));
        }
        if filters.lowercase {
            stream = Box::new(LowerCaseFilter::new(stream));
        }
        if filters.fold_accents {
            stream = Box::new(AccentFoldingFilter::with_transducer(
                stream,
                &mut self.transducer,
            ));
        }
        if filters.stop_words {
            stream = Box::new(StopFilter::new(stream, &self.stop_words));
        }
        stream
    }

    /// Analyze `text` into owned tokens
    pub fn analyze(&mut self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.token_stream(text)
            .process(&mut |token| tokens.push(token.clone()));
        tokens
    }

    /// Analyze `text` and keep only the token texts
    pub fn terms(&mut self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        self.token_stream(text)
            .process(&mut |token| terms.push(token.text.clone()));
        terms
    }

    /// Analyze several documents in parallel
    ///
    /// Each worker thread analyzes with its own clone of this analyzer, so no
    /// folding buffer is shared between threads.
    #[cfg(feature = "parallel")]
    pub fn analyze_batch<T: AsRef<str> + Sync>(&self, texts: &[T]) -> Vec<Vec<Token>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map_init(|| self.clone(), |analyzer, text| analyzer.analyze(text.as_ref()))
            .collect()
    }

    /// Analyze several documents one after another
    #[cfg(not(feature = "parallel"))]
    pub fn analyze_batch<T: AsRef<str>>(&self, texts: &[T]) -> Vec<Vec<Token>> {
        let mut analyzer = self.clone();
        texts
            .iter()
            .map(|text| analyzer.analyze(text.as_ref()))
            .collect()
    }
}
