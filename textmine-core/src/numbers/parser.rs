//! Parsing numerals written out in words

use super::config::ParserConfig;
use super::reduce::{Extractor, Reducer};
use super::value::NumericValue;
use super::vocabulary::VocabularyConfig;
use crate::dictionary::Matcher;
use crate::metrics::LevenshteinDissimilarity;
use crate::parser::{GradualTextParser, LocalizedTextParser, PostProcessor, PreProcessor, TextParser};
use crate::processing::stages::{self, ValueSequence};
use crate::processing::{Processor, ProcessorChain};
use crate::token::{MutableToken, Substring, Token, ValueToken};
use crate::tokenizer::RegexTokenizer;
use crate::{Error, Result};
use std::sync::Arc;
use tracing::debug;

/// Revision under which a token's untranslated state is kept
pub const REVISION_TRANSLATE: u32 = 0;

type Translation = Box<dyn Processor<ValueSequence<NumericValue>, ValueSequence<NumericValue>>>;

/// Parses phrases such as "two hundred fifty thousand" into integers
///
/// The phrase is split into words by the vocabulary's delimiter, every word
/// is translated through the vocabulary, and the translated words are reduced
/// into a single number. A word missing from the vocabulary, a phrase without
/// words, or words that do not combine into one number are malformed text.
#[derive(Debug)]
pub struct NumberParser {
    locale: String,
    config: ParserConfig,
    inner: GradualTextParser<RegexTokenizer, i64>,
}

impl NumberParser {
    /// Create a parser builder for `vocabulary`
    pub fn builder(vocabulary: &VocabularyConfig) -> NumberParserBuilder<'_> {
        NumberParserBuilder {
            vocabulary,
            config: ParserConfig::default(),
            pre_processor: None,
            post_processor: None,
        }
    }

    /// A parser with default settings
    pub fn new(vocabulary: &VocabularyConfig) -> Result<Self> {
        Self::builder(vocabulary).build()
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl TextParser<i64> for NumberParser {
    fn parse(&self, text: &str) -> Result<i64> {
        self.inner.parse(text)
    }
}

impl LocalizedTextParser<i64> for NumberParser {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// Fluent builder for [`NumberParser`]
pub struct NumberParserBuilder<'a> {
    vocabulary: &'a VocabularyConfig,
    config: ParserConfig,
    pre_processor: Option<PreProcessor>,
    post_processor: Option<PostProcessor<i64>>,
}

impl NumberParserBuilder<'_> {
    pub fn config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Rewrite the text before it is split into words
    pub fn pre_processor<F>(mut self, pre_processor: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.pre_processor = Some(Arc::new(pre_processor));
        self
    }

    /// Transform every successfully parsed number
    pub fn post_processor<F>(mut self, post_processor: F) -> Self
    where
        F: Fn(i64) -> i64 + Send + Sync + 'static,
    {
        self.post_processor = Some(Arc::new(post_processor));
        self
    }

    /// Build the parser
    pub fn build(self) -> Result<NumberParser> {
        self.config.validate()?;
        let vocabulary = self.vocabulary;

        let tokenizer = RegexTokenizer::new(&vocabulary.tokenizer.delimiter)
            .map_err(|e| Error::Configuration(e.to_string()))?;

        let fold_case = !self.config.case_sensitive;
        let dictionary = Arc::new(if fold_case {
            vocabulary.folded_dictionary()
        } else {
            vocabulary.dictionary()
        });

        let translation: Translation = match self.config.fuzzy_threshold {
            Some(threshold) => {
                let matcher = Matcher::metric(Arc::new(LevenshteinDissimilarity), threshold)?;
                Box::new(stages::translate_with(dictionary, matcher, REVISION_TRANSLATE))
            }
            None => Box::new(stages::translate(dictionary, REVISION_TRANSLATE)),
        };

        let chain = ProcessorChain::create(stages::map(move |word: Substring| {
            let positions = word.positions().clone();
            let text = if fold_case {
                word.as_str().to_lowercase()
            } else {
                word.into_text()
            };
            Ok(MutableToken::new(ValueToken::<NumericValue>::raw(text, positions)?))
        }))
        .append(translation)
        .append(stages::ensure_any_match(
            |_: &MutableToken<ValueToken<NumericValue>>| true,
            "no words",
        ))
        .append(stages::ensure_all_match(
            |token: &MutableToken<ValueToken<NumericValue>>| token.get().is_resolved(),
            "untranslated word",
        ))
        .append(Reducer::new())
        .append(Extractor);

        debug!(
            "built number parser for {} ({} words, case sensitive: {}, fuzzy: {:?})",
            vocabulary.metadata.code,
            vocabulary.entries.len(),
            self.config.case_sensitive,
            self.config.fuzzy_threshold
        );

        Ok(NumberParser {
            locale: vocabulary.metadata.code.clone(),
            config: self.config,
            inner: GradualTextParser::new(tokenizer, chain)
                .with_pre_processor(self.pre_processor)
                .with_post_processor(self.post_processor),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VOCABULARY: &str = r#"
        [metadata]
        code = "xx"
        name = "Test"

        [[entries]]
        word = "one"
        value = 1

        [[entries]]
        word = "two"
        value = 2

        [[entries]]
        word = "twenty"
        value = 20
        association = "right"
        right = { operation = "add", min = 1, max = 9 }

        [[entries]]
        word = "hundred"
        value = 100
        association = "bidirectional"
        left = { operation = "multiply", min = 1, max = 9 }
        right = { operation = "add", min = 1, max = 99 }
    "#;

    fn vocabulary() -> VocabularyConfig {
        VocabularyConfig::from_toml(VOCABULARY).unwrap()
    }

    fn reason(result: Result<i64>) -> String {
        match result {
            Err(Error::MalformedText { reason, .. }) => reason,
            other => panic!("Expected MalformedText, got {other:?}"),
        }
    }

    #[test]
    fn test_parse() {
        let parser = NumberParser::new(&vocabulary()).unwrap();
        assert_eq!(parser.locale(), "xx");
        assert_eq!(parser.parse("two").unwrap(), 2);
        assert_eq!(parser.parse("twenty-one").unwrap(), 21);
        assert_eq!(parser.parse("two hundred twenty two").unwrap(), 222);
        assert_eq!(parser.parse("hundred").unwrap(), 100);
    }

    #[test]
    fn test_rejections() {
        let parser = NumberParser::new(&vocabulary()).unwrap();
        assert_eq!(reason(parser.parse("")), "no words");
        assert_eq!(reason(parser.parse("  --  ")), "no words");
        assert_eq!(reason(parser.parse("two bananas")), "untranslated word");
        assert!(parser.parse("two one").unwrap_err().is_malformed());
    }

    #[test]
    fn test_case_sensitivity() {
        let insensitive = NumberParser::new(&vocabulary()).unwrap();
        assert_eq!(insensitive.parse("Twenty TWO").unwrap(), 22);

        let config = ParserConfig::builder().case_sensitive(true).build().unwrap();
        let sensitive = NumberParser::builder(&vocabulary()).config(config).build().unwrap();
        assert_eq!(sensitive.parse("twenty two").unwrap(), 22);
        assert!(sensitive.parse("Twenty two").is_err());
    }

    #[test]
    fn test_fuzzy_matching() {
        let config = ParserConfig::builder()
            .fuzzy_threshold(Some(0.2))
            .build()
            .unwrap();
        let parser = NumberParser::builder(&vocabulary()).config(config).build().unwrap();
        assert_eq!(parser.parse("twentt two").unwrap(), 22);
        assert_eq!(parser.parse("hundrd").unwrap(), 100);
        assert!(parser.parse("three").is_err());
    }

    #[test]
    fn test_hooks() {
        let parser = NumberParser::builder(&vocabulary())
            .pre_processor(|text| text.replace("and", " "))
            .post_processor(|value| -value)
            .build()
            .unwrap();
        assert_eq!(parser.parse("hundred and one").unwrap(), -101);
    }

    #[test]
    fn test_errors_carry_the_original_text() {
        let parser = NumberParser::new(&vocabulary()).unwrap();
        match parser.parse("Twenty Bananas") {
            Err(Error::MalformedText { text, .. }) => assert_eq!(text, "Twenty Bananas"),
            other => panic!("Expected MalformedText, got {other:?}"),
        }
    }
}
