//! Text parsers turning raw text into values
//!
//! A [`GradualTextParser`] tokenizes its input into a position-ordered
//! sequence and hands it to a processor chain. Optional hooks run before
//! tokenizing and after the chain.

use crate::processing::Processor;
use crate::sequence::TokenSequence;
use crate::tokenizer::Tokenizer;
use crate::Result;
use std::sync::Arc;

/// Parses texts into values of type `R`
pub trait TextParser<R> {
    /// Parse `text`; malformed input yields [`Error::MalformedText`](crate::Error::MalformedText)
    /// carrying `text` itself
    fn parse(&self, text: &str) -> Result<R>;
}

/// A parser bound to one locale
pub trait LocalizedTextParser<R>: TextParser<R> {
    fn locale(&self) -> &str;
}

/// Hook applied to the text before tokenizing
pub type PreProcessor = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Hook applied to the result of the processor chain
pub type PostProcessor<R> = Arc<dyn Fn(R) -> R + Send + Sync>;

/// A parser running a tokenizer followed by a processor chain
pub struct GradualTextParser<Z: Tokenizer, R> {
    tokenizer: Z,
    processor: Box<dyn Processor<TokenSequence<Z::Token>, R>>,
    pre_processor: Option<PreProcessor>,
    post_processor: Option<PostProcessor<R>>,
}

impl<Z, R> GradualTextParser<Z, R>
where
    Z: Tokenizer,
    Z::Token: Clone,
{
    pub fn new<P>(tokenizer: Z, processor: P) -> Self
    where
        P: Processor<TokenSequence<Z::Token>, R> + 'static,
    {
        Self {
            tokenizer,
            processor: Box::new(processor),
            pre_processor: None,
            post_processor: None,
        }
    }

    pub fn with_pre_processor(mut self, pre_processor: Option<PreProcessor>) -> Self {
        self.pre_processor = pre_processor;
        self
    }

    pub fn with_post_processor(mut self, post_processor: Option<PostProcessor<R>>) -> Self {
        self.post_processor = post_processor;
        self
    }

    pub fn set_pre_processor(&mut self, pre_processor: Option<PreProcessor>) {
        self.pre_processor = pre_processor;
    }

    pub fn set_post_processor(&mut self, post_processor: Option<PostProcessor<R>>) {
        self.post_processor = post_processor;
    }

    pub fn tokenizer(&self) -> &Z {
        &self.tokenizer
    }
}

impl<Z, R> TextParser<R> for GradualTextParser<Z, R>
where
    Z: Tokenizer,
    Z::Token: Clone,
{
    fn parse(&self, text: &str) -> Result<R> {
        let pre_processed = match &self.pre_processor {
            Some(pre_processor) => pre_processor(text),
            None => text.to_string(),
        };

        let result = self
            .tokenizer
            .tokenize(&pre_processed)
            .map(TokenSequence::create_sorted)
            .and_then(|sequence| self.processor.process(sequence))
            .map_err(|e| e.with_text(text))?;

        Ok(match &self.post_processor {
            Some(post_processor) => post_processor(result),
            None => result,
        })
    }
}

impl<Z: Tokenizer + std::fmt::Debug, R> std::fmt::Debug for GradualTextParser<Z, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradualTextParser")
            .field("tokenizer", &self.tokenizer)
            .field("pre_processor", &self.pre_processor.is_some())
            .field("post_processor", &self.post_processor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::stages::{ensure_all_match, map_sequence};
    use crate::processing::ProcessorChain;
    use crate::token::Substring;
    use crate::tokenizer::RegexTokenizer;
    use crate::Error;

    fn word_counter() -> GradualTextParser<RegexTokenizer, usize> {
        let chain = ProcessorChain::create(ensure_all_match(
            |t: &Substring| t.as_str().chars().all(char::is_alphabetic),
            "only words allowed",
        ))
        .append(map_sequence(|sequence: TokenSequence<Substring>| {
            Ok(sequence.size())
        }));
        GradualTextParser::new(RegexTokenizer::split_by_whitespace().unwrap(), chain)
    }

    #[test]
    fn test_parse_runs_tokenizer_and_chain() {
        assert_eq!(word_counter().parse("one two three").unwrap(), 3);
    }

    #[test]
    fn test_errors_carry_the_original_text() {
        let parser = word_counter().with_pre_processor(Some(Arc::new(|t: &str| t.to_uppercase())));
        match parser.parse("one 2") {
            Err(Error::MalformedText { text, .. }) => assert_eq!(text, "one 2"),
            other => panic!("Expected MalformedText, got {other:?}"),
        }
    }

    #[test]
    fn test_hooks() {
        let parser = word_counter()
            .with_pre_processor(Some(Arc::new(|t: &str| t.replace(',', " "))))
            .with_post_processor(Some(Arc::new(|count: usize| count * 10)));
        assert_eq!(parser.parse("a,b").unwrap(), 20);
    }
}
