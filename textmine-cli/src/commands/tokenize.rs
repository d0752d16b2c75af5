//! Tokenize command implementation

use crate::config::CliConfig;
use crate::output::{OutputFormat, OutputFormatter};
use anyhow::Result;
use clap::Args;
use std::collections::BTreeSet;
use textmine_core::tokenizer::{FixedLengthTokenizer, NGramTokenizer, RegexTokenizer, Tokenizer};
use textmine_core::{Token, TokenSequence};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Text to tokenize
    pub text: String,

    /// Split at matches of this regular expression (default: whitespace)
    #[arg(long, value_name = "REGEX", conflicts_with_all = ["ngram", "fixed"])]
    pub pattern: Option<String>,

    /// Produce n-grams with degrees between MIN and MAX
    #[arg(long, num_args = 2, value_names = ["MIN", "MAX"], conflicts_with = "fixed")]
    pub ngram: Option<Vec<usize>>,

    /// Cut into pieces of this many characters
    #[arg(long, value_name = "N")]
    pub fixed: Option<usize>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let mut formatter = super::formatter(self.format, config)?;
        self.write_tokens(formatter.as_mut())?;
        formatter.finish()
    }

    fn write_tokens(&self, formatter: &mut dyn OutputFormatter) -> Result<()> {
        if let Some(bounds) = &self.ngram {
            let (min, max) = match bounds.as_slice() {
                [min, max] => (*min, *max),
                _ => anyhow::bail!("--ngram takes exactly two values"),
            };
            return emit(&NGramTokenizer::new(min, max)?, &self.text, formatter);
        }

        if let Some(length) = self.fixed {
            return emit(&FixedLengthTokenizer::new(length)?, &self.text, formatter);
        }

        let tokenizer = match &self.pattern {
            Some(pattern) => RegexTokenizer::new(pattern)?,
            None => RegexTokenizer::split_by_whitespace()?,
        };
        emit(&tokenizer, &self.text, formatter)
    }
}

/// Write the tokens of `text` in position order, one entry per occurrence
fn emit<Z>(tokenizer: &Z, text: &str, formatter: &mut dyn OutputFormatter) -> Result<()>
where
    Z: Tokenizer,
    Z::Token: Clone,
{
    let tokens = tokenizer.tokenize(text)?;
    log::debug!("{} distinct fragment(s)", tokens.len());

    let positions: BTreeSet<usize> = tokens
        .iter()
        .flat_map(|token| token.positions().iter().copied())
        .collect();
    let sequence = TokenSequence::create_sorted(tokens);

    for (token, position) in sequence.iter().zip(positions) {
        formatter.format_token(&token.text(), position)?;
    }
    Ok(())
}
