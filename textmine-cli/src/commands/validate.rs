//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use textmine_core::numbers::{NumberParser, VocabularyConfig};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the numeral vocabulary file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub vocabulary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating vocabulary: {}", self.vocabulary.display());

        match Self::check(&self.vocabulary) {
            Ok(config) => {
                println!("✓ Vocabulary is valid!");
                println!("  Locale code: {}", config.metadata.code);
                println!("  Locale name: {}", config.metadata.name);
                println!("  Words: {}", config.entries.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Vocabulary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }

    fn check(path: &Path) -> textmine_core::Result<VocabularyConfig> {
        let config = VocabularyConfig::from_file(path)?;
        // building a parser also compiles the tokenizer
        NumberParser::new(&config)?;
        Ok(config)
    }
}
