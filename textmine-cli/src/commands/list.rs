//! List command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List numeral locales
    Locales,

    /// List string metrics
    Metrics,

    /// List output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        for line in self.entries(config)? {
            println!("{line}");
        }
        Ok(())
    }

    fn entries(&self, config: &CliConfig) -> Result<Vec<String>> {
        Ok(match self {
            ListCommands::Locales => {
                let registry = super::parse::registry(config, &[])?;
                registry
                    .available_locales()
                    .into_iter()
                    .map(|code| {
                        let name = registry
                            .vocabulary(&code)
                            .map(|v| v.metadata.name.clone())
                            .unwrap_or_default();
                        format!("{code}\t{name}")
                    })
                    .collect()
            }
            ListCommands::Metrics => textmine_core::metrics::METRIC_NAMES
                .iter()
                .map(|name| name.to_string())
                .collect(),
            ListCommands::Formats => vec!["text".to_string(), "json".to_string()],
        })
    }
}
