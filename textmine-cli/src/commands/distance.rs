//! Distance command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use textmine_core::metrics::{metric_by_name, METRIC_NAMES};

/// Arguments for the distance command
#[derive(Debug, Args)]
pub struct DistanceArgs {
    /// Metric name (see `textmine list metrics`)
    pub metric: String,

    /// First text
    pub first: String,

    /// Second text
    pub second: String,
}

impl DistanceArgs {
    /// Execute the distance command
    pub fn execute(&self) -> Result<()> {
        println!("{}", self.evaluate()?);
        Ok(())
    }

    fn evaluate(&self) -> Result<f64> {
        let metric = metric_by_name(&self.metric).ok_or_else(|| {
            log::info!("Known metrics: {}", METRIC_NAMES.join(", "));
            CliError::UnknownMetric(self.metric.clone())
        })?;

        metric
            .evaluate(&self.first, &self.second)
            .with_context(|| format!("Cannot compare with {}", self.metric))
    }
}
