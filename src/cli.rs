use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rate-strategy")]
#[command(about = "Strategy-pattern rate calculator - apply a pluggable tax or freight policy to an amount", long_about = None)]
pub struct Args {
    /// Policy to apply (clt, pj, internship, common, express)
    #[arg(short, long, value_name = "NAME")]
    pub policy: String,

    /// Amount to calculate on (salary for tax policies, order value for freight)
    #[arg(short, long, value_name = "N")]
    pub amount: f64,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,

    /// Output file path (prints to stdout if not specified)
    #[arg(short = 'O', long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() {
            anyhow::bail!("Amount must be a finite number, got: {}", self.amount);
        }
        Ok(())
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(amount: f64) -> Args {
        Args {
            policy: "clt".to_string(),
            amount,
            format: OutputFormat::Text,
            output_file: None,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_finite_amount_is_valid() {
        assert!(args(1000.0).validate().is_ok());
        assert!(args(0.0).validate().is_ok());
        assert!(args(-50.0).validate().is_ok());
    }

    #[test]
    fn test_non_finite_amount_is_rejected() {
        assert!(args(f64::NAN).validate().is_err());
        assert!(args(f64::INFINITY).validate().is_err());
        assert!(args(f64::NEG_INFINITY).validate().is_err());
    }

    #[test]
    fn test_output_format_as_str() {
        assert_eq!(OutputFormat::Text.as_str(), "text");
        assert_eq!(OutputFormat::Json.as_str(), "json");
    }
}
