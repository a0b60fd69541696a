//! Command line definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// `Tandem` - two-track capital allocation from the command line.
#[derive(Parser, Debug)]
#[command(name = "tandem-cli")]
#[command(author = "theonlyhennygod")]
#[command(version = "0.1.0")]
#[command(about = "Split capital into tactical and strategic tracks.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.tandem/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for reports.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Evaluate a market context and print the suggested allocation
    Evaluate {
        /// Total capital (default from config: 100,000,000)
        #[arg(long)]
        capital: Option<f64>,

        /// Volatility breakout strength, 0-100
        #[arg(long, allow_negative_numbers = true)]
        strength: Option<i64>,

        /// Fear & greed sentiment, 0-100
        #[arg(long, allow_negative_numbers = true)]
        sentiment: Option<i64>,

        /// Analyst consensus, 1 (sell) to 5 (strong buy)
        #[arg(long, allow_negative_numbers = true)]
        analyst: Option<i64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Include the rationale checklist
        #[arg(long)]
        rationale: bool,
    },

    /// Show the strategic holding table
    Holdings {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the effective configuration
    Config,
}
