#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod cli;
pub mod report;

use anyhow::{Context, Result};
use serde::Serialize;
use tandem_common::Config;
use tandem_engine::allocation::{evaluate, HoldingTable, HoldingWeight, MarketInput};

pub use cli::{Cli, Commands, OutputFormat};

#[derive(Debug, Serialize)]
struct HoldingsOutput<'a> {
    holdings: &'a [HoldingWeight],
    weight_sum: f64,
    gross_up_divisor: f64,
}

/// Execute a parsed command against `config` and return what to print.
pub fn run(command: &Commands, config: &Config) -> Result<String> {
    let holdings = HoldingTable::from_config(config.holdings.as_deref());
    tracing::debug!(?command, holdings = holdings.len(), "Running command");

    match command {
        Commands::Evaluate {
            capital,
            strength,
            sentiment,
            analyst,
            format,
            rationale,
        } => {
            let input = MarketInput {
                total_capital: *capital,
                tactical_strength: *strength,
                sentiment_index: *sentiment,
                analyst_consensus: *analyst,
            };
            let context = input
                .resolve(&config.defaults, &config.limits)
                .context("Invalid market context")?;

            let evaluation = evaluate(&context, &holdings);

            match format {
                OutputFormat::Text => Ok(report::render_evaluation(
                    &evaluation,
                    &config.display.currency_symbol,
                    *rationale,
                )),
                OutputFormat::Json => Ok(serde_json::to_string_pretty(&evaluation)?),
            }
        }

        Commands::Holdings { format } => match format {
            OutputFormat::Text => Ok(report::render_holdings(&holdings)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&HoldingsOutput {
                holdings: holdings.as_slice(),
                weight_sum: holdings.weight_sum(),
                gross_up_divisor: tandem_engine::allocation::GROSS_UP_DIVISOR,
            })?),
        },

        Commands::Config => Ok(serde_json::to_string_pretty(config)?),
    }
}
