use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use currency_swap::config::MOCK_FETCH_DELAY_MS;
use currency_swap::data::{LoadOptions, load_currencies};
use currency_swap::domain::{SelectionState, SwapSide, convert, rate_line};
use currency_swap::utils::format_number;

/// Headless access to the currency swap core
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct SwapCli {
    /// Simulated price API delay in milliseconds
    #[arg(long, default_value_t = MOCK_FETCH_DELAY_MS, conflicts_with = "no_delay")]
    delay_ms: u64,

    /// Skip the simulated API delay
    #[arg(long, default_value_t = false)]
    no_delay: bool,

    /// Load prices from this JSON file instead of the mocked API
    #[arg(long)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every currency in feed order
    List,
    /// Convert an amount from one currency into another
    Convert {
        #[arg(long, allow_hyphen_values = true)]
        amount: f64,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Print the form's "1 FROM = PRICE TO" line
    Rate {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
}

impl SwapCli {
    fn load_options(&self) -> LoadOptions {
        let delay = if self.no_delay {
            Duration::ZERO
        } else {
            Duration::from_millis(self.delay_ms)
        };
        LoadOptions {
            delay,
            dataset: self.dataset.clone(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = SwapCli::parse();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create Tokio runtime")?;
    let loaded = rt.block_on(load_currencies(&args.load_options().providers()))?;
    let table = loaded.table;

    match args.command {
        Command::List => {
            println!("{:<10} {:>22}  {}", "CURRENCY", "PRICE", "QUOTED");
            for record in table.records() {
                let quoted = record
                    .quoted_at()
                    .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                    .unwrap_or_else(|| record.date.clone());
                println!(
                    "{:<10} {:>22}  {}",
                    record.currency,
                    format_number(record.price),
                    quoted
                );
            }
            println!("{} currencies (source: {})", table.len(), loaded.signature);
        }
        Command::Convert { amount, from, to } => {
            let result = convert(&table, amount, &from, &to)?;
            println!(
                "{} {} = {} {}",
                format_number(amount),
                from,
                format_number(result),
                to
            );
        }
        Command::Rate { from, to } => {
            let mut selection = SelectionState::initial_for(&table)?;
            selection.select(&table, SwapSide::From, &from)?;
            selection.select(&table, SwapSide::To, &to)?;
            println!("{}", rate_line(&table, &selection));
        }
    }

    Ok(())
}
