// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

use std::path::PathBuf;
use std::time::Duration;

// Re-export commonly used types
pub use data::{LoadOptions, LoadedCurrencies, load_currencies};
pub use domain::{CurrencyRecord, CurrencyTable, SelectionState, SwapError, convert};
pub use ui::CurrencySwapApp;
pub use utils::app_time;

use config::MOCK_FETCH_DELAY_MS;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Simulated price API delay in milliseconds
    #[arg(long, default_value_t = MOCK_FETCH_DELAY_MS)]
    pub delay_ms: u64,

    /// Load prices from this JSON file instead of the mocked API (falls back to the mock on error)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Never fetch remote currency icons; show the bundled placeholder
    #[arg(long, default_value_t = false)]
    pub offline_icons: bool,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            delay: Duration::from_millis(self.delay_ms),
            dataset: self.dataset.clone(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext, args: &Cli) -> Box<dyn eframe::App> {
    Box::new(CurrencySwapApp::new(
        cc,
        args.load_options(),
        args.offline_icons,
    ))
}
