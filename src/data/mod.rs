// Data loading: the simulated price feed and its alternatives
#[cfg(not(target_arch = "wasm32"))]
pub mod json_file;
pub mod mock_api;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::MOCK_FETCH_DELAY_MS;
use crate::domain::{CurrencyRecord, CurrencyTable, SelectionState};
use crate::utils::app_time::now;

#[cfg(not(target_arch = "wasm32"))]
pub use json_file::JsonFileCurrencyData;
pub use mock_api::MockCurrencyApi;

// Loading is single-shot on one thread (current-thread runtime natively,
// the browser event loop on wasm), so providers need not be Send.
#[async_trait(?Send)]
pub trait CreateCurrencyData {
    // Either produce the ordered feed OR return an anyhow::Error
    async fn create_currency_data(&self) -> Result<Vec<CurrencyRecord>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub async fn get_currency_data_async(
    implementations: &[Box<dyn CreateCurrencyData>],
) -> Result<(Vec<CurrencyRecord>, &'static str)> {
    for imp in implementations {
        match imp.create_currency_data().await {
            Ok(records) => return Ok((records, imp.signature())),
            Err(e) => {
                log::warn!("⚠️  {} failed: {:#}", imp.signature(), e);
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All currency data sources failed"))
}

/// Result of a completed load: the table plus the default selection
#[derive(Debug, Clone)]
pub struct LoadedCurrencies {
    pub table: CurrencyTable,
    pub selection: SelectionState,
    pub signature: &'static str,
}

/// Runtime loading options (the defaults come from `config::LOADER`)
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub delay: Duration,
    /// Optional JSON file tried before the mocked API
    pub dataset: Option<PathBuf>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(MOCK_FETCH_DELAY_MS),
            dataset: None,
        }
    }
}

impl LoadOptions {
    /// Provider chain in priority order. The mocked API always comes last.
    pub fn providers(&self) -> Vec<Box<dyn CreateCurrencyData>> {
        let mut providers: Vec<Box<dyn CreateCurrencyData>> = Vec::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &self.dataset {
            providers.push(Box::new(JsonFileCurrencyData { path: path.clone() }));
        }
        #[cfg(target_arch = "wasm32")]
        if self.dataset.is_some() {
            log::warn!("Dataset files are not supported in the browser, using the mocked API");
        }

        providers.push(Box::new(MockCurrencyApi::new(self.delay)));
        providers
    }
}

/// Runs the provider chain once, keys the feed by code and picks the default selection.
pub async fn load_currencies(
    implementations: &[Box<dyn CreateCurrencyData>],
) -> Result<LoadedCurrencies> {
    let start = now();
    let (records, signature) = get_currency_data_async(implementations).await?;

    let table = CurrencyTable::from_records(records);
    if table.duplicates_overwritten() > 0 {
        log::warn!(
            "{} duplicate currency codes in feed from {} (last entry kept)",
            table.duplicates_overwritten(),
            signature
        );
    }
    let selection = SelectionState::initial_for(&table)
        .with_context(|| format!("No default currency available from {}", signature))?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_loader_progress {
        log::info!(
            "Loaded {} currencies from {} in {:.2}s",
            table.len(),
            signature,
            start.elapsed().as_secs_f32()
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = start;

    Ok(LoadedCurrencies {
        table,
        selection,
        signature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SwapError;

    struct FailingSource;

    #[async_trait(?Send)]
    impl CreateCurrencyData for FailingSource {
        fn signature(&self) -> &'static str {
            "Failing Source"
        }

        async fn create_currency_data(&self) -> Result<Vec<CurrencyRecord>> {
            Err(anyhow!("unreachable host"))
        }
    }

    struct FixedSource(Vec<CurrencyRecord>);

    #[async_trait(?Send)]
    impl CreateCurrencyData for FixedSource {
        fn signature(&self) -> &'static str {
            "Fixed Source"
        }

        async fn create_currency_data(&self) -> Result<Vec<CurrencyRecord>> {
            Ok(self.0.clone())
        }
    }

    fn usd_eur() -> Vec<CurrencyRecord> {
        vec![
            CurrencyRecord::new("USD", "2023-08-29T07:10:30.000Z", 1.0),
            CurrencyRecord::new("EUR", "2023-08-29T07:10:30.000Z", 0.9),
        ]
    }

    #[tokio::test]
    async fn falls_back_to_next_provider() {
        let providers: Vec<Box<dyn CreateCurrencyData>> =
            vec![Box::new(FailingSource), Box::new(FixedSource(usd_eur()))];

        let loaded = load_currencies(&providers).await.unwrap();
        assert_eq!(loaded.signature, "Fixed Source");
        assert_eq!(loaded.table.len(), 2);
    }

    #[tokio::test]
    async fn all_providers_failing_is_an_error() {
        let providers: Vec<Box<dyn CreateCurrencyData>> =
            vec![Box::new(FailingSource), Box::new(FailingSource)];
        assert!(load_currencies(&providers).await.is_err());
    }

    #[tokio::test]
    async fn defaults_to_first_record_on_both_sides() {
        let providers: Vec<Box<dyn CreateCurrencyData>> = vec![Box::new(FixedSource(usd_eur()))];

        let loaded = load_currencies(&providers).await.unwrap();
        assert!(!loaded.table.is_empty());
        assert_eq!(loaded.selection.from_currency, "USD");
        assert_eq!(loaded.selection.to_currency, "USD");
    }

    #[tokio::test]
    async fn empty_feed_is_rejected() {
        let providers: Vec<Box<dyn CreateCurrencyData>> = vec![Box::new(FixedSource(Vec::new()))];

        let err = load_currencies(&providers).await.unwrap_err();
        assert_eq!(err.downcast_ref::<SwapError>(), Some(&SwapError::EmptyDataset));
    }

    #[test]
    fn default_chain_ends_with_mock_api() {
        let providers = LoadOptions::default().providers();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].signature(), "Mock Currency API");

        let with_file = LoadOptions {
            dataset: Some(PathBuf::from("prices.json")),
            ..Default::default()
        };
        let signatures: Vec<_> = with_file.providers().iter().map(|p| p.signature()).collect();
        assert_eq!(signatures, vec!["JSON Dataset File", "Mock Currency API"]);
    }
}
