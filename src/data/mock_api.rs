use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::LOADER;
use crate::data::CreateCurrencyData;
use crate::domain::CurrencyRecord;
use crate::utils::app_time::sleep;

/// Stand-in for the price API: resolves the embedded dataset after a fixed delay.
pub struct MockCurrencyApi {
    pub delay: Duration,
    pub payload: &'static str,
}

impl MockCurrencyApi {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            payload: LOADER.embedded_dataset,
        }
    }
}

impl Default for MockCurrencyApi {
    fn default() -> Self {
        Self::new(Duration::from_millis(LOADER.mock_fetch_delay_ms))
    }
}

#[async_trait(?Send)]
impl CreateCurrencyData for MockCurrencyApi {
    fn signature(&self) -> &'static str {
        "Mock Currency API"
    }

    async fn create_currency_data(&self) -> Result<Vec<CurrencyRecord>> {
        sleep(self.delay).await;
        serde_json::from_str(self.payload).context("Failed to parse embedded currency dataset")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn resolves_after_configured_delay() {
        let api = MockCurrencyApi::default();
        let started = Instant::now();

        let records = api.create_currency_data().await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2_000));
        assert!(!records.is_empty());
        assert_eq!(records[0].currency, "BLUR");
    }

    #[tokio::test]
    async fn embedded_dataset_has_positive_prices() {
        let api = MockCurrencyApi::new(Duration::ZERO);
        let records = api.create_currency_data().await.unwrap();

        assert!(records.iter().all(|r| r.price > 0.0));
        assert!(records.iter().all(|r| r.quoted_at().is_some()));
    }

    #[tokio::test]
    async fn malformed_payload_is_an_error() {
        let api = MockCurrencyApi {
            delay: Duration::ZERO,
            payload: r#"[{"currency":"USD"}]"#,
        };
        assert!(api.create_currency_data().await.is_err());
    }
}
