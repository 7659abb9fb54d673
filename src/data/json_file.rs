use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::data::CreateCurrencyData;
use crate::domain::CurrencyRecord;

/// Reads a feed of the same shape as the embedded dataset from disk.
pub struct JsonFileCurrencyData {
    pub path: PathBuf,
}

#[async_trait(?Send)]
impl CreateCurrencyData for JsonFileCurrencyData {
    fn signature(&self) -> &'static str {
        "JSON Dataset File"
    }

    async fn create_currency_data(&self) -> Result<Vec<CurrencyRecord>> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read dataset: {}", self.path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse dataset: {}", self.path.display()))
    }
}
