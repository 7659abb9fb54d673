//! Data loading configuration

/// Settings for the simulated price feed
pub struct LoaderConfig {
    /// Delay before the mocked API resolves (milliseconds)
    pub mock_fetch_delay_ms: u64,
    /// Embedded dataset returned by the mocked API
    pub embedded_dataset: &'static str,
}

pub const LOADER: LoaderConfig = LoaderConfig {
    mock_fetch_delay_ms: 2_000,
    embedded_dataset: include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/get-currency.json"
    )),
};

/// Default mock delay, exposed for clap defaults
pub const MOCK_FETCH_DELAY_MS: u64 = LOADER.mock_fetch_delay_ms;
