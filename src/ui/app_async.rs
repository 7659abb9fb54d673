use eframe::egui;
use poll_promise::Promise;
use std::time::Duration;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::{LoadOptions, LoadedCurrencies, load_currencies};
use crate::ui::app::{AppError, CurrencySwapApp};
use crate::utils::app_time::now;

pub(crate) struct AsyncLoadResult {
    pub(crate) result: Result<LoadedCurrencies, AppError>,
    elapsed_time: Duration,
}

impl AsyncLoadResult {
    pub(crate) fn elapsed_time(&self) -> Duration {
        self.elapsed_time
    }
}

impl CurrencySwapApp {
    /// Kicks off the one-shot price load. A load already in flight is left alone.
    pub(super) fn start_currency_load(&mut self) {
        if self.load_promise.is_some() {
            return;
        }

        self.loading = true;
        let options = self.load_options.clone();

        #[cfg(not(target_arch = "wasm32"))]
        let promise =
            Promise::spawn_thread("currency_load", move || run_currency_load_blocking(options));

        #[cfg(target_arch = "wasm32")]
        let promise = Promise::spawn_local(run_currency_load(options));

        self.load_promise = Some(promise);
    }

    pub(super) fn poll_currency_load(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.load_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok(outcome) => self.apply_load_outcome(outcome),
            Err(pending) => {
                self.load_promise = Some(pending);
                ctx.request_repaint_after(Duration::from_millis(50));
            }
        }
    }

    pub(crate) fn apply_load_outcome(&mut self, outcome: AsyncLoadResult) {
        self.loading = false;
        let elapsed = outcome.elapsed_time();

        match outcome.result {
            Ok(loaded) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_loader_progress {
                    log::info!(
                        "✅ {} currencies ready after {:.2}s (source: {})",
                        loaded.table.len(),
                        elapsed.as_secs_f32(),
                        loaded.signature
                    );
                }

                self.table = loaded.table;
                self.selection = loaded.selection;
                self.source_signature = Some(loaded.signature);
                self.last_error = None;
                self.sync_icons();
            }
            Err(error) => {
                log::error!(
                    "❌ Currency load failed after {:.2}s: {}",
                    elapsed.as_secs_f32(),
                    error
                );
                self.last_error = Some(error);
            }
        }
    }

    pub(super) fn is_loading(&self) -> bool {
        self.loading
    }
}

async fn run_currency_load(options: LoadOptions) -> AsyncLoadResult {
    let load_start = now();
    let result = load_currencies(&options.providers())
        .await
        .map_err(|e| AppError::LoadFailed(format!("{:#}", e)));

    AsyncLoadResult {
        result,
        elapsed_time: load_start.elapsed(),
    }
}

// The loader thread drives its own single-threaded runtime for the delay and file reads
#[cfg(not(target_arch = "wasm32"))]
fn run_currency_load_blocking(options: LoadOptions) -> AsyncLoadResult {
    let load_start = now();
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt.block_on(run_currency_load(options)),
        Err(e) => AsyncLoadResult {
            result: Err(AppError::LoadFailed(format!(
                "Failed to create Tokio runtime: {}",
                e
            ))),
            elapsed_time: load_start.elapsed(),
        },
    }
}

#[cfg(test)]
impl AsyncLoadResult {
    pub(crate) fn ready(result: Result<LoadedCurrencies, AppError>) -> Self {
        Self {
            result,
            elapsed_time: Duration::ZERO,
        }
    }
}
