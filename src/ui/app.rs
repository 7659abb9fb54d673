use eframe::{Frame, egui};
use poll_promise::Promise;
use std::fmt;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::LoadOptions;
use crate::domain::{CurrencyTable, SelectionState, SwapError, SwapSide};
use crate::ui::app_async::AsyncLoadResult;
use crate::ui::icons::CurrencyIcon;
use crate::ui::utils::{setup_custom_visuals, setup_image_loaders};

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Every data source failed (or the feed was unusable)
    LoadFailed(String),
    /// A submission was rejected by the conversion core
    Swap(SwapError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::LoadFailed(msg) => write!(f, "Failed to load prices: {}", msg),
            AppError::Swap(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<SwapError> for AppError {
    fn from(err: SwapError) -> Self {
        AppError::Swap(err)
    }
}

pub struct CurrencySwapApp {
    pub(super) load_options: LoadOptions,
    // Async load state
    pub(super) load_promise: Option<Promise<AsyncLoadResult>>,
    pub(super) loading: bool,
    pub(super) source_signature: Option<&'static str>,

    // Data state: written once by the loader
    pub(super) table: CurrencyTable,

    // Form state
    pub(super) selection: SelectionState,
    pub(super) amount_input: String,
    pub(super) result: f64,
    pub(super) last_error: Option<AppError>,

    pub(super) from_icon: CurrencyIcon,
    pub(super) to_icon: CurrencyIcon,
}

impl CurrencySwapApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        load_options: LoadOptions,
        offline_icons: bool,
    ) -> Self {
        setup_image_loaders(&cc.egui_ctx);

        let mut app = Self::new_with_initial_state(load_options, offline_icons);
        app.start_currency_load();
        app
    }

    /// Fresh form state: empty selection, result 0, loading until the feed resolves
    pub fn new_with_initial_state(load_options: LoadOptions, offline_icons: bool) -> Self {
        Self {
            load_options,
            load_promise: None,
            loading: true,
            source_signature: None,
            table: CurrencyTable::default(),
            selection: SelectionState::default(),
            amount_input: String::new(),
            result: 0.0,
            last_error: None,
            from_icon: CurrencyIcon::new(offline_icons),
            to_icon: CurrencyIcon::new(offline_icons),
        }
    }

    pub(super) fn icon_mut(&mut self, side: SwapSide) -> &mut CurrencyIcon {
        match side {
            SwapSide::From => &mut self.from_icon,
            SwapSide::To => &mut self.to_icon,
        }
    }

    pub(super) fn sync_icons(&mut self) {
        self.from_icon.set_code(&self.selection.from_currency);
        self.to_icon.set_code(&self.selection.to_currency);
    }
}

impl eframe::App for CurrencySwapApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // A pending load holds a sender; dropping it here avoids a "Sender dropped" panic
        self.load_promise = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_currency_load(ctx);

        self.render_central_panel(ctx);
    }
}
