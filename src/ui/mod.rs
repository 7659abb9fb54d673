// User interface components
pub mod app;
pub mod app_async;
pub mod app_state;
pub mod config;
pub mod icons;
pub mod styles;
pub mod ui_panels;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::CurrencySwapApp;
pub use config::UI_CONFIG;
