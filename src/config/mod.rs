//! Configuration module for the currency swap application.

mod debug; // Private: use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod icons;
pub mod loader;

// Re-export commonly used items
pub use icons::{ICONS, remote_icon_url};
pub use loader::{LOADER, MOCK_FETCH_DELAY_MS};
