// Domain types and the conversion core
pub mod convert;
pub mod currency;
pub mod error;
pub mod selection;
pub mod table;

// Re-export commonly used types
pub use convert::{convert, parse_amount};
pub use currency::CurrencyRecord;
pub use error::SwapError;
pub use selection::{SelectionState, SwapSide, rate_line};
pub use table::CurrencyTable;
