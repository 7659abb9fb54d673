use std::fmt;

/// Errors surfaced by the swap form and the conversion core
#[derive(Debug, Clone, PartialEq)]
pub enum SwapError {
    /// A currency code was not found in the loaded table
    UnknownCurrency(String),
    /// The table has not been loaded yet (or loaded empty)
    NotLoaded,
    /// The amount field is missing or not a finite number
    InvalidAmount(String),
    /// The dataset contained no records, so no default selection exists
    EmptyDataset,
}

impl fmt::Display for SwapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapError::UnknownCurrency(code) => write!(f, "Unknown currency: {}", code),
            SwapError::NotLoaded => write!(f, "Currency data not loaded yet"),
            SwapError::InvalidAmount(input) => write!(f, "Invalid amount: '{}'", input),
            SwapError::EmptyDataset => write!(f, "Currency dataset is empty"),
        }
    }
}

impl std::error::Error for SwapError {}
