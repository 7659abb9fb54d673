use strum_macros::{Display, EnumIter};

use crate::domain::error::SwapError;
use crate::domain::table::CurrencyTable;
use crate::utils::format_number;

/// The two currency pickers on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum SwapSide {
    From,
    To,
}

/// Currently selected pair of codes. Empty until the table is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub from_currency: String,
    pub to_currency: String,
}

impl SelectionState {
    /// Both sides default to the first code of the feed
    pub fn initial_for(table: &CurrencyTable) -> Result<Self, SwapError> {
        let first = table.first_code().ok_or(SwapError::EmptyDataset)?;
        Ok(Self {
            from_currency: first.to_string(),
            to_currency: first.to_string(),
        })
    }

    pub fn code(&self, side: SwapSide) -> &str {
        match side {
            SwapSide::From => &self.from_currency,
            SwapSide::To => &self.to_currency,
        }
    }

    /// Sets one side. The other side is left as it was.
    pub fn select(
        &mut self,
        table: &CurrencyTable,
        side: SwapSide,
        code: &str,
    ) -> Result<(), SwapError> {
        if !table.contains(code) {
            return Err(SwapError::UnknownCurrency(code.to_string()));
        }
        let slot = match side {
            SwapSide::From => &mut self.from_currency,
            SwapSide::To => &mut self.to_currency,
        };
        *slot = code.to_string();
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.from_currency.is_empty() && self.to_currency.is_empty()
    }
}

/// The "1 FROM = PRICE TO" line under the pickers.
///
/// Shows the raw price of the from-currency, not the from→to cross-rate.
/// The price is blank while the from-currency is unknown (e.g. still loading).
pub fn rate_line(table: &CurrencyTable, selection: &SelectionState) -> String {
    let price = table
        .price(&selection.from_currency)
        .map(format_number)
        .unwrap_or_default();
    format!(
        "1 {} = {} {}",
        selection.from_currency, price, selection.to_currency
    )
}
