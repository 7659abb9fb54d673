use std::collections::HashMap;

use crate::domain::currency::CurrencyRecord;
use crate::domain::error::SwapError;

/// Code-keyed lookup of currency records.
///
/// Built once from an ordered feed and read-only afterwards. Codes keep the
/// position of their first appearance (this is the order the pickers list
/// them in), while a repeated code overwrites the earlier record: last write
/// wins.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    records: Vec<CurrencyRecord>,
    index: HashMap<String, usize>,
    duplicates_overwritten: usize,
}

impl CurrencyTable {
    pub fn from_records(records: impl IntoIterator<Item = CurrencyRecord>) -> Self {
        let mut table = Self::default();
        for record in records {
            match table.index.get(&record.currency) {
                Some(&slot) => {
                    table.records[slot] = record;
                    table.duplicates_overwritten += 1;
                }
                None => {
                    table
                        .index
                        .insert(record.currency.clone(), table.records.len());
                    table.records.push(record);
                }
            }
        }
        table
    }

    /// Fallible lookup. Absent codes are a `SwapError::UnknownCurrency`.
    pub fn get(&self, code: &str) -> Result<&CurrencyRecord, SwapError> {
        self.index
            .get(code)
            .map(|&slot| &self.records[slot])
            .ok_or_else(|| SwapError::UnknownCurrency(code.to_string()))
    }

    pub fn price(&self, code: &str) -> Result<f64, SwapError> {
        self.get(code).map(|record| record.price)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Codes in order of first appearance
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.currency.as_str())
    }

    pub fn records(&self) -> &[CurrencyRecord] {
        &self.records
    }

    pub fn first_code(&self) -> Option<&str> {
        self.records.first().map(|r| r.currency.as_str())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// How many feed entries replaced an earlier record with the same code
    pub fn duplicates_overwritten(&self) -> usize {
        self.duplicates_overwritten
    }
}
