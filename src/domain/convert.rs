use crate::domain::error::SwapError;
use crate::domain::table::CurrencyTable;

/// Converts `amount` of `from_code` into `to_code`: `amount * to.price / from.price`.
///
/// Converting a code into itself returns `amount` untouched. No rounding and
/// no zero-price guard: a zero `from` price yields inf/NaN.
pub fn convert(
    table: &CurrencyTable,
    amount: f64,
    from_code: &str,
    to_code: &str,
) -> Result<f64, SwapError> {
    if table.is_empty() {
        return Err(SwapError::NotLoaded);
    }

    let from_price = table.price(from_code)?;
    let to_price = table.price(to_code)?;

    if from_code == to_code {
        return Ok(amount);
    }

    Ok(amount * to_price / from_price)
}

/// Parses the amount field. Required, any finite number.
pub fn parse_amount(input: &str) -> Result<f64, SwapError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SwapError::InvalidAmount(input.to_string()));
    }

    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(SwapError::InvalidAmount(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOADER;
    use crate::domain::currency::CurrencyRecord;

    fn usd_eur() -> CurrencyTable {
        CurrencyTable::from_records(vec![
            CurrencyRecord::new("USD", "2023-08-29T07:10:30.000Z", 1.0),
            CurrencyRecord::new("EUR", "2023-08-29T07:10:30.000Z", 0.9),
        ])
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn usd_eur_scenario() {
        let table = usd_eur();
        assert_eq!(convert(&table, 100.0, "USD", "EUR").unwrap(), 90.0);
        assert_eq!(convert(&table, 90.0, "EUR", "USD").unwrap(), 100.0);
    }

    #[test]
    fn same_code_returns_amount_exactly() {
        let table = CurrencyTable::from_records(vec![
            CurrencyRecord::new("ETH", "", 1645.9337373737374),
            CurrencyRecord::new("IRIS", "", 0.0177095593220339),
        ]);
        for amount in [0.0, 1.0, 123.456, -42.0, 1e12] {
            assert_eq!(convert(&table, amount, "ETH", "ETH").unwrap(), amount);
            assert_eq!(convert(&table, amount, "IRIS", "IRIS").unwrap(), amount);
        }
    }

    #[test]
    fn scales_linearly_with_amount() {
        let table = usd_eur();
        let base = convert(&table, 37.5, "EUR", "USD").unwrap();
        for k in [0.5, 2.0, 10.0, 1234.0] {
            let scaled = convert(&table, k * 37.5, "EUR", "USD").unwrap();
            assert!(approx_eq(scaled, k * base));
        }
    }

    #[test]
    fn matches_cross_rate_for_every_pair() {
        let table = CurrencyTable::from_records(vec![
            CurrencyRecord::new("USD", "", 1.0),
            CurrencyRecord::new("EUR", "", 0.9),
            CurrencyRecord::new("WBTC", "", 26002.82202020202),
        ]);
        let codes: Vec<&str> = table.codes().collect();
        for a in &codes {
            for b in codes.iter().filter(|b| *b != a) {
                let expected = 250.0 * table.price(b).unwrap() / table.price(a).unwrap();
                assert_eq!(convert(&table, 250.0, a, b).unwrap(), expected);
            }
        }
    }

    #[test]
    fn embedded_feed_uses_amount_times_to_over_from() {
        let records: Vec<CurrencyRecord> = serde_json::from_str(LOADER.embedded_dataset).unwrap();
        let table = CurrencyTable::from_records(records);
        let codes: Vec<&str> = table.codes().collect();

        assert_eq!(
            convert(&table, 100.0, "BLUR", "bNEO").unwrap(),
            100.0 * table.price("bNEO").unwrap() / table.price("BLUR").unwrap()
        );
        for a in &codes {
            for b in codes.iter().filter(|b| *b != a) {
                let to = table.price(b).unwrap();
                let from = table.price(a).unwrap();
                assert_eq!(convert(&table, 250.0, a, b).unwrap(), 250.0 * to / from);
            }
        }
    }

    #[test]
    fn unknown_code_is_lookup_error() {
        let table = usd_eur();
        assert_eq!(
            convert(&table, 50.0, "USD", "XYZ"),
            Err(SwapError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(
            convert(&table, 50.0, "ABC", "XYZ"),
            Err(SwapError::UnknownCurrency("ABC".to_string()))
        );
    }

    #[test]
    fn empty_table_is_not_loaded() {
        let table = CurrencyTable::default();
        assert_eq!(convert(&table, 1.0, "USD", "EUR"), Err(SwapError::NotLoaded));
    }

    #[test]
    fn zero_price_is_not_guarded() {
        let table = CurrencyTable::from_records(vec![
            CurrencyRecord::new("NIL", "", 0.0),
            CurrencyRecord::new("USD", "", 1.0),
        ]);
        assert!(convert(&table, 1.0, "NIL", "USD").unwrap().is_infinite());
        assert!(convert(&table, 0.0, "NIL", "USD").unwrap().is_nan());
    }

    #[test]
    fn parse_amount_accepts_numbers() {
        assert_eq!(parse_amount("100"), Ok(100.0));
        assert_eq!(parse_amount("  0.25 "), Ok(0.25));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
        assert_eq!(parse_amount("1e3"), Ok(1000.0));
    }

    #[test]
    fn parse_amount_rejects_blank_and_garbage() {
        assert!(matches!(parse_amount(""), Err(SwapError::InvalidAmount(_))));
        assert!(matches!(parse_amount("   "), Err(SwapError::InvalidAmount(_))));
        assert!(matches!(parse_amount("ten"), Err(SwapError::InvalidAmount(_))));
        assert!(matches!(parse_amount("inf"), Err(SwapError::InvalidAmount(_))));
        assert!(matches!(parse_amount("NaN"), Err(SwapError::InvalidAmount(_))));
    }
}
