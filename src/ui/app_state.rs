use crate::domain::{SwapError, SwapSide, convert, parse_amount};
use crate::ui::app::{AppError, CurrencySwapApp};
use crate::ui::ui_panels::SwapFormEvent;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl CurrencySwapApp {
    pub(super) fn handle_form_event(&mut self, event: SwapFormEvent) {
        match event {
            SwapFormEvent::AmountEdited(text) => self.amount_input = text,
            SwapFormEvent::CurrencySelected(side, code) => self.handle_currency_selection(side, &code),
            SwapFormEvent::IconLoadFailed(side) => self.handle_icon_failure(side),
            SwapFormEvent::Submit => self.submit_swap(),
        }
    }

    pub(super) fn handle_currency_selection(&mut self, side: SwapSide, code: &str) {
        if self.selection.code(side) == code {
            return;
        }

        match self.selection.select(&self.table, side, code) {
            Ok(()) => {
                self.icon_mut(side).set_code(code);
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!("[picker] {} currency set to {}", side, code);
                }
            }
            Err(e) => self.last_error = Some(AppError::Swap(e)),
        }
    }

    fn handle_icon_failure(&mut self, side: SwapSide) {
        let switched = self.icon_mut(side).on_load_failed();
        #[cfg(debug_assertions)]
        if switched && DEBUG_FLAGS.print_icon_fallbacks {
            log::info!("[icon] {} icon fell back to placeholder", side);
        }
        #[cfg(not(debug_assertions))]
        let _ = switched;
    }

    /// Runs the conversion for the current form state. On failure the previous
    /// result stays on screen and the error is shown instead.
    pub(super) fn submit_swap(&mut self) {
        match self.compute_swap() {
            Ok(value) => {
                self.result = value;
                self.last_error = None;
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_ui_interactions {
                    log::info!(
                        "[swap] {} {} -> {} {}",
                        self.amount_input.trim(),
                        self.selection.from_currency,
                        value,
                        self.selection.to_currency
                    );
                }
            }
            Err(e) => {
                log::warn!("Swap rejected: {}", e);
                self.last_error = Some(e.into());
            }
        }
    }

    fn compute_swap(&self) -> Result<f64, SwapError> {
        if self.loading || self.table.is_empty() {
            return Err(SwapError::NotLoaded);
        }
        let amount = parse_amount(&self.amount_input)?;
        convert(
            &self.table,
            amount,
            &self.selection.from_currency,
            &self.selection.to_currency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{LoadOptions, LoadedCurrencies};
    use crate::domain::{CurrencyRecord, CurrencyTable, SelectionState};
    use crate::ui::app_async::AsyncLoadResult;
    use crate::ui::icons::IconSource;

    fn loaded_app() -> CurrencySwapApp {
        let mut app = CurrencySwapApp::new_with_initial_state(LoadOptions::default(), false);
        let table = CurrencyTable::from_records(vec![
            CurrencyRecord::new("USD", "2023-08-29T07:10:30.000Z", 1.0),
            CurrencyRecord::new("EUR", "2023-08-29T07:10:30.000Z", 0.9),
        ]);
        let selection = SelectionState::initial_for(&table).unwrap();
        app.apply_load_outcome(AsyncLoadResult::ready(Ok(LoadedCurrencies {
            table,
            selection,
            signature: "Test Feed",
        })));
        app
    }

    #[test]
    fn starts_loading_with_zero_result() {
        let app = CurrencySwapApp::new_with_initial_state(LoadOptions::default(), false);
        assert!(app.is_loading());
        assert_eq!(app.result, 0.0);
        assert!(app.selection.is_empty());
    }

    #[test]
    fn submit_before_load_is_rejected() {
        let mut app = CurrencySwapApp::new_with_initial_state(LoadOptions::default(), false);
        app.handle_form_event(SwapFormEvent::AmountEdited("10".to_string()));
        app.handle_form_event(SwapFormEvent::Submit);

        assert_eq!(app.result, 0.0);
        assert!(matches!(
            app.last_error,
            Some(AppError::Swap(SwapError::NotLoaded))
        ));
    }

    #[test]
    fn load_sets_defaults_and_icons() {
        let app = loaded_app();
        assert!(!app.is_loading());
        assert_eq!(app.selection.from_currency, "USD");
        assert_eq!(app.selection.to_currency, "USD");
        assert_eq!(app.from_icon.code(), "USD");
        assert_eq!(app.source_signature, Some("Test Feed"));
    }

    #[test]
    fn swap_converts_selected_pair() {
        let mut app = loaded_app();
        app.handle_form_event(SwapFormEvent::AmountEdited("100".to_string()));
        app.handle_form_event(SwapFormEvent::CurrencySelected(SwapSide::To, "EUR".to_string()));

        // Result only changes on submit
        assert_eq!(app.result, 0.0);

        app.handle_form_event(SwapFormEvent::Submit);
        assert!((app.result - 90.0).abs() < 1e-9);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn invalid_amount_keeps_previous_result() {
        let mut app = loaded_app();
        app.handle_form_event(SwapFormEvent::AmountEdited("5".to_string()));
        app.handle_form_event(SwapFormEvent::Submit);
        assert_eq!(app.result, 5.0);

        app.handle_form_event(SwapFormEvent::AmountEdited("".to_string()));
        app.handle_form_event(SwapFormEvent::Submit);
        assert_eq!(app.result, 5.0);
        assert!(matches!(
            app.last_error,
            Some(AppError::Swap(SwapError::InvalidAmount(_)))
        ));
    }

    #[test]
    fn unknown_code_selection_is_rejected() {
        let mut app = loaded_app();
        app.handle_currency_selection(SwapSide::From, "XYZ");

        assert_eq!(app.selection.from_currency, "USD");
        assert!(matches!(
            app.last_error,
            Some(AppError::Swap(SwapError::UnknownCurrency(_)))
        ));
    }

    #[test]
    fn icon_failure_switches_only_that_side() {
        let mut app = loaded_app();
        app.handle_form_event(SwapFormEvent::IconLoadFailed(SwapSide::From));

        assert_eq!(app.from_icon.source(), IconSource::Fallback);
        assert_eq!(app.to_icon.source(), IconSource::Remote);

        app.handle_currency_selection(SwapSide::From, "EUR");
        assert_eq!(app.from_icon.source(), IconSource::Remote);
    }

    #[test]
    fn failed_load_stops_loading_and_reports() {
        let mut app = CurrencySwapApp::new_with_initial_state(LoadOptions::default(), false);
        app.apply_load_outcome(AsyncLoadResult::ready(Err(AppError::LoadFailed(
            "All currency data sources failed".to_string(),
        ))));

        assert!(!app.is_loading());
        assert!(app.table.is_empty());
        assert!(matches!(app.last_error, Some(AppError::LoadFailed(_))));
    }
}
