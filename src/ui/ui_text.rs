/// All user-facing strings in one place
pub struct UiText {
    pub window_title: &'static str,
    pub card_title: &'static str,
    pub amount_label: &'static str,
    pub amount_hint: &'static str,
    pub from_label: &'static str,
    pub to_label: &'static str,
    pub exchange_arrow: &'static str,
    pub swap_button: &'static str,
    pub loading: &'static str,
    pub result_label: &'static str,
    pub source_prefix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Currency Swap",
    card_title: "Currency Swap",
    amount_label: "Amount",
    amount_hint: "0.00",
    from_label: "From Currency",
    to_label: "To Currency",
    exchange_arrow: "⇄",
    swap_button: "Swap",
    loading: "Loading prices…",
    result_label: "Result",
    source_prefix: "Prices from",
};
