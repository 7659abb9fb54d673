use eframe::egui::{self, Button, ComboBox, Image, Key, TextEdit, Ui, Vec2};
use strum::IntoEnumIterator;

use crate::config::ICONS;
use crate::domain::{CurrencyTable, SelectionState, SwapSide, rate_line};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::icons::CurrencyIcon;
use crate::ui::styles::UiStyleExt;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// What the user did on the swap form this frame
#[derive(Debug, Clone, PartialEq)]
pub enum SwapFormEvent {
    AmountEdited(String),
    CurrencySelected(SwapSide, String),
    IconLoadFailed(SwapSide),
    Submit,
}

/// The amount field, the two pickers with icons, the rate line and the Swap button
pub struct SwapFormPanel<'a> {
    table: &'a CurrencyTable,
    selection: &'a SelectionState,
    from_icon: &'a CurrencyIcon,
    to_icon: &'a CurrencyIcon,
    amount_input: String,
    loading: bool,
}

impl<'a> SwapFormPanel<'a> {
    pub fn new(
        table: &'a CurrencyTable,
        selection: &'a SelectionState,
        icons: (&'a CurrencyIcon, &'a CurrencyIcon),
        amount_input: &str,
        loading: bool,
    ) -> Self {
        Self {
            table,
            selection,
            from_icon: icons.0,
            to_icon: icons.1,
            amount_input: amount_input.to_string(),
            loading,
        }
    }

    fn render_amount(&mut self, ui: &mut Ui, events: &mut Vec<SwapFormEvent>) {
        ui.label_subdued(UI_TEXT.amount_label);
        let response = ui.add(
            TextEdit::singleline(&mut self.amount_input)
                .hint_text(UI_TEXT.amount_hint)
                .desired_width(f32::INFINITY),
        );

        if response.changed() {
            events.push(SwapFormEvent::AmountEdited(self.amount_input.clone()));
        }
        // Enter submits, like a form
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            events.push(SwapFormEvent::Submit);
        }
    }

    fn render_picker(&self, ui: &mut Ui, side: SwapSide, events: &mut Vec<SwapFormEvent>) {
        let (label, icon) = match side {
            SwapSide::From => (UI_TEXT.from_label, self.from_icon),
            SwapSide::To => (UI_TEXT.to_label, self.to_icon),
        };

        ui.vertical(|ui| {
            ui.label_subdued(label);
            ui.horizontal(|ui| {
                let image = Image::new(icon.uri()).fit_to_exact_size(Vec2::splat(ICONS.size));
                if image
                    .load_for_size(ui.ctx(), Vec2::splat(ICONS.size))
                    .is_err()
                {
                    events.push(SwapFormEvent::IconLoadFailed(side));
                }
                ui.add(image);

                let current = self.selection.code(side);
                let mut chosen = current.to_string();
                ComboBox::from_id_salt(side.to_string())
                    .selected_text(current)
                    .width(UI_CONFIG.picker_width)
                    .show_ui(ui, |ui| {
                        for code in self.table.codes() {
                            ui.selectable_value(&mut chosen, code.to_string(), code);
                        }
                    });

                if chosen != current {
                    events.push(SwapFormEvent::CurrencySelected(side, chosen));
                }
            });
        });
    }
}

impl Panel for SwapFormPanel<'_> {
    type Event = SwapFormEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<SwapFormEvent> {
        let mut events = Vec::new();

        self.render_amount(ui, &mut events);
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            for side in SwapSide::iter() {
                self.render_picker(ui, side, &mut events);
                if side == SwapSide::From {
                    ui.add_space(8.0);
                    ui.label(egui::RichText::new(UI_TEXT.exchange_arrow).size(22.0));
                    ui.add_space(8.0);
                }
            }
        });

        ui.add_space(8.0);
        ui.label(rate_line(self.table, self.selection));
        ui.add_space(8.0);

        let button_size = Vec2::new(ui.available_width(), 32.0);
        let swap = ui.add_enabled(
            !self.loading,
            Button::new(UI_TEXT.swap_button).min_size(button_size),
        );
        if swap.clicked() {
            events.push(SwapFormEvent::Submit);
        }

        events
    }
}
