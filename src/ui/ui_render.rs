use eframe::egui::{self, Align, CentralPanel, Frame, Layout, Margin, Spinner};

use crate::ui::app::CurrencySwapApp;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{Panel, SwapFormPanel};
use crate::ui::utils::spaced_separator;
use crate::utils::format_number;

impl CurrencySwapApp {
    pub(super) fn render_central_panel(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.add_space(40.0);
                Frame::window(ui.style())
                    .fill(UI_CONFIG.colors.card)
                    .inner_margin(Margin::same(20))
                    .show(ui, |ui| {
                        ui.set_width(UI_CONFIG.card_width);
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            self.render_swap_card(ui);
                        });
                    });
            });
        });
    }

    fn render_swap_card(&mut self, ui: &mut egui::Ui) {
        ui.label_header(UI_TEXT.card_title);
        ui.add_space(10.0);

        if self.is_loading() {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label_subdued(UI_TEXT.loading);
            });
            ui.add_space(6.0);
        }

        let events = {
            let mut panel = SwapFormPanel::new(
                &self.table,
                &self.selection,
                (&self.from_icon, &self.to_icon),
                &self.amount_input,
                self.is_loading(),
            );
            panel.render(ui)
        };
        for event in events {
            self.handle_form_event(event);
        }

        spaced_separator(ui);

        ui.label_subheader(UI_TEXT.result_label);
        ui.label_result(format_number(self.result));

        if let Some(error) = &self.last_error {
            ui.add_space(6.0);
            ui.label_error(error.to_string());
        }

        if let Some(signature) = self.source_signature {
            ui.add_space(6.0);
            ui.label_subdued(format!("{} {}", UI_TEXT.source_prefix, signature));
        }
    }
}
