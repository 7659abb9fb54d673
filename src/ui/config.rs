use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub card: Color32,
    pub result: Color32,
    pub error: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Width of the swap card (points)
    pub card_width: f32,
    /// Width of each currency picker (points)
    pub picker_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(20, 24, 38),
        card: Color32::from_rgb(36, 42, 64),
        result: Color32::from_rgb(130, 200, 140),
        error: Color32::from_rgb(255, 100, 100),
    },
    card_width: 420.0,
    picker_width: 140.0,
};
