use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub text_subdued: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_stroke: Color32,
    pub price_up: Color32,
    pub price_down: Color32,
    pub symbol_accent: Color32,
    pub banner_fill: Color32,
    pub banner_stroke: Color32,
    pub banner_text: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub watchlist_columns: usize,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        text_subdued: Color32::DARK_GRAY,
        central_panel: Color32::from_rgb(32, 33, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        card: Color32::from_rgb(40, 41, 46),
        card_stroke: Color32::from_rgb(60, 62, 68),
        price_up: Color32::from_rgb(80, 210, 120),
        price_down: Color32::from_rgb(235, 90, 90),
        symbol_accent: Color32::from_rgb(100, 170, 255),
        banner_fill: Color32::from_rgb(58, 22, 22),
        banner_stroke: Color32::from_rgb(150, 55, 55),
        banner_text: Color32::from_rgb(240, 160, 160),
    },
    watchlist_columns: 3,
};

impl UiConfig {
    /// Frame for the header toolbar (standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for the status bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the dismissible error banner
    pub fn banner_frame(&self) -> Frame {
        Frame {
            fill: self.colors.banner_fill,
            stroke: Stroke::new(1.0, self.colors.banner_stroke),
            inner_margin: Margin::symmetric(10, 6),
            corner_radius: CornerRadius::same(4),
            ..Default::default()
        }
    }

    /// Frame for one watchlist card and for the detail card
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_stroke),
            inner_margin: Margin::same(10),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
