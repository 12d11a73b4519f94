use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub text_subdued: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub flash_up: Color32,
    pub flash_down: Color32,
    pub skeleton: Color32,
    pub error: Color32,
}

/// Table geometry.
#[derive(Clone, Copy, Default)]
pub struct TableLayout {
    pub header_height: f32,
    pub row_height: f32,
    pub name_column_width: f32,
    pub value_column_width: f32,
    pub logo_size: f32,
    /// Placeholder rows shown while the first fetch is in flight.
    pub skeleton_rows: usize,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub table: TableLayout,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::YELLOW,
        subsection_heading: Color32::ORANGE,
        central_panel: Color32::from_rgb(14, 14, 18),
        side_panel: Color32::from_rgb(25, 25, 25),
        text_subdued: Color32::from_rgb(140, 140, 150),
        positive: Color32::from_rgb(60, 200, 110),
        negative: Color32::from_rgb(230, 80, 80),
        flash_up: Color32::from_rgba_premultiplied(20, 70, 35, 160),
        flash_down: Color32::from_rgba_premultiplied(80, 20, 20, 160),
        skeleton: Color32::from_rgb(40, 40, 46),
        error: Color32::from_rgb(240, 90, 90),
    },
    table: TableLayout {
        header_height: 24.0,
        row_height: 30.0,
        name_column_width: 200.0,
        value_column_width: 110.0,
        logo_size: 20.0,
        skeleton_rows: 5,
    },
};

impl UiConfig {
    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame for Bottom Status bar (Tighter vertical padding)
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
}
