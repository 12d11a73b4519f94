use {
    crate::{
        domain::{CATEGORIES, Category, TokenRecord},
        ui::{UI_CONFIG, UiStyleExt},
    },
    eframe::egui::{FontId, Ui},
    itertools::Itertools,
    std::collections::HashMap,
};

/// Rows per category in the full list.
pub fn category_counts(tokens: &[TokenRecord]) -> HashMap<Category, usize> {
    tokens.iter().map(|t| t.category).counts()
}

/// Category tab strip. Returns the clicked category, if any.
pub fn render_category_tabs(
    ui: &mut Ui,
    active: Category,
    counts: &HashMap<Category, usize>,
) -> Option<Category> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for (idx, info) in CATEGORIES.iter().enumerate() {
            let count = counts.get(&info.id).copied().unwrap_or(0);
            let text = format!("{}  {}", info.name, count);
            let response = ui
                .interactive_label(
                    &text,
                    info.id == active,
                    UI_CONFIG.colors.label,
                    FontId::proportional(15.0),
                )
                .on_hover_text(format!("{} ({})", info.description, idx + 1));
            if response.clicked() {
                clicked = Some(info.id);
            }
        }
    });
    clicked
}
