use {
    crate::{
        domain::{ColumnSet, SortDirection, SortKey, SortSpec, TokenRecord},
        ui::{FlashDirection, FlashTracker, UI_CONFIG, UI_TEXT, UiStyleExt, change_color},
        utils::{AppInstant, format_field},
    },
    eframe::egui::{Align, Button, Color32, FontId, Layout, RichText, Sense, Ui, Vec2},
    egui_extras::{Column, TableBuilder},
};

/// What the user asked for while the table was drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum TableAction {
    Sort(SortKey),
    ClearSort,
    Select(String),
}

fn header_label(key: SortKey, sort: Option<SortSpec>) -> (String, bool) {
    match sort {
        Some(spec) if spec.key == key => {
            let icon = match spec.direction {
                SortDirection::Ascending => &UI_TEXT.icon_sort_asc,
                SortDirection::Descending => &UI_TEXT.icon_sort_desc,
            };
            (format!("{} {}", key.label(), icon), true)
        }
        _ => (format!("{} {}", key.label(), UI_TEXT.icon_sort), false),
    }
}

fn flash_fill(direction: FlashDirection) -> Color32 {
    match direction {
        FlashDirection::Up => UI_CONFIG.colors.flash_up,
        FlashDirection::Down => UI_CONFIG.colors.flash_down,
    }
}

/// Round badge with the token's initial, standing in for the remote logo.
fn logo_badge(ui: &mut Ui, token: &TokenRecord) {
    let size = UI_CONFIG.table.logo_size;
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, UI_CONFIG.colors.skeleton);
    let initial = token.name.chars().next().unwrap_or('?').to_uppercase().to_string();
    painter.text(
        rect.center(),
        eframe::egui::Align2::CENTER_CENTER,
        initial,
        FontId::proportional(size * 0.55),
        Color32::WHITE,
    );
}

fn value_cell(ui: &mut Ui, key: SortKey, token: &TokenRecord) {
    let text = format_field(key, token);
    let rich = match key {
        SortKey::PriceChange24h => {
            RichText::new(text).color(change_color(token.price_change_24h))
        }
        SortKey::Price => RichText::new(text).strong().color(Color32::WHITE),
        _ => RichText::new(text).color(Color32::WHITE),
    };
    ui.label(rich);
}

pub fn render_token_table(
    ui: &mut Ui,
    rows: &[TokenRecord],
    columns: ColumnSet,
    sort: Option<SortSpec>,
    flashes: &FlashTracker,
    selected: Option<&str>,
    now: AppInstant,
) -> Option<TableAction> {
    let layout = &UI_CONFIG.table;
    let keys = columns.columns();
    let mut action = None;

    let mut builder = TableBuilder::new(ui)
        .id_salt(("token_table", columns))
        .striped(true)
        .resizable(false)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center));
    for key in keys {
        builder = match key {
            SortKey::Name => {
                builder.column(Column::initial(layout.name_column_width).at_least(140.0))
            }
            _ => builder.column(Column::initial(layout.value_column_width).at_least(70.0)),
        };
    }

    builder
        .header(layout.header_height, |mut header| {
            for &key in keys {
                header.col(|ui| {
                    let (text, active) = header_label(key, sort);
                    let idle = if active {
                        UI_CONFIG.colors.heading
                    } else {
                        UI_CONFIG.colors.text_subdued
                    };
                    let response =
                        ui.interactive_label(&text, false, idle, FontId::proportional(12.0));
                    if response.clicked() {
                        action = Some(TableAction::Sort(key));
                    }
                    response.context_menu(|ui| {
                        let clear = Button::new(UI_TEXT.table_clear_sort.as_str());
                        if ui.add_enabled(sort.is_some(), clear).clicked() {
                            action = Some(TableAction::ClearSort);
                            ui.close();
                        }
                    });
                });
            }
        })
        .body(|mut body| {
            for token in rows {
                body.row(layout.row_height, |mut row| {
                    row.set_selected(selected == Some(token.id.as_str()));
                    let flash = flashes.get(&token.id, now);

                    for &key in keys {
                        row.col(|ui| {
                            if let Some(direction) = flash {
                                ui.painter().rect_filled(ui.max_rect(), 0.0, flash_fill(direction));
                            }
                            if key == SortKey::Name {
                                logo_badge(ui, token);
                                ui.vertical(|ui| {
                                    ui.label(RichText::new(&token.name).strong().color(Color32::WHITE));
                                    ui.label_subdued(&token.slug);
                                });
                            } else {
                                value_cell(ui, key, token);
                            }
                        });
                    }

                    if row.response().clicked() {
                        action = Some(TableAction::Select(token.id.clone()));
                    }
                });
            }
        });

    if rows.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.label_subdued(&UI_TEXT.table_empty));
    }

    action
}

/// Grey placeholder rows shown while the first fetch is in flight.
pub fn render_skeleton_table(ui: &mut Ui, columns: ColumnSet) {
    let layout = &UI_CONFIG.table;
    let keys = columns.columns();

    let mut builder = TableBuilder::new(ui)
        .id_salt("token_table_skeleton")
        .striped(true)
        .resizable(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for key in keys {
        builder = match key {
            SortKey::Name => builder.column(Column::initial(layout.name_column_width)),
            _ => builder.column(Column::initial(layout.value_column_width)),
        };
    }

    builder
        .header(layout.header_height, |mut header| {
            for key in keys {
                header.col(|ui| {
                    ui.label_subdued(key.label());
                });
            }
        })
        .body(|body| {
            body.rows(layout.row_height, layout.skeleton_rows, |mut row| {
                for key in keys {
                    row.col(|ui| {
                        let width = match key {
                            SortKey::Name => layout.name_column_width * 0.6,
                            _ => layout.value_column_width * 0.6,
                        };
                        let (rect, _) =
                            ui.allocate_exact_size(Vec2::new(width, 12.0), Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, UI_CONFIG.colors.skeleton);
                    });
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_marks_active_sort() {
        let spec = Some(SortSpec::new(SortKey::Tvl, SortDirection::Descending));
        let (text, active) = header_label(SortKey::Tvl, spec);
        assert!(active);
        assert!(text.ends_with(&UI_TEXT.icon_sort_desc));

        let (text, active) = header_label(SortKey::Price, spec);
        assert!(!active);
        assert!(text.ends_with(&UI_TEXT.icon_sort));
    }
}
