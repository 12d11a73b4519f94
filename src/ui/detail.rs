use {
    crate::{
        domain::{ColumnSet, SortKey, TokenRecord},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, change_color},
        utils::{format_compact, format_field, format_percent, format_price},
    },
    eframe::egui::{Color32, Context, Grid, RichText, Window},
};

/// Detail window for the selected token. `token` is looked up fresh each
/// frame so the values follow the ticker. Returns false once the window
/// should be closed (close button, or the token is gone).
pub fn render_detail_window(ctx: &Context, token: Option<&TokenRecord>, columns: ColumnSet) -> bool {
    let Some(token) = token else {
        return false;
    };

    let mut open = true;
    Window::new(format!("{} {}", token.name, UI_TEXT.detail_title_suffix))
        .id(eframe::egui::Id::new("token_detail_window"))
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .default_width(320.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(&token.name).strong().color(Color32::WHITE));
                ui.label_subdued(format!("/{}", token.slug));
            });
            ui.metric(
                &UI_TEXT.detail_category,
                token.category.name(),
                UI_CONFIG.colors.label,
            );
            ui.separator();

            ui.label_subheader(&UI_TEXT.detail_market);
            Grid::new("detail_market_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    row(ui, &UI_TEXT.detail_price, RichText::new(format_price(token.price)).strong());
                    row(
                        ui,
                        &UI_TEXT.detail_change,
                        RichText::new(format_percent(token.price_change_24h))
                            .color(change_color(token.price_change_24h)),
                    );
                    row(ui, &UI_TEXT.detail_tvl, RichText::new(format_compact(token.tvl)));
                    row(
                        ui,
                        &UI_TEXT.detail_volume,
                        RichText::new(format_compact(token.volume_24h)),
                    );
                });

            if columns == ColumnSet::Extended {
                ui.label_subheader(&UI_TEXT.detail_launch);
                Grid::new("detail_launch_grid")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .show(ui, |ui| {
                        for (label, key) in [
                            (&UI_TEXT.detail_market_cap, SortKey::MarketCap),
                            (&UI_TEXT.detail_liquidity, SortKey::Liquidity),
                            (&UI_TEXT.detail_holders, SortKey::Holders),
                            (&UI_TEXT.detail_dev_holding, SortKey::DevHoldingPct),
                            (&UI_TEXT.detail_age, SortKey::AgeMinutes),
                        ] {
                            row(ui, label, RichText::new(format_field(key, token)));
                        }
                    });
            }

            ui.add_space(6.0);
            ui.label_subdued(format!("{}: {}", UI_TEXT.detail_id, token.id));
        });
    open
}

fn row(ui: &mut eframe::egui::Ui, label: &str, value: RichText) {
    ui.label_subdued(label);
    ui.label(value);
    ui.end_row();
}
