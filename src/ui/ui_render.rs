use {
    crate::{
        app::App,
        models::UiAction,
        ui::{
            TableAction, UI_CONFIG, UI_TEXT, UiStyleExt, category_counts, change_color,
            render_category_tabs, render_detail_window, render_token_table,
        },
        utils::{AppInstant, format_local_time, format_percent, format_price},
    },
    eframe::egui::{
        Align, Button, CentralPanel, Context, Frame, Grid, Layout, Margin, RichText, ScrollArea,
        TopBottomPanel, Ui, Window,
    },
};

impl App {
    pub(crate) fn render_top_panel(&mut self, ctx: &Context) {
        let counts = self
            .snapshot
            .as_ref()
            .map(|s| category_counts(&s.tokens))
            .unwrap_or_default();

        TopBottomPanel::top("top_toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .min_height(30.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new(&UI_TEXT.app_title)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.separator();

                    if let Some(category) =
                        render_category_tabs(ui, self.store.active_category(), &counts)
                    {
                        self.dispatch(UiAction::SelectCategory(category));
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.tb_help.as_str()).clicked() {
                            self.show_help = !self.show_help;
                        }
                        let pause_text = if self.paused {
                            &UI_TEXT.tb_resume
                        } else {
                            &UI_TEXT.tb_pause
                        };
                        if ui
                            .button(pause_text.as_str())
                            .on_hover_text(UI_TEXT.tb_pause_hover.as_str())
                            .clicked()
                        {
                            self.toggle_pause();
                        }
                        let refresh = ui.add_enabled(
                            !self.is_fetching(),
                            Button::new(UI_TEXT.tb_refresh.as_str()),
                        );
                        if refresh.on_hover_text(UI_TEXT.tb_refresh_hover.as_str()).clicked() {
                            self.start_fetch(true);
                        }
                    });
                });
            });
    }

    pub(crate) fn render_ticker_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("ticker_panel")
            .frame(Frame::NONE)
            .min_height(crate::config::TICKER.tape.height)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(id) = self.tape.render(ui) {
                    self.select_token_by_id(&id);
                }
            });
    }

    pub(crate) fn render_status_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.render_status_mode(ui);
                    ui.separator();
                    self.render_status_snapshot(ui);
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued(format!(
                            "{} | {}",
                            self.settings.columns, UI_TEXT.table_click_hint
                        ));
                    });
                });
            });
    }

    fn render_status_mode(&self, ui: &mut Ui) {
        if self.ticker_stopped() {
            ui.label(
                RichText::new(&UI_TEXT.sb_stopped)
                    .small()
                    .color(UI_CONFIG.colors.error),
            );
        } else if self.paused {
            ui.label(
                RichText::new(&UI_TEXT.sb_paused)
                    .small()
                    .color(UI_CONFIG.colors.heading),
            );
        } else {
            ui.label(
                RichText::new(&UI_TEXT.sb_live)
                    .small()
                    .color(UI_CONFIG.colors.positive),
            );
        }
        if self.is_fetching() {
            ui.spinner();
            ui.label_subdued(&UI_TEXT.sb_refreshing);
        }
    }

    fn render_status_snapshot(&self, ui: &mut Ui) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        ui.metric(
            &UI_TEXT.sb_tokens,
            &snapshot.tokens.len().to_string(),
            UI_CONFIG.colors.label,
        );
        ui.metric(
            &UI_TEXT.sb_version,
            &format!("#{}", snapshot.version),
            UI_CONFIG.colors.label,
        );
        ui.metric(
            &UI_TEXT.sb_updated,
            &format_local_time(snapshot.published_at),
            UI_CONFIG.colors.label,
        );

        let Some(change) = &snapshot.last_change else {
            return;
        };
        let name = snapshot
            .find(&change.token_id)
            .map_or(change.token_id.as_str(), |t| t.name.as_str());
        let pct = if change.old_price != 0.0 {
            (change.new_price - change.old_price) / change.old_price * 100.0
        } else {
            0.0
        };
        ui.metric(
            &UI_TEXT.sb_last_tick,
            &format!(
                "{} {} ({})",
                name,
                format_price(change.new_price),
                format_percent(pct)
            ),
            change_color(pct),
        );
    }

    fn render_error_banner(&mut self, ui: &mut Ui) {
        let Some(err) = self.last_error.clone() else {
            return;
        };
        Frame::NONE
            .fill(UI_CONFIG.colors.flash_down)
            .inner_margin(Margin::symmetric(8, 6))
            .corner_radius(4.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("{} {}", UI_TEXT.icon_warning, err))
                            .color(UI_CONFIG.colors.error),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button(UI_TEXT.icon_close.as_str()).clicked() {
                            self.last_error = None;
                        }
                        if ui.button(UI_TEXT.ls_retry.as_str()).clicked() {
                            self.start_fetch(true);
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    pub(crate) fn render_central_panel(&mut self, ctx: &Context, now: AppInstant) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                self.render_error_banner(ui);

                let category = self.store.active_category();
                ui.label_subdued(category.description());
                ui.add_space(6.0);

                let action = ScrollArea::horizontal()
                    .show(ui, |ui| {
                        render_token_table(
                            ui,
                            self.view.rows(),
                            self.settings.columns,
                            self.store.sort(),
                            &self.flashes,
                            self.selected.as_deref(),
                            now,
                        )
                    })
                    .inner;

                match action {
                    Some(TableAction::Sort(key)) => {
                        self.dispatch(UiAction::RequestSort(key));
                    }
                    Some(TableAction::ClearSort) => {
                        self.dispatch(UiAction::ClearSort);
                    }
                    Some(TableAction::Select(id)) => self.select_token_by_id(&id),
                    None => {}
                }
            });
    }

    /// Detail window, following the selected token through new snapshots.
    pub(crate) fn render_detail(&mut self, ctx: &Context) {
        let Some(id) = self.selected.clone() else {
            return;
        };
        let token = self.snapshot.as_ref().and_then(|s| s.find(&id));
        if !render_detail_window(ctx, token, self.settings.columns) {
            self.close_detail();
        }
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(crate) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title.as_str())
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                Grid::new("general_shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, UI_TEXT.help_shortcuts);
                    });
            });
    }
}
