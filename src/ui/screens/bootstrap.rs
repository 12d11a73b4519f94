use {
    crate::{
        app::BootstrapState,
        domain::ColumnSet,
        ui::{UI_CONFIG, UI_TEXT, render_skeleton_table},
    },
    eframe::egui::{CentralPanel, Context, RichText},
};

/// What the loading screen asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BootstrapAction {
    None,
    Retry,
}

pub(crate) fn render_bootstrap(
    ctx: &Context,
    state: &BootstrapState,
    columns: ColumnSet,
) -> BootstrapAction {
    let mut action = BootstrapAction::None;

    CentralPanel::default()
        .frame(UI_CONFIG.central_panel_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(
                    RichText::new(&UI_TEXT.ls_title)
                        .size(24.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.add_space(10.0);

                match &state.error {
                    None => {
                        ui.horizontal(|ui| {
                            ui.spinner();
                            ui.label(
                                RichText::new(&UI_TEXT.ls_fetching)
                                    .italics()
                                    .color(UI_CONFIG.colors.label),
                            );
                        });
                    }
                    Some(err) => {
                        ui.label(
                            RichText::new(format!("{} {}", UI_TEXT.icon_warning, UI_TEXT.ls_failed))
                                .strong()
                                .color(UI_CONFIG.colors.error),
                        );
                        ui.label(RichText::new(err).color(UI_CONFIG.colors.error));
                        ui.add_space(6.0);
                        if ui.button(UI_TEXT.ls_retry.as_str()).clicked() {
                            action = BootstrapAction::Retry;
                        }
                    }
                }
                ui.add_space(20.0);
            });

            render_skeleton_table(ui, columns);
        });

    action
}
