use crate::app::{App, PhaseView};
use eframe::egui::Context;

#[derive(Clone, Copy)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

impl AppState {
    pub(crate) fn tick(self, app: &mut App, ctx: &Context) -> AppState {
        match self {
            AppState::Bootstrapping(mut s) => s.tick(app, ctx),
            AppState::Running(mut s) => s.tick(app, ctx),
        }
    }
}

/// Loading screen state. `error` is set when the last fetch failed and the
/// screen is waiting for a retry.
#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    pub(crate) error: Option<String>,
}
