use eframe::egui::Context;

use crate::app::{App, state::AppState};

/// One screen of the app. Each frame the active phase draws itself and
/// returns the phase for the next frame.
pub(crate) trait PhaseView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState;
}
