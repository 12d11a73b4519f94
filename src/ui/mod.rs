mod detail;
mod flash;
mod screens;
mod styles;
mod table;
mod tabs;
mod ticker;
mod ui_config;
mod ui_render;
mod ui_text;
mod utils;

pub(crate) use detail::render_detail_window;
pub use flash::{FlashDirection, FlashTracker};
pub(crate) use screens::{BootstrapAction, render_bootstrap};
pub(crate) use styles::{UiStyleExt, change_color};
pub(crate) use table::{TableAction, render_skeleton_table, render_token_table};
pub(crate) use tabs::{category_counts, render_category_tabs};
pub(crate) use ticker::TapeState;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
pub(crate) use utils::setup_custom_visuals;
