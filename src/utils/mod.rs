mod format;
mod perf;
mod time_utils;

pub use format::{
    format_change_cell, format_compact, format_count, format_field, format_percent, format_price,
};
pub use time_utils::{AppInstant, format_age_minutes, format_local_time};
