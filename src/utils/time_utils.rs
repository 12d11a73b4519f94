use chrono::{DateTime, Local, Utc};

/// Monotonic clock used for frame-side deadlines (flash expiry, perf traces).
pub type AppInstant = web_time::Instant;

/// Token age in the table's shorthand: `45m`, `3h 10m`, `2d 4h`.
pub fn format_age_minutes(minutes: u32) -> String {
    let minutes = minutes as u64;
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        let m = minutes % 60;
        return if m > 0 {
            format!("{}h {}m", hours, m)
        } else {
            format!("{}h", hours)
        };
    }
    let days = hours / 24;
    let h = hours % 24;
    if h > 0 {
        format!("{}d {}h", days, h)
    } else {
        format!("{}d", days)
    }
}

/// Wall-clock time of a snapshot, for the status bar.
pub fn format_local_time(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%H:%M:%S").to_string()
}
