use std::sync::LazyLock;

pub const ICON_SORT_ASC: &str = "⬆";
pub const ICON_SORT_DESC: &str = "⬇";
pub const ICON_SORT: &str = "↕";
pub const ICON_CLOSE: &str = "✖";
pub const ICON_REFRESH: &str = "🔄";
pub const ICON_PAUSE: &str = "⏸";
pub const ICON_PLAY: &str = "▶";
pub const ICON_WARNING: &str = "⚠";
pub const ICON_HELP: &str = "❓";

pub struct UiText {
    pub app_title: String,

    pub icon_sort_asc: String,
    pub icon_sort_desc: String,
    pub icon_sort: String,
    pub icon_close: String,
    pub icon_warning: String,

    // --- Toolbar ---
    pub tb_refresh: String,
    pub tb_pause: String,
    pub tb_resume: String,
    pub tb_help: String,
    pub tb_refresh_hover: String,
    pub tb_pause_hover: String,

    // --- Loading screen ---
    pub ls_title: String,
    pub ls_fetching: String,
    pub ls_failed: String,
    pub ls_retry: String,

    // --- Table ---
    pub table_empty: String,
    pub table_click_hint: String,
    pub table_clear_sort: String,

    // --- Detail window ---
    pub detail_title_suffix: String,
    pub detail_market: String,
    pub detail_launch: String,
    pub detail_price: String,
    pub detail_change: String,
    pub detail_tvl: String,
    pub detail_volume: String,
    pub detail_market_cap: String,
    pub detail_liquidity: String,
    pub detail_holders: String,
    pub detail_dev_holding: String,
    pub detail_age: String,
    pub detail_category: String,
    pub detail_id: String,

    // --- Status bar ---
    pub sb_tokens: String,
    pub sb_version: String,
    pub sb_updated: String,
    pub sb_live: String,
    pub sb_paused: String,
    pub sb_refreshing: String,
    pub sb_stopped: String,
    pub sb_last_tick: String,

    // --- Help ---
    pub help_title: String,
    pub help_shortcuts: &'static [(&'static str, &'static str)],
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Token Discovery".to_string(),

    icon_sort_asc: ICON_SORT_ASC.to_string(),
    icon_sort_desc: ICON_SORT_DESC.to_string(),
    icon_sort: ICON_SORT.to_string(),
    icon_close: ICON_CLOSE.to_string(),
    icon_warning: ICON_WARNING.to_string(),

    tb_refresh: format!("{} Refresh", ICON_REFRESH),
    tb_pause: format!("{} Pause", ICON_PAUSE),
    tb_resume: format!("{} Resume", ICON_PLAY),
    tb_help: format!("{} Help", ICON_HELP),
    tb_refresh_hover: "Fetch the token list again (R)".to_string(),
    tb_pause_hover: "Pause or resume simulated price updates (P)".to_string(),

    ls_title: "Loading tokens".to_string(),
    ls_fetching: "Fetching token list...".to_string(),
    ls_failed: "Could not load tokens:".to_string(),
    ls_retry: format!("{} Retry", ICON_REFRESH),

    table_empty: "No tokens in this category.".to_string(),
    table_click_hint: "Click a row for details".to_string(),
    table_clear_sort: format!("{} Clear sort (C)", ICON_CLOSE),

    detail_title_suffix: "details".to_string(),
    detail_market: "Market".to_string(),
    detail_launch: "Launch".to_string(),
    detail_price: "Price".to_string(),
    detail_change: "24h Change".to_string(),
    detail_tvl: "TVL".to_string(),
    detail_volume: "24h Volume".to_string(),
    detail_market_cap: "Market Cap".to_string(),
    detail_liquidity: "Liquidity".to_string(),
    detail_holders: "Holders".to_string(),
    detail_dev_holding: "Dev Holding".to_string(),
    detail_age: "Age".to_string(),
    detail_category: "Category".to_string(),
    detail_id: "Id".to_string(),

    sb_tokens: "Tokens".to_string(),
    sb_version: "Snapshot".to_string(),
    sb_updated: "Updated".to_string(),
    sb_live: "● LIVE".to_string(),
    sb_paused: "⏸ PAUSED".to_string(),
    sb_refreshing: "Refreshing...".to_string(),
    sb_stopped: "⏹ STOPPED".to_string(),
    sb_last_tick: "Last tick".to_string(),

    help_title: "Keyboard shortcuts".to_string(),
    help_shortcuts: &[
        ("1 / 2 / 3", "New Pairs / Final Stretch / Migrated"),
        ("R", "Refresh token list"),
        ("P", "Pause / resume price updates"),
        ("C", "Clear sort (also right-click a header)"),
        ("H", "Toggle this help"),
        ("Esc", "Close windows"),
    ],
});
