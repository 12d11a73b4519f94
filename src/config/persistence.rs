//! Persistence of UI state between sessions.

pub struct AppPersistenceConfig {
    /// eframe storage key for the table state (category + sort).
    pub store_key: &'static str,
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        store_key: "token_discovery_ui_store",
        state_path: ".token_table_state.json",
    },
};
