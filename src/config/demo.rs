use {crate::domain::ColumnSet, std::time::Duration};

pub struct DemoResources {
    pub compact_json: &'static str,
    pub extended_json: &'static str,
}

pub struct DemoConfig {
    /// Simulated network latency of the mock source.
    pub latency: Duration,
    /// Chance that a mock fetch fails. Zero in normal runs.
    pub fail_rate: f64,
    /// How long a cached fetch result counts as fresh.
    pub stale_time: Duration,
    pub resources: DemoResources,
}

pub const DEMO: DemoConfig = DemoConfig {
    latency: Duration::from_millis(1000),
    fail_rate: 0.0,
    stale_time: Duration::from_secs(60),
    resources: DemoResources {
        compact_json: include_str!("../../assets/tokens.json"),
        extended_json: include_str!("../../assets/tokens_extended.json"),
    },
};

impl DemoConfig {
    pub fn dataset(&self, columns: ColumnSet) -> &'static str {
        match columns {
            ColumnSet::Compact => self.resources.compact_json,
            ColumnSet::Extended => self.resources.extended_json,
        }
    }
}
