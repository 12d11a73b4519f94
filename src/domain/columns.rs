use {
    crate::domain::SortKey,
    clap::ValueEnum,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

const COMPACT_COLUMNS: &[SortKey] = &[
    SortKey::Name,
    SortKey::Price,
    SortKey::PriceChange24h,
    SortKey::Tvl,
    SortKey::Volume24h,
];

const EXTENDED_COLUMNS: &[SortKey] = &[
    SortKey::Name,
    SortKey::Price,
    SortKey::PriceChange24h,
    SortKey::Tvl,
    SortKey::Volume24h,
    SortKey::MarketCap,
    SortKey::Liquidity,
    SortKey::Holders,
    SortKey::DevHoldingPct,
    SortKey::AgeMinutes,
];

/// Which table layout (and matching mock dataset) the view runs with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    ValueEnum,
    Default,
)]
pub enum ColumnSet {
    #[default]
    #[strum(to_string = "Compact")]
    Compact,
    #[strum(to_string = "Extended")]
    Extended,
}

impl ColumnSet {
    /// Columns in display order. Every column is sortable.
    pub fn columns(&self) -> &'static [SortKey] {
        match self {
            ColumnSet::Compact => COMPACT_COLUMNS,
            ColumnSet::Extended => EXTENDED_COLUMNS,
        }
    }

    pub fn contains(&self, key: SortKey) -> bool {
        self.columns().contains(&key)
    }
}
