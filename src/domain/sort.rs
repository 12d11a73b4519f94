use {
    crate::domain::TokenRecord,
    serde::{Deserialize, Serialize},
    std::cmp::Ordering,
    strum_macros::{EnumIter, EnumString},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Orderable token fields. Parses from the wire names (`priceChange24h`) and
/// their snake_case spellings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumString,
)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "priceChange24h", serialize = "price_change_24h")]
    PriceChange24h,
    #[strum(serialize = "tvl")]
    Tvl,
    #[strum(serialize = "volume24h", serialize = "volume_24h")]
    Volume24h,
    #[strum(serialize = "marketCap", serialize = "market_cap")]
    MarketCap,
    #[strum(serialize = "liquidity")]
    Liquidity,
    #[strum(serialize = "holders")]
    Holders,
    #[strum(serialize = "devHoldingPct", serialize = "dev_holding_pct")]
    DevHoldingPct,
    #[strum(serialize = "ageMinutes", serialize = "age_minutes", serialize = "age")]
    AgeMinutes,
}

impl SortKey {
    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Token",
            SortKey::Price => "Price",
            SortKey::PriceChange24h => "24h %",
            SortKey::Tvl => "TVL",
            SortKey::Volume24h => "24h Volume",
            SortKey::MarketCap => "Market Cap",
            SortKey::Liquidity => "Liquidity",
            SortKey::Holders => "Holders",
            SortKey::DevHoldingPct => "Dev %",
            SortKey::AgeMinutes => "Age",
        }
    }

    fn numeric_value(&self, token: &TokenRecord) -> Option<f64> {
        match self {
            SortKey::Name => None,
            SortKey::Price => Some(token.price),
            SortKey::PriceChange24h => Some(token.price_change_24h),
            SortKey::Tvl => Some(token.tvl),
            SortKey::Volume24h => Some(token.volume_24h),
            SortKey::MarketCap => token.market_cap,
            SortKey::Liquidity => token.liquidity,
            SortKey::Holders => token.holders.map(|h| h as f64),
            SortKey::DevHoldingPct => token.dev_holding_pct,
            SortKey::AgeMinutes => token.age_minutes.map(f64::from),
        }
    }

    /// Ascending comparison on this field. Names compare case-insensitively;
    /// a missing optional value orders below any present one.
    pub fn compare(&self, a: &TokenRecord, b: &TokenRecord) -> Ordering {
        match self {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            _ => match (self.numeric_value(a), self.numeric_value(b)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn compare(&self, a: &TokenRecord, b: &TokenRecord) -> Ordering {
        match self.direction {
            SortDirection::Ascending => self.key.compare(a, b),
            SortDirection::Descending => self.key.compare(b, a),
        }
    }
}

/// Header-click reducer. A newly chosen key always starts descending; clicking
/// the active key flips its direction.
pub fn next_sort(current: Option<SortSpec>, requested: SortKey) -> SortSpec {
    match current {
        Some(spec) if spec.key == requested => SortSpec::new(requested, spec.direction.toggle()),
        _ => SortSpec::new(requested, SortDirection::Descending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use std::str::FromStr;

    #[test]
    fn toggle_sequence_from_unset() {
        let first = next_sort(None, SortKey::Price);
        assert_eq!(first, SortSpec::new(SortKey::Price, SortDirection::Descending));

        let second = next_sort(Some(first), SortKey::Price);
        assert_eq!(second, SortSpec::new(SortKey::Price, SortDirection::Ascending));

        let third = next_sort(Some(second), SortKey::Tvl);
        assert_eq!(third, SortSpec::new(SortKey::Tvl, SortDirection::Descending));
    }

    #[test]
    fn ascending_flips_back_to_descending() {
        let asc = SortSpec::new(SortKey::Name, SortDirection::Ascending);
        assert_eq!(
            next_sort(Some(asc), SortKey::Name).direction,
            SortDirection::Descending
        );
    }

    #[test]
    fn reducer_is_pure() {
        let current = Some(SortSpec::new(SortKey::Tvl, SortDirection::Descending));
        assert_eq!(
            next_sort(current, SortKey::Tvl),
            next_sort(current, SortKey::Tvl)
        );
    }

    #[test]
    fn parses_wire_and_snake_names() {
        assert_eq!(SortKey::from_str("priceChange24h").ok(), Some(SortKey::PriceChange24h));
        assert_eq!(SortKey::from_str("volume_24h").ok(), Some(SortKey::Volume24h));
        assert_eq!(SortKey::from_str("age").ok(), Some(SortKey::AgeMinutes));
        assert!(SortKey::from_str("logo").is_err());
    }

    #[test]
    fn name_compare_ignores_case() {
        let a = TokenRecord::new("1", "alpha", Category::New);
        let b = TokenRecord::new("2", "Beta", Category::New);
        assert_eq!(SortKey::Name.compare(&a, &b), Ordering::Less);
        let upper = TokenRecord::new("3", "ALPHA", Category::New);
        assert_eq!(SortKey::Name.compare(&a, &upper), Ordering::Equal);
    }

    #[test]
    fn missing_optional_orders_low() {
        let mut a = TokenRecord::new("1", "A", Category::New);
        a.holders = Some(10);
        let b = TokenRecord::new("2", "B", Category::New);
        assert_eq!(SortKey::Holders.compare(&a, &b), Ordering::Greater);
        let desc = SortSpec::new(SortKey::Holders, SortDirection::Descending);
        assert_eq!(desc.compare(&a, &b), Ordering::Less);
    }
}
