use {
    crate::domain::Category,
    anyhow::{Result, bail, ensure},
    serde::{Deserialize, Serialize},
    std::collections::HashSet,
};

/// One row of the discovery table.
///
/// `price`, `price_change_24h` and `volume_24h` are the live fields: the ticker
/// publishes new copies of a record with these replaced. Everything else
/// (identity included) is fixed for the lifetime of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub logo: String,
    pub price: f64,
    /// Signed percent, e.g. `-1.2` means -1.2%.
    pub price_change_24h: f64,
    pub tvl: f64,
    pub volume_24h: f64,
    pub category: Category,

    // Extended column set only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holders: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_holding_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity: Option<f64>,
}

impl TokenRecord {
    /// Minimal record with only the compact fields set. Handy for fixtures.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            slug: name.to_lowercase(),
            logo: String::new(),
            name,
            price: 1.0,
            price_change_24h: 0.0,
            tvl: 0.0,
            volume_24h: 0.0,
            category,
            market_cap: None,
            age_minutes: None,
            holders: None,
            dev_holding_pct: None,
            liquidity: None,
        }
    }

    pub fn is_extended(&self) -> bool {
        self.market_cap.is_some()
            || self.age_minutes.is_some()
            || self.holders.is_some()
            || self.dev_holding_pct.is_some()
            || self.liquidity.is_some()
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(!self.id.trim().is_empty(), "token has an empty id");
        ensure!(
            !self.name.trim().is_empty(),
            "token {} has an empty name",
            self.id
        );
        if !self.price.is_finite() || self.price <= 0.0 {
            bail!("token {} has invalid price {}", self.id, self.price);
        }
        if !self.price_change_24h.is_finite() {
            bail!("token {} has a non-finite 24h change", self.id);
        }
        check_non_negative(&self.id, "tvl", Some(self.tvl))?;
        check_non_negative(&self.id, "volume24h", Some(self.volume_24h))?;
        check_non_negative(&self.id, "marketCap", self.market_cap)?;
        check_non_negative(&self.id, "liquidity", self.liquidity)?;
        if let Some(pct) = self.dev_holding_pct {
            ensure!(
                (0.0..=100.0).contains(&pct),
                "token {} has dev holding {}% outside 0..=100",
                self.id,
                pct
            );
        }
        Ok(())
    }
}

fn check_non_negative(id: &str, field: &str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => {
            bail!("token {} has invalid {} {}", id, field, v)
        }
        _ => Ok(()),
    }
}

/// Validates every record and checks ids are unique across the list.
pub fn validate_tokens(tokens: &[TokenRecord]) -> Result<()> {
    let mut seen = HashSet::with_capacity(tokens.len());
    for token in tokens {
        token.validate()?;
        ensure!(seen.insert(token.id.as_str()), "duplicate token id {}", token.id);
    }
    Ok(())
}
