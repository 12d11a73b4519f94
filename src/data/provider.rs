use {
    crate::domain::{TokenRecord, validate_tokens},
    anyhow::{Context, Result},
    async_trait::async_trait,
};

/// Abstract interface for fetching the token list.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetch the full list. Order is the source order shown when no sort is set.
    async fn fetch_tokens(&self) -> Result<Vec<TokenRecord>>;
}

/// Parses a JSON array of token records and validates it as a whole.
pub fn parse_dataset(json: &str) -> Result<Vec<TokenRecord>> {
    let tokens: Vec<TokenRecord> =
        serde_json::from_str(json).context("Failed to parse token dataset")?;
    validate_tokens(&tokens).context("Token dataset failed validation")?;
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DEMO, domain::ColumnSet};

    #[test]
    fn embedded_datasets_are_valid() {
        let compact = parse_dataset(DEMO.dataset(ColumnSet::Compact)).unwrap();
        assert_eq!(compact.len(), 9);
        assert!(compact.iter().all(|t| !t.is_extended()));

        let extended = parse_dataset(DEMO.dataset(ColumnSet::Extended)).unwrap();
        assert!(!extended.is_empty());
        assert!(extended.iter().all(|t| t.is_extended()));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let json = r#"[{"id":"1","name":"A","slug":"a","logo":"","price":1.0,
            "priceChange24h":0.0,"tvl":1.0,"volume24h":1.0,"category":"hot"}]"#;
        assert!(parse_dataset(json).is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let err = parse_dataset("[{]").unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"[
            {"id":"1","name":"A","slug":"a","logo":"","price":1.0,
             "priceChange24h":0.0,"tvl":1.0,"volume24h":1.0,"category":"new"},
            {"id":"1","name":"B","slug":"b","logo":"","price":2.0,
             "priceChange24h":0.0,"tvl":1.0,"volume24h":1.0,"category":"new"}]"#;
        let err = parse_dataset(json).unwrap_err();
        assert!(format!("{:#}", err).contains("validation"));
    }
}
