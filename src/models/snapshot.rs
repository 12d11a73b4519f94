use {
    crate::domain::TokenRecord,
    chrono::{DateTime, Utc},
    std::sync::Arc,
};

/// What a single ticker step did to one record.
#[derive(Debug, Clone, PartialEq)]
pub struct TickChange {
    pub token_id: String,
    pub old_price: f64,
    pub new_price: f64,
}

/// One published version of the token list. Never mutated once sent; the
/// ticker builds a fresh list for every version.
#[derive(Debug, Clone)]
pub struct TokenSnapshot {
    pub version: u64,
    /// Bumped whenever the list is replaced wholesale rather than ticked.
    pub generation: u64,
    pub tokens: Arc<Vec<TokenRecord>>,
    pub last_change: Option<TickChange>,
    pub published_at: DateTime<Utc>,
}

impl TokenSnapshot {
    pub fn initial(tokens: Arc<Vec<TokenRecord>>) -> Self {
        Self {
            version: 0,
            generation: 0,
            tokens,
            last_change: None,
            published_at: Utc::now(),
        }
    }

    pub fn next(&self, tokens: Arc<Vec<TokenRecord>>, last_change: Option<TickChange>) -> Self {
        Self {
            version: self.version + 1,
            generation: self.generation,
            tokens,
            last_change,
            published_at: Utc::now(),
        }
    }

    /// Next version carrying a freshly loaded list. Prices in it are not
    /// moves relative to this snapshot.
    pub fn reseeded(&self, tokens: Arc<Vec<TokenRecord>>) -> Self {
        Self {
            generation: self.generation + 1,
            ..self.next(tokens, None)
        }
    }

    /// True when `other` comes from a different load than this snapshot.
    pub fn is_new_generation(&self, other: &TokenSnapshot) -> bool {
        self.generation != other.generation
    }

    pub fn find(&self, id: &str) -> Option<&TokenRecord> {
        self.tokens.iter().find(|t| t.id == id)
    }
}
