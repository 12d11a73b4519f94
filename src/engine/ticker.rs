use {
    crate::{config::SimulationConfig, domain::TokenRecord, models::TickChange},
    rand::Rng,
};

/// Result of one simulated tick: the full next list plus what moved.
#[derive(Debug, Clone)]
pub struct TickOutcome {
    pub tokens: Vec<TokenRecord>,
    pub change: TickChange,
}

/// Picks one record uniformly at random and nudges its price, 24h change and
/// volume. Every other record is carried over unchanged. Returns `None` for an
/// empty list.
pub fn apply_tick<R: Rng + ?Sized>(
    tokens: &[TokenRecord],
    rng: &mut R,
    cfg: &SimulationConfig,
) -> Option<TickOutcome> {
    if tokens.is_empty() {
        return None;
    }

    let idx = rng.gen_range(0..tokens.len());
    let mut next = tokens.to_vec();
    let target = &mut next[idx];
    let old_price = target.price;

    target.price *= 1.0 + (rng.gen_range(0.0..1.0) - 0.5) * cfg.price_jitter;
    target.price_change_24h += (rng.gen_range(0.0..1.0) - 0.5) * cfg.change_jitter;
    target.volume_24h += rng.gen_range(0.0..1.0) * cfg.volume_bump;

    let change = TickChange {
        token_id: target.id.clone(),
        old_price,
        new_price: target.price,
    };
    Some(TickOutcome { tokens: next, change })
}
