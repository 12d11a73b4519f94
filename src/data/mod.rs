mod cache;
mod mock;
mod provider;

pub use {
    cache::CachedTokenSource,
    mock::MockTokenSource,
    provider::{TokenSource, parse_dataset},
};
