mod snapshot;
mod store;
mod view;

pub use snapshot::{TickChange, TokenSnapshot};
pub use store::{UiAction, UiStore};
pub use view::{DerivedView, derive_view};
