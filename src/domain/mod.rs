// Domain types and value objects
mod category;
mod columns;
mod sort;
mod token;

// Re-export commonly used types to the world
pub use category::{CATEGORIES, Category, CategoryInfo};
pub use columns::ColumnSet;
pub use sort::{SortDirection, SortKey, SortSpec, next_sort};
pub use token::{TokenRecord, validate_tokens};
