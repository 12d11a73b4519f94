use crate::{
    domain::{Category, SortSpec, TokenRecord},
    models::TokenSnapshot,
};

/// Filter to `category`, then order by `sort` (stable). Without a sort spec the
/// filtered records keep their source order.
pub fn derive_view(
    source: &[TokenRecord],
    category: Category,
    sort: Option<SortSpec>,
) -> Vec<TokenRecord> {
    let mut rows: Vec<TokenRecord> = source
        .iter()
        .filter(|t| t.category == category)
        .cloned()
        .collect();

    if let Some(spec) = sort {
        rows.sort_by(|a, b| spec.compare(a, b));
    }
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ViewKey {
    snapshot_version: u64,
    category: Category,
    sort: Option<SortSpec>,
}

/// Memoized table rows. Only a new snapshot, category or sort spec triggers a
/// recompute; everything else reuses the cached rows.
#[derive(Debug, Default)]
pub struct DerivedView {
    key: Option<ViewKey>,
    rows: Vec<TokenRecord>,
}

impl DerivedView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the rows were rebuilt.
    pub fn refresh(
        &mut self,
        snapshot: &TokenSnapshot,
        category: Category,
        sort: Option<SortSpec>,
    ) -> bool {
        let key = ViewKey {
            snapshot_version: snapshot.version,
            category,
            sort,
        };
        if self.key == Some(key) {
            return false;
        }

        self.rows = crate::trace_time!("derive_view", 500, {
            derive_view(&snapshot.tokens, category, sort)
        });
        self.key = Some(key);
        true
    }

    pub fn rows(&self) -> &[TokenRecord] {
        &self.rows
    }

    /// Drops the cache so the next `refresh` rebuilds. Used when a new
    /// dataset is swapped in under a version number that may repeat.
    pub fn invalidate(&mut self) {
        self.key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortDirection, SortKey};
    use std::sync::Arc;

    fn token(id: &str, name: &str, category: Category, tvl: f64) -> TokenRecord {
        let mut t = TokenRecord::new(id, name, category);
        t.tvl = tvl;
        t
    }

    fn fixture() -> Vec<TokenRecord> {
        vec![
            token("1", "weth", Category::New, 345.0),
            token("2", "RNDR", Category::Stretch, 210.0),
            token("3", "usdc", Category::New, 5000.0),
            token("4", "Axl", Category::New, 76.0),
            token("5", "AERO", Category::Migrated, 65.0),
        ]
    }

    #[test]
    fn filter_keeps_exactly_the_category() {
        let source = fixture();
        let rows = derive_view(&source, Category::New, None);
        let ids: Vec<&str> = rows.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
        assert!(rows.iter().all(|t| t.category == Category::New));
    }

    #[test]
    fn empty_category_gives_empty_rows() {
        let source = vec![token("1", "A", Category::New, 1.0)];
        assert!(derive_view(&source, Category::Migrated, None).is_empty());
    }

    #[test]
    fn name_sort_is_case_insensitive() {
        let source = fixture();
        let spec = SortSpec::new(SortKey::Name, SortDirection::Ascending);
        let rows = derive_view(&source, Category::New, Some(spec));
        let names: Vec<&str> = rows.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Axl", "usdc", "weth"]);
    }

    #[test]
    fn stable_for_equal_keys() {
        let source = vec![
            token("a", "first", Category::New, 10.0),
            token("b", "second", Category::New, 20.0),
            token("c", "third", Category::New, 10.0),
            token("d", "fourth", Category::New, 10.0),
        ];
        let desc = SortSpec::new(SortKey::Tvl, SortDirection::Descending);
        let ids: Vec<String> = derive_view(&source, Category::New, Some(desc))
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["b", "a", "c", "d"]);

        let asc = SortSpec::new(SortKey::Tvl, SortDirection::Ascending);
        let ids: Vec<String> = derive_view(&source, Category::New, Some(asc))
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["a", "c", "d", "b"]);
    }

    #[test]
    fn memo_skips_unchanged_inputs() {
        let snapshot = TokenSnapshot::initial(Arc::new(fixture()));
        let mut view = DerivedView::new();
        let spec = Some(SortSpec::new(SortKey::Tvl, SortDirection::Descending));

        assert!(view.refresh(&snapshot, Category::New, spec));
        assert!(!view.refresh(&snapshot, Category::New, spec));

        assert!(view.refresh(&snapshot, Category::Stretch, spec));
        assert_eq!(view.rows().len(), 1);

        let next = snapshot.next(snapshot.tokens.clone(), None);
        assert!(view.refresh(&next, Category::Stretch, spec));
        assert!(!view.refresh(&next, Category::Stretch, spec));

        view.invalidate();
        assert!(view.refresh(&next, Category::Stretch, spec));
    }

    #[test]
    fn name_and_tvl_orders() {
        let source = vec![
            token("1", "B", Category::New, 1.0),
            token("2", "A", Category::New, 2.0),
        ];
        let by_name = SortSpec::new(SortKey::Name, SortDirection::Ascending);
        let names: Vec<String> = derive_view(&source, Category::New, Some(by_name))
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);

        let by_tvl = SortSpec::new(SortKey::Tvl, SortDirection::Descending);
        let tvls: Vec<f64> = derive_view(&source, Category::New, Some(by_tvl))
            .into_iter()
            .map(|t| t.tvl)
            .collect();
        assert_eq!(tvls, vec![2.0, 1.0]);
    }

    #[test]
    fn sorted_rows_are_monotonic_and_idempotent() {
        let source = fixture();
        for key in [SortKey::Tvl, SortKey::Price, SortKey::Volume24h, SortKey::Name] {
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let spec = SortSpec::new(key, direction);
                let rows = derive_view(&source, Category::New, Some(spec));
                assert!(
                    rows.windows(2)
                        .all(|w| spec.compare(&w[0], &w[1]) != std::cmp::Ordering::Greater),
                    "{:?} not ordered",
                    spec
                );
                assert_eq!(derive_view(&rows, Category::New, Some(spec)), rows);
            }
        }
    }

    #[test]
    fn header_clicks_drive_the_rows() {
        use crate::{
            domain::ColumnSet,
            models::{UiAction, UiStore},
        };

        let source = fixture();
        let mut store = UiStore::new(Category::New, None);
        let ids = |store: &UiStore| -> Vec<String> {
            derive_view(&source, store.active_category(), store.sort())
                .into_iter()
                .map(|t| t.id)
                .collect()
        };
        assert_eq!(ids(&store), vec!["1", "3", "4"]);

        store.dispatch(UiAction::RequestSort(SortKey::Tvl), ColumnSet::Compact);
        assert_eq!(ids(&store), vec!["3", "1", "4"]);
        store.dispatch(UiAction::RequestSort(SortKey::Tvl), ColumnSet::Compact);
        assert_eq!(ids(&store), vec!["4", "1", "3"]);
        store.dispatch(UiAction::ClearSort, ColumnSet::Compact);
        assert_eq!(ids(&store), vec!["1", "3", "4"]);

        store.dispatch(UiAction::SelectCategory(Category::Migrated), ColumnSet::Compact);
        assert_eq!(ids(&store), vec!["5"]);
    }

    #[test]
    fn embedded_dataset_default_view() {
        use crate::{config::DEMO, data::parse_dataset, domain::ColumnSet, models::UiStore};

        let tokens = parse_dataset(DEMO.dataset(ColumnSet::Compact)).unwrap();
        let store = UiStore::default();
        let ids: Vec<String> = derive_view(&tokens, store.active_category(), store.sort())
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["2", "1", "8", "3"]);

        let total: usize = crate::domain::CATEGORIES
            .iter()
            .map(|info| derive_view(&tokens, info.id, None).len())
            .sum();
        assert_eq!(total, tokens.len());
    }
}
