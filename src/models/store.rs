use {
    crate::domain::{Category, ColumnSet, SortDirection, SortKey, SortSpec, next_sort},
    serde::{Deserialize, Serialize},
    std::str::FromStr,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Everything the table controls can ask for.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    SelectCategory(Category),
    /// Category by wire id (`"new"`, `"stretch"`, ...). Unknown ids are ignored.
    SelectCategoryById(String),
    RequestSort(SortKey),
    /// Sort by field name as typed. Names that are not orderable fields are ignored.
    RequestSortByName(String),
    ClearSort,
}

/// Table UI state: one active category, an optional sort spec.
///
/// Owned by the app and lent to the renderers; `dispatch` is the only way to
/// change it, so the sort reducer stays the single writer of sort state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiStore {
    active_category: Category,
    sort: Option<SortSpec>,
}

impl Default for UiStore {
    fn default() -> Self {
        Self {
            active_category: Category::New,
            sort: Some(SortSpec::new(SortKey::Tvl, SortDirection::Descending)),
        }
    }
}

impl UiStore {
    pub fn new(active_category: Category, sort: Option<SortSpec>) -> Self {
        Self {
            active_category,
            sort,
        }
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    /// Applies `action`. Returns true if the state changed.
    pub fn dispatch(&mut self, action: UiAction, columns: ColumnSet) -> bool {
        let before = *self;
        match action {
            UiAction::SelectCategory(category) => self.active_category = category,
            UiAction::SelectCategoryById(id) => match Category::from_str(&id) {
                Ok(category) => self.active_category = category,
                Err(_) => log::warn!("Ignoring unknown category id '{}'", id),
            },
            UiAction::RequestSort(key) => self.request_sort(key, columns),
            UiAction::RequestSortByName(name) => match SortKey::from_str(&name) {
                Ok(key) => self.request_sort(key, columns),
                Err(_) => log::warn!("Ignoring sort request for unknown field '{}'", name),
            },
            UiAction::ClearSort => self.sort = None,
        }

        let changed = before != *self;
        #[cfg(debug_assertions)]
        if changed && DF.log_store {
            log::info!(
                "STORE: category={} sort={:?}",
                self.active_category,
                self.sort
            );
        }
        changed
    }

    fn request_sort(&mut self, key: SortKey, columns: ColumnSet) {
        if !columns.contains(key) {
            log::warn!(
                "Ignoring sort by {:?}: not a column of the {} table",
                key,
                columns
            );
            return;
        }
        self.sort = Some(next_sort(self.sort, key));
    }

    /// Drops a persisted sort spec that the current column set cannot show.
    pub fn reconcile(&mut self, columns: ColumnSet) {
        if let Some(spec) = self.sort {
            if !columns.contains(spec.key) {
                self.sort = None;
            }
        }
    }
}
