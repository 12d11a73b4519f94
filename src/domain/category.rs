use {
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString},
};

/// Discovery bucket a token is listed under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Ord,
    PartialOrd,
    Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    #[default]
    New,
    Stretch,
    Migrated,
}

/// Static reference data shown on the category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: Category,
    pub name: &'static str,
    pub description: &'static str,
}

pub static CATEGORIES: [CategoryInfo; 3] = [
    CategoryInfo {
        id: Category::New,
        name: "New Pairs",
        description: "Tokens recently launched on the platform.",
    },
    CategoryInfo {
        id: Category::Stretch,
        name: "Final Stretch",
        description: "Tokens in their final liquidity mining phase.",
    },
    CategoryInfo {
        id: Category::Migrated,
        name: "Migrated",
        description: "Tokens migrated from a previous version.",
    },
];

impl Category {
    pub fn info(&self) -> &'static CategoryInfo {
        match self {
            Category::New => &CATEGORIES[0],
            Category::Stretch => &CATEGORIES[1],
            Category::Migrated => &CATEGORIES[2],
        }
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    pub fn description(&self) -> &'static str {
        self.info().description
    }
}
