//! The fixed work-category vocabulary used by daily logs.
//!
//! Categories have a defined total order (their position in the report
//! columns). Label lookup is exact: anything outside the vocabulary is an
//! [`UnknownCategory`] and ends up in the malformed-entries section of the
//! report instead of being dropped.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of categories, i.e. hour columns per day.
pub const CATEGORY_COUNT: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Maintenance,
    FeatureDevelopment,
    PlatformImprovement,
    Ismap,
    Vulnerability,
    Nhk,
    Overseas,
    App,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All categories in column order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Maintenance,
        Category::FeatureDevelopment,
        Category::PlatformImprovement,
        Category::Ismap,
        Category::Vulnerability,
        Category::Nhk,
        Category::Overseas,
        Category::App,
        Category::Other,
    ];

    /// The label as written inside `【】` in a daily log.
    pub fn label(self) -> &'static str {
        match self {
            Category::Maintenance => "保守",
            Category::FeatureDevelopment => "機能開発",
            Category::PlatformImprovement => "基盤改善",
            Category::Ismap => "ISMAP",
            Category::Vulnerability => "脆弱性",
            Category::Nhk => "NHK",
            Category::Overseas => "海外",
            Category::App => "アプリ",
            Category::Other => "その他",
        }
    }

    /// Column position, 0 through 8.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Comma-joined labels in column order, as used by report headers.
    pub fn header() -> String {
        Self::ALL.map(Category::label).join(",")
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
