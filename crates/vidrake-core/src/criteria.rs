use serde::{Deserialize, Serialize};

use vidrake_parse::Quality;

/// Current filter and sort configuration applied to the catalog.
///
/// Every filter defaults to its all-pass sentinel; the engine treats the
/// default value as "show everything in name order". Updated field-by-field
/// by the caller and read on every recompute; never persisted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Space-separated tokens; an item matches only if every token appears
    /// in its title or filename (case-insensitive).
    pub search_term: String,
    pub quality: QualityFilter,
    pub kind: TypeFilter,
    pub year: YearFilter,
    /// Inclusive lower size bound in bytes.
    pub min_size: u64,
    /// Inclusive upper size bound in bytes; `u64::MAX` stands in for
    /// +infinity in the default range.
    pub max_size: u64,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Criteria {
    /// All filters at their sentinel, full size range, name ascending.
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            quality: QualityFilter::All,
            kind: TypeFilter::All,
            year: YearFilter::All,
            min_size: 0,
            max_size: u64::MAX,
            sort_by: SortKey::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

impl Default for Criteria {
    /// Same as [`Criteria::new`]; `max_size` defaults to the full range.
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFilter {
    #[default]
    All,
    Only(Quality),
}

/// Movie/TV distinction: a record is "tv" iff its season is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Movie,
    Tv,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFilter {
    #[default]
    All,
    Exact(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Name,
    Quality,
    Size,
    Year,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}
