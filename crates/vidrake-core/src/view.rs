//! Catalog filter/sort engine.
//!
//! Pure with respect to its two inputs: the engine reads a snapshot of the
//! catalog per invocation, never mutates it, and recomputation is idempotent,
//! so callers may re-run it on every state change.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::criteria::{Criteria, QualityFilter, SortKey, SortOrder, TypeFilter, YearFilter};
use crate::models::Video;

/// The filtered, sorted subset of the catalog plus aggregate counts.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Matching records in the order selected by the sort criteria.
    pub items: Vec<Video>,
    /// `items.len()`, precomputed for display.
    pub filtered_count: usize,
    /// Size of the unfiltered catalog.
    pub total_count: usize,
    /// Sum of known sizes over the *unfiltered* catalog.
    pub total_size_bytes: u64,
}

/// Compute the view of `catalog` under `criteria`.
///
/// Filtering is the conjunction of the five independently-optional
/// predicates; each is a no-op at its sentinel except the size bound, which
/// always runs (the default range `[0, u64::MAX]` passes everything, with
/// unknown sizes compared as 0). A `min_size` above `max_size` yields an
/// empty view rather than an error.
///
/// Sorting applies to the filtered items only and is stable, so equal keys
/// keep catalog insertion order. The resulting order per
/// (`sort_by`, `sort_order`) pair:
///
/// | sort_by | Asc            | Desc           |
/// |---------|----------------|----------------|
/// | name    | A to Z         | Z to A         |
/// | quality | 4K first       | Unknown first  |
/// | size    | largest first  | smallest first |
/// | year    | newest first   | oldest first   |
///
/// `Desc` always reverses the base comparator; the quality/size/year bases
/// are descending by construction, which is why their `Asc` order starts at
/// the top.
pub fn view(catalog: &Catalog, criteria: &Criteria) -> View {
    let mut items: Vec<Video> = catalog
        .iter()
        .filter(|v| matches(v, criteria))
        .cloned()
        .collect();

    items.sort_by(|a, b| {
        let base = base_cmp(a, b, criteria.sort_by);
        match criteria.sort_order {
            SortOrder::Asc => base,
            SortOrder::Desc => base.reverse(),
        }
    });

    View {
        filtered_count: items.len(),
        total_count: catalog.len(),
        total_size_bytes: catalog.total_size_bytes(),
        items,
    }
}

/// Conjunction of all filter predicates.
fn matches(video: &Video, criteria: &Criteria) -> bool {
    matches_search(video, &criteria.search_term)
        && matches_quality(video, &criteria.quality)
        && matches_type(video, criteria.kind)
        && matches_year(video, &criteria.year)
        && matches_size(video, criteria.min_size, criteria.max_size)
}

/// Every whitespace-separated token must appear in the lower-cased title or
/// filename. AND across tokens, OR between the two fields.
fn matches_search(video: &Video, search_term: &str) -> bool {
    if search_term.trim().is_empty() {
        return true;
    }
    let title = video.title.to_lowercase();
    let filename = video.filename.to_lowercase();
    search_term
        .to_lowercase()
        .split_whitespace()
        .all(|token| title.contains(token) || filename.contains(token))
}

fn matches_quality(video: &Video, filter: &QualityFilter) -> bool {
    match filter {
        QualityFilter::All => true,
        QualityFilter::Only(quality) => video.quality == *quality,
    }
}

fn matches_type(video: &Video, filter: TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Tv => video.is_episode(),
        TypeFilter::Movie => !video.is_episode(),
    }
}

fn matches_year(video: &Video, filter: &YearFilter) -> bool {
    match filter {
        YearFilter::All => true,
        YearFilter::Exact(year) => video.year.as_deref() == Some(year.as_str()),
    }
}

/// Inclusive byte bounds; unknown size compares as 0.
fn matches_size(video: &Video, min_size: u64, max_size: u64) -> bool {
    let size = video.size.unwrap_or(0);
    size >= min_size && size <= max_size
}

/// Base comparator before the order flag is applied. Name is ascending;
/// quality, size and year are descending by construction.
fn base_cmp(a: &Video, b: &Video, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Quality => b.quality.rank().cmp(&a.quality.rank()),
        SortKey::Size => b.size.unwrap_or(0).cmp(&a.size.unwrap_or(0)),
        SortKey::Year => year_value(b).cmp(&year_value(a)),
    }
}

/// Numeric coercion for year comparison only; absent or non-numeric years
/// order as 0. The stored string stays untouched.
fn year_value(video: &Video) -> u32 {
    video
        .year
        .as_deref()
        .and_then(|y| y.parse().ok())
        .unwrap_or(0)
}
