//! Catalog query engine: filter then sort.
//!
//! [`query`] is a pure function of its arguments. It keeps no state between calls and
//! never mutates the catalog, so the page layer can call it on every keystroke.
//!
//! # Filtering
//!
//! A tour is kept iff it passes every active constraint. Absent fields, and empty
//! strings, impose no constraint.
//!
//! | Field        | Rule                                                              |
//! |--------------|-------------------------------------------------------------------|
//! | `keyword`    | lowercase title contains keyword, OR keyword contains the title's first word |
//! | `category`   | exact, case-sensitive                                             |
//! | `min_price`  | `price >= min` (inclusive)                                        |
//! | `max_price`  | `price <= max` (inclusive)                                        |
//! | `duration`   | lowercase tour duration contains the filter's first word          |
//! | `difficulty` | exact                                                             |
//!
//! The second keyword disjunct is deliberately loose: a full tour title passed as the
//! keyword (for instance from a destination deep link) still matches even when the
//! trailing words differ. It also means a keyword like `"gold"` matches a tour titled
//! `"Old Dhaka ..."`. Keep both disjuncts.
//!
//! # Sorting
//!
//! The sort is stable, so ties keep catalog order and repeated calls with the same
//! input return the same sequence.
//!
//! - [`SortKey::Price`]: ascending
//! - [`SortKey::Rating`]: descending
//! - [`SortKey::Duration`]: ascending by the leading integer of `duration`; tours whose
//!   duration has no leading number (`"Full day"`) sort after all others

use crate::domain::{SearchFilters, SortKey, Tour};
use std::cmp::Ordering;

/// Filters and sorts the catalog.
///
/// Returns references into `catalog`. The result is empty, never an error, when the
/// catalog is empty or nothing matches.
///
/// # Examples
///
/// ```
/// use tourfinder::catalog::{query, CatalogSource, JsonCatalog};
/// use tourfinder::domain::{SearchFilters, SortKey};
///
/// let catalog = JsonCatalog::embedded()?;
/// let filters = SearchFilters::default().with_category("beach");
/// let results = query(catalog.tours(), &filters, SortKey::Price);
/// assert!(results.iter().all(|t| t.category == "beach"));
/// assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
/// # Ok::<(), tourfinder::TourfinderError>(())
/// ```
#[must_use]
pub fn query<'a>(catalog: &'a [Tour], filters: &SearchFilters, sort: SortKey) -> Vec<&'a Tour> {
    let _span = tracing::debug_span!("query_catalog",
        catalog_len = catalog.len(),
        sort = %sort
    )
    .entered();

    let matcher = Matcher::new(filters);
    let mut results: Vec<&Tour> = catalog.iter().filter(|tour| matcher.matches(tour)).collect();

    results.sort_by(|a, b| compare(a, b, sort));

    tracing::debug!(result_count = results.len(), "catalog query complete");
    results
}

/// Returns whether a single tour passes every active constraint of `filters`.
#[must_use]
pub fn matches(tour: &Tour, filters: &SearchFilters) -> bool {
    Matcher::new(filters).matches(tour)
}

/// Filter constraints with the per-query lowercasing done once.
struct Matcher<'f> {
    keyword: Option<String>,
    category: Option<&'f str>,
    min_price: Option<u64>,
    max_price: Option<u64>,
    duration_token: Option<String>,
    difficulty: Option<crate::domain::Difficulty>,
}

impl<'f> Matcher<'f> {
    fn new(filters: &'f SearchFilters) -> Self {
        let keyword = non_empty(filters.keyword.as_deref()).map(str::to_lowercase);

        let duration_token = non_empty(filters.duration.as_deref())
            .and_then(|d| d.to_lowercase().split_whitespace().next().map(String::from));

        Self {
            keyword,
            category: non_empty(filters.category.as_deref()),
            min_price: filters.min_price,
            max_price: filters.max_price,
            duration_token,
            difficulty: filters.difficulty,
        }
    }

    fn matches(&self, tour: &Tour) -> bool {
        if let Some(keyword) = &self.keyword {
            if !keyword_matches(&tour.title, keyword) {
                return false;
            }
        }

        if self.category.is_some_and(|c| tour.category != c) {
            return false;
        }

        if self.min_price.is_some_and(|min| tour.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| tour.price > max) {
            return false;
        }

        if let Some(token) = &self.duration_token {
            if !tour.duration.to_lowercase().contains(token.as_str()) {
                return false;
            }
        }

        if self.difficulty.is_some_and(|d| tour.difficulty != d) {
            return false;
        }

        true
    }
}

/// `keyword` must already be lowercase.
fn keyword_matches(title: &str, keyword: &str) -> bool {
    let title = title.to_lowercase();
    if title.contains(keyword) {
        return true;
    }
    let first_word = title.split_whitespace().next().unwrap_or("");
    keyword.contains(first_word)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

fn compare(a: &Tour, b: &Tour, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Rating => b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal),
        SortKey::Duration => match (a.leading_duration(), b.leading_duration()) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}
