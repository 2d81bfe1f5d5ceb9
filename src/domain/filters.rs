//! Search filters and sort order for catalog queries.
//!
//! [`SearchFilters`] is an immutable value: the page layer never edits it in place but
//! derives a new value with [`SearchFilters::merge`] on every interaction. All fields
//! are optional and an absent field imposes no constraint.

use super::tour::Difficulty;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Restricts which catalog entries a query returns.
///
/// Empty strings are treated the same as absent fields by the query engine, so a
/// cleared search box behaves like "show all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Substring matched case-insensitively against the tour title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Category slug, matched exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Inclusive lower price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,

    /// Inclusive upper price bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,

    /// Free text such as `"3 days"`; only its first token is matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
}

/// A single-field change to a [`SearchFilters`] value.
///
/// `None` clears the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterUpdate {
    Keyword(Option<String>),
    Category(Option<String>),
    MinPrice(Option<u64>),
    MaxPrice(Option<u64>),
    Duration(Option<String>),
    Difficulty(Option<Difficulty>),
}

impl SearchFilters {
    /// Returns a copy of these filters with one field replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourfinder::domain::{FilterUpdate, SearchFilters};
    ///
    /// let base = SearchFilters::default();
    /// let narrowed = base.merge(FilterUpdate::Category(Some("beach".into())));
    /// assert_eq!(narrowed.category.as_deref(), Some("beach"));
    /// assert!(base.category.is_none());
    /// ```
    #[must_use]
    pub fn merge(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Keyword(value) => next.keyword = value,
            FilterUpdate::Category(value) => next.category = value,
            FilterUpdate::MinPrice(value) => next.min_price = value,
            FilterUpdate::MaxPrice(value) => next.max_price = value,
            FilterUpdate::Duration(value) => next.duration = value,
            FilterUpdate::Difficulty(value) => next.difficulty = value,
        }
        next
    }

    #[must_use]
    pub fn with_keyword(&self, keyword: impl Into<String>) -> Self {
        self.merge(FilterUpdate::Keyword(Some(keyword.into())))
    }

    #[must_use]
    pub fn with_category(&self, category: impl Into<String>) -> Self {
        self.merge(FilterUpdate::Category(Some(category.into())))
    }

    #[must_use]
    pub fn with_price_range(&self, min: Option<u64>, max: Option<u64>) -> Self {
        self.merge(FilterUpdate::MinPrice(min))
            .merge(FilterUpdate::MaxPrice(max))
    }

    #[must_use]
    pub fn with_duration(&self, duration: impl Into<String>) -> Self {
        self.merge(FilterUpdate::Duration(Some(duration.into())))
    }

    #[must_use]
    pub fn with_difficulty(&self, difficulty: Difficulty) -> Self {
        self.merge(FilterUpdate::Difficulty(Some(difficulty)))
    }

    /// Returns `true` when no field would constrain a query.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        fn blank(field: Option<&String>) -> bool {
            field.map_or(true, |s| s.is_empty())
        }

        blank(self.keyword.as_ref())
            && blank(self.category.as_ref())
            && blank(self.duration.as_ref())
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.difficulty.is_none()
    }
}

/// Result ordering applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Ascending price.
    Price,
    /// Descending rating, highest first.
    #[default]
    Rating,
    /// Ascending by the leading number of the duration text; unparsable last.
    Duration,
}

impl SortKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Rating => "rating",
            Self::Duration => "duration",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "price" => Ok(Self::Price),
            "rating" => Ok(Self::Rating),
            "duration" => Ok(Self::Duration),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_replaces_only_the_named_field() {
        let filters = SearchFilters::default()
            .with_keyword("sundarban")
            .with_price_range(Some(5000), Some(20000));

        let updated = filters.merge(FilterUpdate::Keyword(None));

        assert!(updated.keyword.is_none());
        assert_eq!(updated.min_price, Some(5000));
        assert_eq!(updated.max_price, Some(20000));
        assert_eq!(filters.keyword.as_deref(), Some("sundarban"));
    }

    #[test]
    fn blank_strings_count_as_empty() {
        let filters = SearchFilters::default()
            .with_keyword("")
            .merge(FilterUpdate::Duration(Some(String::new())));
        assert!(filters.is_empty());
        assert!(!filters.with_difficulty(Difficulty::Easy).is_empty());
    }

    #[test]
    fn sort_key_parsing() {
        assert_eq!("Price".parse::<SortKey>(), Ok(SortKey::Price));
        assert_eq!(" duration ".parse::<SortKey>(), Ok(SortKey::Duration));
        assert!("popularity".parse::<SortKey>().is_err());
        assert_eq!(SortKey::default(), SortKey::Rating);
    }
}
