//! Page query parameters.
//!
//! Deep links such as `/tours?destination=cox-bazar&maxPrice=20000&sort=price`
//! are turned into the initial [`SearchFilters`] and [`SortKey`] of the listing
//! page. Unknown keys are ignored and empty values count as absent.

use crate::domain::{leading_integer, SearchFilters, SortKey};

/// Destination slugs used by the home page search box, mapped to the tour title
/// they search for.
const DESTINATIONS: &[(&str, &str)] = &[
    ("cox-bazar", "Cox's Bazar Beach Paradise"),
    ("saint-martin", "Saint Martin Island Escape"),
    ("bandarban", "Bandarban Hill Tribe Tour"),
    ("sylhet", "Sylhet Sada Pathor Adventure"),
    ("sundarban", "Sundarban Mangrove Forest Safari"),
    ("international", "India Golden Triangle Tour"),
];

/// Title searched for by a destination slug, if the slug is known.
#[must_use]
pub fn destination_title(slug: &str) -> Option<&'static str> {
    DESTINATIONS
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, title)| *title)
}

/// Everything a page URL can preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    pub filters: SearchFilters,
    pub sort: SortKey,
    /// Title of the package to preselect on the booking page.
    pub package: Option<String>,
}

impl PageParams {
    /// Parses a URL query string, with or without the leading `?`.
    ///
    /// ```
    /// use tourfinder::app::PageParams;
    /// use tourfinder::domain::SortKey;
    ///
    /// let params = PageParams::from_query("?destination=sylhet&minPrice=10000abc&sort=price");
    /// assert_eq!(params.filters.keyword.as_deref(), Some("Sylhet Sada Pathor Adventure"));
    /// assert_eq!(params.filters.min_price, Some(10000));
    /// assert_eq!(params.sort, SortKey::Price);
    /// ```
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()))
    }

    /// Builds page parameters from decoded key/value pairs. Later keys win.
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            let filters = &mut params.filters;
            match key {
                "destination" => {
                    let keyword = destination_title(value).unwrap_or(value);
                    filters.keyword = Some(keyword.to_string());
                }
                "keyword" => filters.keyword = Some(value.to_string()),
                "category" => filters.category = Some(value.to_string()),
                "minPrice" => filters.min_price = leading_integer(value),
                "maxPrice" => filters.max_price = leading_integer(value),
                "duration" => filters.duration = Some(value.to_string()),
                "difficulty" => filters.difficulty = value.to_lowercase().parse().ok(),
                "sort" => {
                    params.sort = value.parse().unwrap_or_else(|e| {
                        tracing::debug!(error = %e, "unknown sort parameter, using default");
                        SortKey::default()
                    });
                }
                "package" => params.package = Some(value.to_string()),
                _ => tracing::trace!(key = %key, "ignoring query parameter"),
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Difficulty;

    #[test]
    fn destination_maps_to_title() {
        let params = PageParams::from_query("destination=cox-bazar");
        assert_eq!(params.filters.keyword.as_deref(), Some("Cox's Bazar Beach Paradise"));
    }

    #[test]
    fn unknown_destination_is_used_verbatim() {
        let params = PageParams::from_query("destination=Sajek+Valley");
        assert_eq!(params.filters.keyword.as_deref(), Some("Sajek Valley"));
    }

    #[test]
    fn prices_use_leading_integer() {
        let params = PageParams::from_query("minPrice=15000abc&maxPrice=abc");
        assert_eq!(params.filters.min_price, Some(15000));
        assert_eq!(params.filters.max_price, None);

        let params = PageParams::from_query("minPrice=0");
        assert_eq!(params.filters.min_price, Some(0));
    }

    #[test]
    fn empty_values_are_absent() {
        let params = PageParams::from_query("?category=&duration=&sort=");
        assert!(params.filters.is_empty());
        assert_eq!(params.sort, SortKey::Rating);
    }

    #[test]
    fn remaining_keys() {
        let params = PageParams::from_query(
            "category=beach&duration=3%20days&difficulty=Easy&sort=duration&package=Old%20Dhaka%20Heritage%20Walk&utm_source=x",
        );
        assert_eq!(params.filters.category.as_deref(), Some("beach"));
        assert_eq!(params.filters.duration.as_deref(), Some("3 days"));
        assert_eq!(params.filters.difficulty, Some(Difficulty::Easy));
        assert_eq!(params.sort, SortKey::Duration);
        assert_eq!(params.package.as_deref(), Some("Old Dhaka Heritage Walk"));
    }

    #[test]
    fn bad_sort_falls_back_to_rating() {
        assert_eq!(PageParams::from_query("sort=popularity").sort, SortKey::Rating);
    }

    #[test]
    fn zero_max_price_is_a_real_bound() {
        use crate::catalog::{query, CatalogSource, JsonCatalog};

        let params = PageParams::from_query("maxPrice=0");
        assert_eq!(params.filters.max_price, Some(0));

        let catalog = JsonCatalog::embedded().unwrap();
        assert!(query(catalog.tours(), &params.filters, params.sort).is_empty());

        let params = PageParams::from_query("minPrice=0");
        assert_eq!(query(catalog.tours(), &params.filters, params.sort).len(), 8);
    }
}
