//! Curated views over the catalog: featured tours, detail lookup and related tours.

use crate::domain::{Category, Tour};

/// Number of featured tours shown on the home page.
pub const HOME_FEATURED_LIMIT: usize = 3;

/// Number of related tours shown under a tour detail page.
pub const RELATED_LIMIT: usize = 3;

/// Tours flagged `featured`, in catalog order.
#[must_use]
pub fn featured(catalog: &[Tour]) -> Vec<&Tour> {
    catalog.iter().filter(|t| t.featured).collect()
}

/// Looks up a tour by slug.
#[must_use]
pub fn find_by_slug<'a>(catalog: &'a [Tour], slug: &str) -> Option<&'a Tour> {
    let found = catalog.iter().find(|t| t.slug == slug);
    tracing::debug!(slug = %slug, found = found.is_some(), "tour lookup");
    found
}

/// Looks up a tour by title, ignoring case.
///
/// Used to preselect a package when the booking page is opened with a tour title.
#[must_use]
pub fn find_by_title<'a>(catalog: &'a [Tour], title: &str) -> Option<&'a Tour> {
    let wanted = title.to_lowercase();
    catalog.iter().find(|t| t.title.to_lowercase() == wanted)
}

/// Other tours in the same category, in catalog order, at most [`RELATED_LIMIT`].
#[must_use]
pub fn related<'a>(catalog: &'a [Tour], tour: &Tour) -> Vec<&'a Tour> {
    catalog
        .iter()
        .filter(|t| t.id != tour.id && t.category == tour.category)
        .take(RELATED_LIMIT)
        .collect()
}

/// Looks up a category by its slug.
#[must_use]
pub fn category_by_slug<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    categories.iter().find(|c| c.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, JsonCatalog};

    #[test]
    fn featured_keeps_catalog_order() {
        let catalog = JsonCatalog::embedded().unwrap();
        let slugs: Vec<&str> = featured(catalog.tours()).iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec![
                "cox-bazar-beach-paradise",
                "saint-martin-island-escape",
                "bandarban-hill-tribe-tour",
                "sundarban-mangrove-forest-safari",
            ]
        );
    }

    #[test]
    fn related_excludes_self_and_other_categories() {
        let catalog = JsonCatalog::embedded().unwrap();
        let tours = catalog.tours();
        let cox = find_by_slug(tours, "cox-bazar-beach-paradise").unwrap();
        let related_slugs: Vec<&str> = related(tours, cox).iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(related_slugs, vec!["saint-martin-island-escape"]);

        let old_dhaka = find_by_slug(tours, "old-dhaka-heritage-walk").unwrap();
        assert!(related(tours, old_dhaka).is_empty());
    }

    #[test]
    fn lookups_miss_cleanly() {
        let catalog = JsonCatalog::embedded().unwrap();
        assert!(find_by_slug(catalog.tours(), "atlantis").is_none());
        assert!(category_by_slug(catalog.categories(), "space").is_none());
        assert_eq!(
            category_by_slug(catalog.categories(), "wildlife").map(|c| c.name.as_str()),
            Some("Wildlife")
        );
    }

    #[test]
    fn title_lookup_ignores_case() {
        let catalog = JsonCatalog::embedded().unwrap();
        let tour = find_by_title(catalog.tours(), "sylhet sada pathor ADVENTURE").unwrap();
        assert_eq!(tour.id, 4);
        assert!(find_by_title(catalog.tours(), "Sylhet").is_none());
    }
}
