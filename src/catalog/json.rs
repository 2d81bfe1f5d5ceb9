//! JSON file-based catalog.
//!
//! Tours and categories are stored as two JSON arrays (`tours.json`,
//! `categories.json`). A copy of both ships inside the binary so the catalog works
//! without any files on disk.
//!
//! Data is validated once at load time. After that the engine assumes well-formed
//! records and never re-checks them.

use crate::catalog::source::CatalogSource;
use crate::domain::error::{Result, TourfinderError};
use crate::domain::{Category, Tour};
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::Path;

const EMBEDDED_TOURS: &str = include_str!("../../data/tours.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../../data/categories.json");

/// Highest allowed tour rating.
const MAX_RATING: f64 = 5.0;

/// Catalog loaded from JSON.
///
/// # File Format
///
/// ```json
/// [
///   {
///     "id": 1,
///     "slug": "cox-bazar-beach-paradise",
///     "title": "Cox's Bazar Beach Paradise",
///     "price": 15000,
///     "duration": "3 days 2 nights",
///     "category": "beach",
///     "difficulty": "easy",
///     "images": ["/images/tours/cox-bazar-1.jpg"],
///     "rating": 4.8,
///     ...
///   }
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    tours: Vec<Tour>,
    categories: Vec<Category>,
}

impl JsonCatalog {
    /// Loads the catalog bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled data is malformed.
    pub fn embedded() -> Result<Self> {
        tracing::debug!("loading embedded catalog");
        Self::from_json(EMBEDDED_TOURS, EMBEDDED_CATEGORIES)
    }

    /// Loads the catalog from two JSON files.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read, is not valid JSON, or fails
    /// validation.
    pub fn from_paths(tours_path: &Path, categories_path: &Path) -> Result<Self> {
        tracing::debug!(tours = ?tours_path, categories = ?categories_path, "loading catalog files");

        let tours = std::fs::read_to_string(tours_path)?;
        let categories = std::fs::read_to_string(categories_path)?;
        Self::from_json(&tours, &categories)
    }

    /// Loads tours and categories from their files where a path is given, and from
    /// the bundled copy otherwise.
    ///
    /// # Errors
    ///
    /// Same as [`JsonCatalog::from_paths`].
    pub fn load(tours_path: Option<&Path>, categories_path: Option<&Path>) -> Result<Self> {
        fn read_or(path: Option<&Path>, embedded: &'static str) -> Result<Cow<'static, str>> {
            match path {
                Some(path) => Ok(Cow::Owned(std::fs::read_to_string(path)?)),
                None => Ok(Cow::Borrowed(embedded)),
            }
        }

        tracing::debug!(tours = ?tours_path, categories = ?categories_path, "loading catalog");
        let tours = read_or(tours_path, EMBEDDED_TOURS)?;
        let categories = read_or(categories_path, EMBEDDED_CATEGORIES)?;
        Self::from_json(&tours, &categories)
    }

    /// Parses and validates catalog JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TourfinderError::Catalog`] on parse failure or when a record breaks
    /// a catalog invariant.
    pub fn from_json(tours_json: &str, categories_json: &str) -> Result<Self> {
        let tours: Vec<Tour> = serde_json::from_str(tours_json)
            .map_err(|e| TourfinderError::Catalog(format!("failed to parse tours: {e}")))?;
        let categories: Vec<Category> = serde_json::from_str(categories_json)
            .map_err(|e| TourfinderError::Catalog(format!("failed to parse categories: {e}")))?;

        Self::new(tours, categories)
    }

    /// Builds a catalog from already-parsed records.
    ///
    /// # Errors
    ///
    /// Returns [`TourfinderError::Catalog`] when:
    /// - two tours share an `id` or a `slug`
    /// - a tour has no images
    /// - a rating lies outside `[0, 5]`
    /// - two categories share a `slug`
    pub fn new(tours: Vec<Tour>, categories: Vec<Category>) -> Result<Self> {
        validate_tours(&tours)?;
        validate_categories(&categories)?;

        tracing::debug!(
            tour_count = tours.len(),
            category_count = categories.len(),
            "catalog loaded"
        );

        Ok(Self { tours, categories })
    }
}

impl CatalogSource for JsonCatalog {
    fn tours(&self) -> &[Tour] {
        &self.tours
    }

    fn categories(&self) -> &[Category] {
        &self.categories
    }
}

fn validate_tours(tours: &[Tour]) -> Result<()> {
    let mut ids = HashSet::with_capacity(tours.len());
    let mut slugs = HashSet::with_capacity(tours.len());

    for tour in tours {
        if !ids.insert(tour.id) {
            return Err(TourfinderError::Catalog(format!("duplicate tour id: {}", tour.id)));
        }
        if !slugs.insert(tour.slug.as_str()) {
            return Err(TourfinderError::Catalog(format!("duplicate tour slug: {}", tour.slug)));
        }
        if tour.images.is_empty() {
            return Err(TourfinderError::Catalog(format!("tour has no images: {}", tour.slug)));
        }
        if !(0.0..=MAX_RATING).contains(&tour.rating) {
            return Err(TourfinderError::Catalog(format!(
                "rating out of range for {}: {}",
                tour.slug, tour.rating
            )));
        }
    }

    Ok(())
}

fn validate_categories(categories: &[Category]) -> Result<()> {
    let mut slugs = HashSet::with_capacity(categories.len());
    for category in categories {
        if !slugs.insert(category.slug.as_str()) {
            return Err(TourfinderError::Catalog(format!(
                "duplicate category slug: {}",
                category.slug
            )));
        }
    }
    Ok(())
}
