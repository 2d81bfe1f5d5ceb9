//! Catalog source abstraction.
//!
//! The [`CatalogSource`] trait hides where tour and category data comes from. The
//! catalog is read-only: nothing in the crate writes back to it.

use crate::domain::{Category, Tour};

/// Read-only access to the static tour catalog.
///
/// # Implementations
///
/// - [`crate::catalog::JsonCatalog`]: JSON files on disk or the embedded copy
///
/// # Examples
///
/// ```
/// use tourfinder::catalog::{CatalogSource, JsonCatalog};
///
/// let catalog = JsonCatalog::embedded()?;
/// assert!(!catalog.tours().is_empty());
/// # Ok::<(), tourfinder::TourfinderError>(())
/// ```
pub trait CatalogSource {
    /// All tours, in catalog order.
    ///
    /// The order is significant: it is the tie-breaker for every sort.
    fn tours(&self) -> &[Tour];

    /// All categories, in catalog order.
    fn categories(&self) -> &[Category];
}
