//! Domain layer: catalog records, filter values and errors.
//!
//! These types are independent of how the catalog is loaded or rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`tour`]: Tour, itinerary and category records
//! - [`filters`]: Search filters and sort order
//!
//! # Examples
//!
//! ```
//! use tourfinder::domain::{SearchFilters, SortKey};
//!
//! let filters = SearchFilters::default().with_keyword("beach");
//! assert_eq!(filters.keyword.as_deref(), Some("beach"));
//! assert_eq!(SortKey::default(), SortKey::Rating);
//! ```

pub mod error;
pub mod filters;
pub mod tour;

pub use error::{Result, TourfinderError};
pub use filters::{FilterUpdate, SearchFilters, SortKey};
pub use tour::{leading_integer, Category, CategoryColor, Difficulty, ItineraryItem, Tour};
