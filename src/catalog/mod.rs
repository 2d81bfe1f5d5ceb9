//! Tour catalog: loading, querying and curation.
//!
//! The catalog is a static, ordered list of tours plus a parallel list of
//! categories, loaded once at start-up and never written to.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait abstraction
//! - `json`: JSON-file catalog with load-time validation
//! - `query`: The filter + sort engine
//! - `curation`: Featured tours, slug lookup, related tours

pub mod curation;
pub mod json;
pub mod query;
pub mod source;

pub use curation::{
    category_by_slug, featured, find_by_slug, find_by_title, related, HOME_FEATURED_LIMIT, RELATED_LIMIT,
};
pub use json::JsonCatalog;
pub use query::{matches, query};
pub use source::CatalogSource;
