//! Error types for the tour catalog.
//!
//! This module defines the centralized error type [`TourfinderError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Note that the discovery core (query engine, locale resolver, price formatter) never
//! surfaces these to its callers: lookup misses and formatting failures degrade to fixed
//! defaults. Errors only escape from loading and configuration paths.

use thiserror::Error;

/// The main error type for catalog, configuration and formatting operations.
///
/// # Examples
///
/// ```
/// use tourfinder::TourfinderError;
///
/// fn load() -> Result<(), TourfinderError> {
///     Err(TourfinderError::Catalog("duplicate slug: sylhet".to_string()))
/// }
/// assert!(load().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TourfinderError {
    /// Catalog data could not be parsed or failed validation.
    ///
    /// Catalog data is static and validated when loaded; any violation (duplicate
    /// slug, tour without images, rating out of range) is reported here.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The currency formatter rejected its input.
    ///
    /// Only returned by [`crate::locale::try_format_price`]; the public formatter
    /// replaces it with a plain-text fallback.
    #[error("Format error: {0}")]
    Format(String),

    /// JSON encoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A requested record does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A specialized `Result` type for tourfinder operations.
pub type Result<T> = std::result::Result<T, TourfinderError>;
