//! Tourfinder: tour catalog discovery for a tour operator site.
//!
//! The crate provides:
//! - A filter + sort engine over a static tour catalog
//! - Timezone-based guessing of the visitor's country, city and display currency
//! - Locale-aware price formatting with a plain-text fallback
//! - Page state for the listing and booking pages, driven by events
//! - Mock contact, newsletter and booking endpoints with field validation
//! - Plain-text rendering of the listing, detail and home pages
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Page Layer (app/)                                  │
//! │  - Event handling, URL parameters                   │
//! │  - Booking picker and form                          │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ API (api/)    │   │ Locale        │
//! │ - View models │   │ - Endpoints   │   │ (locale/)     │
//! │ - Text render │   │ - Validation  │   │ - Currency    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog (catalog/) and Domain (domain/)            │
//! │  - JSON loading, query engine, curation             │
//! │  - Tour records, filters, errors                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP/JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings come from an optional TOML file, overridden by command-line flags:
//!
//! ```toml
//! catalog_path = "~/tours/tours.json"
//! categories_path = "~/tours/categories.json"
//! locale = "en-IN"
//! timezone = "Asia/Dhaka"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use tourfinder::{handle_event, initialize, Config, Event};
//!
//! let config = Config {
//!     timezone: Some("Asia/Sylhet".to_string()),
//!     ..Config::default()
//! };
//! let mut state = initialize(&config)?;
//! handle_event(&mut state, &Event::Mount)?;
//! handle_event(&mut state, &Event::ApplyQuery("destination=sylhet".to_string()))?;
//!
//! assert_eq!(state.geo.city_name(), Some("Sylhet"));
//! assert_eq!(state.results()[0].slug, "sylhet-sada-pathor-adventure");
//! # Ok::<(), tourfinder::TourfinderError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod locale;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ViewMode};
pub use domain::{Result, TourfinderError};

use catalog::JsonCatalog;
use locale::{DisplayLocale, FixedTimezone, SystemTimezone, TimezoneSource};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Every field is optional; an absent field means "use the built-in behavior".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Tours JSON file. Default: the catalog bundled with the binary.
    pub catalog_path: Option<String>,

    /// Categories JSON file. Default: bundled.
    pub categories_path: Option<String>,

    /// Display locale: `en-US`, `en-GB`, `en-IN` or `de-DE`.
    ///
    /// When unset, `LC_ALL` / `LC_MONETARY` / `LANG` are consulted, then `en-US`.
    pub locale: Option<String>,

    /// IANA timezone name used instead of detecting the host's.
    pub timezone: Option<String>,

    /// Tracing filter directive. Options: `trace`, `debug`, `info`, `warn`,
    /// `error`, or a full `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Builds a configuration from string key/value pairs.
    ///
    /// Unknown keys are ignored and empty values count as unset.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use tourfinder::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("locale".to_string(), "en-IN".to_string());
    /// map.insert("timezone".to_string(), String::new());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.locale.as_deref(), Some("en-IN"));
    /// assert_eq!(config.timezone, None);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            catalog_path: get("catalog_path"),
            categories_path: get("categories_path"),
            locale: get("locale"),
            timezone: get("timezone"),
            trace_level: get("trace_level"),
        }
    }

    /// Reads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`TourfinderError::Io`] if the file cannot be read and
    /// [`TourfinderError::Config`] if it is not valid TOML or has unknown keys.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| TourfinderError::Config(format!("{}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), "configuration file loaded");
        Ok(config)
    }

    /// Returns `self` with every field that is set in `overrides` replaced.
    #[must_use]
    pub fn merged_with(self, overrides: Self) -> Self {
        Self {
            catalog_path: overrides.catalog_path.or(self.catalog_path),
            categories_path: overrides.categories_path.or(self.categories_path),
            locale: overrides.locale.or(self.locale),
            timezone: overrides.timezone.or(self.timezone),
            trace_level: overrides.trace_level.or(self.trace_level),
        }
    }

    /// The configured display locale, else the one from the environment.
    ///
    /// An unrecognized configured locale is logged and ignored.
    #[must_use]
    pub fn display_locale(&self) -> DisplayLocale {
        match self.locale.as_deref().map(str::parse::<DisplayLocale>) {
            Some(Ok(locale)) => locale,
            Some(Err(e)) => {
                tracing::debug!(error = %e, "ignoring configured locale");
                DisplayLocale::from_env()
            }
            None => DisplayLocale::from_env(),
        }
    }

    /// Timezone source: the configured name if set, otherwise the host's.
    #[must_use]
    pub fn timezone_source(&self) -> Box<dyn TimezoneSource> {
        match &self.timezone {
            Some(name) => Box::new(FixedTimezone(name.clone())),
            None => Box::new(SystemTimezone::default()),
        }
    }

    /// Loads the catalog named by `catalog_path` / `categories_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured file cannot be read or fails validation.
    pub fn load_catalog(&self) -> Result<JsonCatalog> {
        let expand = |p: &Option<String>| p.as_deref().map(infrastructure::expand_tilde);
        let tours: Option<PathBuf> = expand(&self.catalog_path);
        let categories: Option<PathBuf> = expand(&self.categories_path);
        JsonCatalog::load(tours.as_deref(), categories.as_deref())
    }
}

/// Loads the catalog and builds the initial page state.
///
/// The display currency stays unresolved until the first [`Event::Mount`].
///
/// # Errors
///
/// Returns an error if the configured catalog cannot be loaded.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!("initializing tourfinder");

    let catalog = config.load_catalog()?;
    Ok(AppState::with_locale(
        &catalog,
        config.timezone_source(),
        config.display_locale(),
    ))
}
