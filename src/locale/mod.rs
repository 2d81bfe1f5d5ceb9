//! Locale and currency resolution.
//!
//! Maps the host timezone to a coarse country/city guess and a display currency,
//! and formats prices in that currency. Every lookup degrades to the fixed
//! Bangladesh / Dhaka / BDT default; nothing here returns an error to callers
//! except the explicitly fallible [`try_format_price`].
//!
//! # Modules
//!
//! - `resolver`: Static lookup tables (`resolve`, `currency_for`, `country_name_for`)
//! - `timezone`: Host timezone detection behind the [`TimezoneSource`] trait
//! - `format`: Currency formatting for a [`DisplayLocale`]
//! - `geo`: The per-session [`GeoCurrency`] value

pub mod format;
pub mod geo;
pub mod resolver;
pub mod timezone;

pub use format::{format_price, format_price_in, try_format_price, DisplayLocale};
pub use geo::GeoCurrency;
pub use resolver::{country_name_for, currency_for, resolve, Resolution};
pub use timezone::{FixedTimezone, SystemTimezone, TimezoneSource};
