//! Resolved display currency for one session.
//!
//! [`GeoCurrency`] is created unresolved when the application starts, resolved once
//! from a [`TimezoneSource`], and then passed to everything that displays a price.
//! There is no refresh: a resolved value stays as it is for the rest of the session.

use super::format::{format_price_in, DisplayLocale};
use super::resolver::{self, Resolution};
use super::timezone::TimezoneSource;

/// Display country, city and currency for the current session.
///
/// Before resolution the country and city are `None`; currency and country name
/// still report the Bangladesh defaults, so prices render correctly from the first
/// frame.
///
/// # Examples
///
/// ```
/// use tourfinder::locale::{DisplayLocale, FixedTimezone, GeoCurrency};
///
/// let mut geo = GeoCurrency::unresolved(DisplayLocale::EnUs);
/// assert_eq!(geo.currency(), "BDT");
///
/// geo.resolve_once(&FixedTimezone("Asia/Dhaka".into()));
/// assert_eq!(geo.city_name(), Some("Dhaka"));
/// assert_eq!(geo.format_price(15000.0), "BDT\u{a0}15,000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoCurrency {
    country_code: Option<String>,
    city_name: Option<String>,
    locale: DisplayLocale,
}

impl GeoCurrency {
    /// Creates the pre-resolution state.
    ///
    /// Prices format in BDT until [`GeoCurrency::resolve_once`] runs.
    #[must_use]
    pub const fn unresolved(locale: DisplayLocale) -> Self {
        Self {
            country_code: None,
            city_name: None,
            locale,
        }
    }

    /// Creates an already-resolved state from a timezone source.
    #[must_use]
    pub fn detect(source: &dyn TimezoneSource, locale: DisplayLocale) -> Self {
        let mut geo = Self::unresolved(locale);
        geo.resolve_once(source);
        geo
    }

    /// Resolves country and city from `source` unless already resolved.
    ///
    /// A failing source yields the default Bangladesh / Dhaka resolution. Returns
    /// `true` if this call performed the resolution.
    pub fn resolve_once(&mut self, source: &dyn TimezoneSource) -> bool {
        if self.is_resolved() {
            tracing::trace!("locale already resolved, skipping");
            return false;
        }

        let _span = tracing::debug_span!("resolve_timezone").entered();

        let resolution = match source.timezone_name() {
            Ok(name) => {
                tracing::debug!(timezone = %name, "timezone detected");
                resolver::resolve(&name)
            }
            Err(e) => {
                tracing::debug!(error = %e, "timezone lookup failed, using default");
                Resolution::default()
            }
        };

        tracing::debug!(
            country = %resolution.country_code,
            city = %resolution.city_name,
            "locale resolved"
        );

        self.country_code = Some(resolution.country_code);
        self.city_name = Some(resolution.city_name);
        true
    }

    /// Whether [`GeoCurrency::resolve_once`] has run.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.country_code.is_some()
    }

    /// Resolved ISO 3166 country code, such as `"BD"`.
    ///
    /// # Returns
    ///
    /// `None` until resolution. Afterwards always `Some`, falling back to `"BD"`
    /// when the timezone was unknown or could not be read.
    #[must_use]
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    /// Resolved city, such as `"Sylhet"`. `None` until resolution, `"Dhaka"` when
    /// no known city fragment matched.
    #[must_use]
    pub fn city_name(&self) -> Option<&str> {
        self.city_name.as_deref()
    }

    /// Country display name, defaulting to Bangladesh before resolution.
    #[must_use]
    pub fn country_name(&self) -> &'static str {
        resolver::country_name_for(self.effective_country())
    }

    /// ISO 4217 display currency, defaulting to BDT before resolution.
    #[must_use]
    pub fn currency(&self) -> &'static str {
        resolver::currency_for(self.effective_country())
    }

    /// Sales phone number shown in the header. The same for every region.
    #[must_use]
    pub const fn phone_display(&self) -> &'static str {
        resolver::DEFAULT_PHONE
    }

    /// Locale used for digit grouping and symbol placement.
    #[must_use]
    pub const fn locale(&self) -> DisplayLocale {
        self.locale
    }

    /// Formats an amount in the session currency.
    ///
    /// # Parameters
    ///
    /// * `amount` - Amount in display currency units; rounded to whole units
    ///
    /// # Returns
    ///
    /// The localized string, or `"<currency> <amount>"` if the formatter rejects
    /// the input. Never fails.
    #[must_use]
    pub fn format_price(&self, amount: f64) -> String {
        format_price_in(self.locale, amount, self.currency())
    }

    /// Formats a catalog price (base-currency integer) in the session currency.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn format_tour_price(&self, price: u64) -> String {
        self.format_price(price as f64)
    }

    fn effective_country(&self) -> &str {
        self.country_code.as_deref().unwrap_or(resolver::DEFAULT_COUNTRY)
    }
}

impl Default for GeoCurrency {
    fn default() -> Self {
        Self::unresolved(DisplayLocale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{Result, TourfinderError};
    use crate::locale::FixedTimezone;
    use std::cell::Cell;

    struct FailingSource;

    impl TimezoneSource for FailingSource {
        fn timezone_name(&self) -> Result<String> {
            Err(TourfinderError::NotFound("host timezone".to_string()))
        }
    }

    struct CountingSource {
        calls: Cell<u32>,
        name: &'static str,
    }

    impl TimezoneSource for CountingSource {
        fn timezone_name(&self) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.name.to_string())
        }
    }

    #[test]
    fn unresolved_state_uses_defaults() {
        let geo = GeoCurrency::default();
        assert!(!geo.is_resolved());
        assert_eq!(geo.country_code(), None);
        assert_eq!(geo.city_name(), None);
        assert_eq!(geo.country_name(), "Bangladesh");
        assert_eq!(geo.currency(), "BDT");
        assert_eq!(geo.phone_display(), "+8801704439665");
        assert_eq!(geo.format_tour_price(2500), "BDT\u{a0}2,500");
    }

    #[test]
    fn failing_source_degrades_to_default() {
        let geo = GeoCurrency::detect(&FailingSource, DisplayLocale::EnUs);
        assert_eq!(geo.country_code(), Some("BD"));
        assert_eq!(geo.city_name(), Some("Dhaka"));
    }

    #[test]
    fn resolves_city_fragment() {
        let geo = GeoCurrency::detect(&FixedTimezone("Asia/Sylhet".into()), DisplayLocale::EnIn);
        assert_eq!(geo.city_name(), Some("Sylhet"));
        assert_eq!(geo.format_price(150_000.0), "BDT\u{a0}1,50,000");
    }

    #[test]
    fn resolution_happens_once() {
        let source = CountingSource {
            calls: Cell::new(0),
            name: "Asia/Khulna",
        };
        let mut geo = GeoCurrency::default();
        assert!(geo.resolve_once(&source));
        assert!(!geo.resolve_once(&FixedTimezone("Asia/Rangpur".into())));
        assert!(!geo.resolve_once(&source));
        assert_eq!(source.calls.get(), 1);
        assert_eq!(geo.city_name(), Some("Khulna"));
    }
}
