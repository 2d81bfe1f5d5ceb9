//! Timezone to country/city/currency lookup tables.
//!
//! Resolution is a best-effort guess from the IANA timezone name alone: the name is
//! searched for known city fragments, and anything unrecognized falls back to
//! Bangladesh / Dhaka / BDT. None of these functions can fail.

/// Country assumed when nothing better is known.
pub const DEFAULT_COUNTRY: &str = "BD";

/// Display name of [`DEFAULT_COUNTRY`].
pub const DEFAULT_COUNTRY_NAME: &str = "Bangladesh";

/// City assumed when the timezone matches no known fragment.
pub const DEFAULT_CITY: &str = "Dhaka";

/// Currency used for unknown country codes.
pub const DEFAULT_CURRENCY: &str = "BDT";

/// Sales phone number shown for every region.
pub const DEFAULT_PHONE: &str = "+8801704439665";

/// Known city fragments, checked in order: `(fragment, country code, city)`.
const CITY_FRAGMENTS: &[(&str, &str, &str)] = &[
    ("Dhaka", "BD", "Dhaka"),
    ("Sylhet", "BD", "Sylhet"),
    ("Chittagong", "BD", "Chittagong"),
    ("Rajshahi", "BD", "Rajshahi"),
    ("Khulna", "BD", "Khulna"),
    ("Barisal", "BD", "Barisal"),
    ("Rangpur", "BD", "Rangpur"),
];

const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("US", "USD"),
    ("GB", "GBP"),
    ("EU", "EUR"),
    ("CA", "CAD"),
    ("AU", "AUD"),
    ("IN", "INR"),
    ("BD", "BDT"),
    ("AE", "AED"),
    ("SA", "SAR"),
    ("SG", "SGD"),
    ("JP", "JPY"),
];

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("US", "United States"),
    ("GB", "United Kingdom"),
    ("EU", "European Union"),
    ("CA", "Canada"),
    ("AU", "Australia"),
    ("IN", "India"),
    ("BD", "Bangladesh"),
    ("AE", "United Arab Emirates"),
    ("SA", "Saudi Arabia"),
    ("SG", "Singapore"),
    ("JP", "Japan"),
];

/// Country and city guessed from a timezone name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub country_code: String,
    pub city_name: String,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            country_code: DEFAULT_COUNTRY.to_string(),
            city_name: DEFAULT_CITY.to_string(),
        }
    }
}

/// Guesses country and city from an IANA timezone name.
///
/// The first fragment contained in `timezone_name` wins; with no match the default
/// Bangladesh / Dhaka pair is returned.
///
/// # Examples
///
/// ```
/// use tourfinder::locale::resolve;
///
/// assert_eq!(resolve("Asia/Dhaka").city_name, "Dhaka");
/// assert_eq!(resolve("Europe/Paris").country_code, "BD");
/// ```
#[must_use]
pub fn resolve(timezone_name: &str) -> Resolution {
    CITY_FRAGMENTS
        .iter()
        .find(|(fragment, _, _)| timezone_name.contains(*fragment))
        .map_or_else(Resolution::default, |(_, country, city)| Resolution {
            country_code: (*country).to_string(),
            city_name: (*city).to_string(),
        })
}

/// ISO 4217 currency for a country code; [`DEFAULT_CURRENCY`] when unknown.
#[must_use]
pub fn currency_for(country_code: &str) -> &'static str {
    lookup(COUNTRY_CURRENCIES, country_code).unwrap_or(DEFAULT_CURRENCY)
}

/// Display name for a country code; [`DEFAULT_COUNTRY_NAME`] when unknown.
#[must_use]
pub fn country_name_for(country_code: &str) -> &'static str {
    lookup(COUNTRY_NAMES, country_code).unwrap_or(DEFAULT_COUNTRY_NAME)
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
