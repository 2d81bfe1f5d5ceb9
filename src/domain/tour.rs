//! Tour and category records.
//!
//! Tours are immutable: they come from the static catalog and are never mutated at
//! runtime. Field names serialize in camelCase to match the catalog JSON files.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical difficulty rating of a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Moderate,
    Challenging,
}

impl Difficulty {
    /// Returns the lowercase wire name (`easy`, `moderate`, `challenging`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "challenging" => Ok(Self::Challenging),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// One entry of a tour's day plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryItem {
    pub time: String,
    pub activity: String,
    pub duration: String,
}

/// A tour offered in the catalog.
///
/// # Fields
///
/// - `id` / `slug`: unique identifiers with a stable 1:1 mapping
/// - `price`: non-negative integer in the base currency (BDT, no minor units)
/// - `duration`: free text such as `"3 days 2 nights"`; only its leading number is
///   ever interpreted
/// - `images`: never empty; the first entry is the thumbnail
/// - `rating`: in `[0, 5]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tour {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub price: u64,
    pub duration: String,
    pub location: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub group_size: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryItem>,
    pub images: Vec<String>,
    pub rating: f64,
    pub reviews_count: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Tour {
    /// Returns the canonical thumbnail (first image), if the tour has any.
    #[must_use]
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Number of days parsed from the leading token of `duration`.
    ///
    /// `"3 days 2 nights"` yields `Some(3)`, `"1-day trip"` yields `Some(1)`, and a
    /// duration with no leading number (`"Half day"`) yields `None`.
    #[must_use]
    pub fn leading_duration(&self) -> Option<u64> {
        self.duration
            .split_whitespace()
            .next()
            .and_then(leading_integer)
    }
}

/// Parses the integer at the start of `text`, ignoring anything after it.
///
/// Leading whitespace and a `+` sign are accepted. Returns `None` when the text does
/// not start with a digit, or starts with a negative number.
///
/// ```
/// use tourfinder::domain::leading_integer;
///
/// assert_eq!(leading_integer("15000abc"), Some(15000));
/// assert_eq!(leading_integer(" 3"), Some(3));
/// assert_eq!(leading_integer("abc"), None);
/// ```
#[must_use]
pub fn leading_integer(text: &str) -> Option<u64> {
    let trimmed = text.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits: String = unsigned.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    // Saturate rather than reject absurdly long digit runs.
    Some(digits.parse::<u64>().unwrap_or(u64::MAX))
}

/// Accent color used when rendering a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Primary,
    Gold,
    Sand,
}

/// Static category reference data. `slug` is the filter key matched against
/// [`Tour::category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: String,
    pub color: CategoryColor,
    #[serde(default)]
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_integer_reads_digit_prefix() {
        assert_eq!(leading_integer("3"), Some(3));
        assert_eq!(leading_integer("1-day"), Some(1));
        assert_eq!(leading_integer("+12"), Some(12));
        assert_eq!(leading_integer(""), None);
        assert_eq!(leading_integer("Full-day"), None);
        assert_eq!(leading_integer("-5"), None);
        assert_eq!(leading_integer("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn difficulty_parses_wire_names() {
        assert_eq!("moderate".parse::<Difficulty>(), Ok(Difficulty::Moderate));
        assert!("Moderate".parse::<Difficulty>().is_err());
        assert_eq!(Difficulty::Challenging.to_string(), "challenging");
    }

    #[test]
    fn tour_deserializes_from_camel_case() {
        let json = r#"{
            "id": 7, "slug": "sylhet-tea", "title": "Sylhet Tea Trail",
            "shortDescription": "s", "longDescription": "l", "price": 9000,
            "duration": "2 days 1 night", "location": "Sylhet", "category": "nature",
            "difficulty": "easy", "groupSize": "2-10",
            "images": ["/img/tea.jpg"], "rating": 4.4, "reviewsCount": 12
        }"#;
        let tour: Tour = serde_json::from_str(json).unwrap();
        assert_eq!(tour.difficulty, Difficulty::Easy);
        assert_eq!(tour.thumbnail(), Some("/img/tea.jpg"));
        assert_eq!(tour.leading_duration(), Some(2));
        assert!(!tour.featured);
        assert!(tour.itinerary.is_empty());
    }
}
