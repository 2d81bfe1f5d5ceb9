//! View models for the listing, detail and home pages.
//!
//! View models are immutable snapshots built from catalog data and the session's
//! [`GeoCurrency`]. Prices are already formatted and text is display-ready; the
//! renderer only lays them out.

use crate::app::ViewMode;
use crate::catalog::{featured, find_by_slug, related, HOME_FEATURED_LIMIT};
use crate::domain::{Category, ItineraryItem, SortKey, Tour};
use crate::locale::GeoCurrency;
use crate::ui::helpers::capitalize;

pub const EMPTY_TITLE: &str = "No tours found";
pub const EMPTY_MESSAGE: &str = "Try adjusting your search criteria or browse all available tours.";

/// One tour as shown in a listing or a featured strip.
#[derive(Debug, Clone, PartialEq)]
pub struct TourCard {
    pub slug: String,
    pub title: String,
    pub short_description: String,
    pub location: String,
    pub duration: String,
    /// Capitalized difficulty, e.g. `"Moderate"`.
    pub difficulty: String,
    pub rating: f64,
    pub reviews_count: u32,
    pub price: String,
    pub thumbnail: Option<String>,
}

impl TourCard {
    #[must_use]
    pub fn new(tour: &Tour, geo: &GeoCurrency) -> Self {
        Self {
            slug: tour.slug.clone(),
            title: tour.title.clone(),
            short_description: tour.short_description.clone(),
            location: tour.location.clone(),
            duration: tour.duration.clone(),
            difficulty: capitalize(tour.difficulty.as_str()),
            rating: tour.rating,
            reviews_count: tour.reviews_count,
            price: geo.format_tour_price(tour.price),
            thumbnail: tour.thumbnail().map(String::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: EMPTY_TITLE.to_string(),
            message: EMPTY_MESSAGE.to_string(),
        }
    }
}

/// Header line of the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub result_count: usize,
    pub sort: SortKey,
}

/// The tour listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingViewModel {
    pub header: HeaderInfo,
    pub cards: Vec<TourCard>,
    pub view_mode: ViewMode,
    /// Present exactly when `cards` is empty.
    pub empty_state: Option<EmptyState>,
}

impl ListingViewModel {
    #[must_use]
    pub fn new(results: &[&Tour], geo: &GeoCurrency, sort: SortKey, view_mode: ViewMode) -> Self {
        let cards: Vec<TourCard> = results.iter().map(|tour| TourCard::new(tour, geo)).collect();
        let empty_state = cards.is_empty().then(EmptyState::default);

        Self {
            header: HeaderInfo {
                title: "All Tours".to_string(),
                result_count: cards.len(),
                sort,
            },
            cards,
            view_mode,
            empty_state,
        }
    }
}

/// The tour detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailViewModel {
    pub card: TourCard,
    pub long_description: String,
    pub group_size: String,
    pub category: String,
    pub images: Vec<String>,
    pub highlights: Vec<String>,
    pub includes: Vec<String>,
    pub itinerary: Vec<ItineraryItem>,
    pub related: Vec<TourCard>,
}

impl DetailViewModel {
    /// Builds the detail page for `slug`, or `None` if no tour has that slug.
    #[must_use]
    pub fn for_slug(tours: &[Tour], categories: &[Category], slug: &str, geo: &GeoCurrency) -> Option<Self> {
        let tour = find_by_slug(tours, slug)?;

        let category = categories
            .iter()
            .find(|c| c.slug == tour.category)
            .map_or_else(|| tour.category.clone(), |c| c.name.clone());

        Some(Self {
            card: TourCard::new(tour, geo),
            long_description: tour.long_description.clone(),
            group_size: tour.group_size.clone(),
            category,
            images: tour.images.clone(),
            highlights: tour.highlights.clone(),
            includes: tour.includes.clone(),
            itinerary: tour.itinerary.clone(),
            related: related(tours, tour).into_iter().map(|t| TourCard::new(t, geo)).collect(),
        })
    }
}

/// A category link on the home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    pub slug: String,
    pub name: String,
    pub icon: String,
}

/// The home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeViewModel {
    pub featured: Vec<TourCard>,
    pub categories: Vec<CategoryChip>,
    pub phone: String,
    pub country: String,
    /// `None` until the locale has been resolved.
    pub city: Option<String>,
}

impl HomeViewModel {
    #[must_use]
    pub fn new(tours: &[Tour], categories: &[Category], geo: &GeoCurrency) -> Self {
        Self {
            featured: featured(tours)
                .into_iter()
                .take(HOME_FEATURED_LIMIT)
                .map(|t| TourCard::new(t, geo))
                .collect(),
            categories: categories
                .iter()
                .filter(|c| c.featured)
                .map(|c| CategoryChip {
                    slug: c.slug.clone(),
                    name: c.name.clone(),
                    icon: c.icon.clone(),
                })
                .collect(),
            phone: geo.phone_display().to_string(),
            country: geo.country_name().to_string(),
            city: geo.city_name().map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, JsonCatalog};
    use crate::locale::{DisplayLocale, FixedTimezone};

    fn geo() -> GeoCurrency {
        GeoCurrency::detect(&FixedTimezone("Asia/Dhaka".into()), DisplayLocale::EnUs)
    }

    #[test]
    fn empty_listing_has_empty_state() {
        let vm = ListingViewModel::new(&[], &geo(), SortKey::Rating, ViewMode::Grid);
        assert_eq!(vm.header.result_count, 0);
        assert_eq!(vm.empty_state, Some(EmptyState::default()));
    }

    #[test]
    fn card_formats_price_and_difficulty() {
        let catalog = JsonCatalog::embedded().unwrap();
        let card = TourCard::new(&catalog.tours()[1], &geo());
        assert_eq!(card.price, "BDT\u{a0}18,000");
        assert_eq!(card.difficulty, "Moderate");
        assert!(card.thumbnail.is_some());
    }

    #[test]
    fn detail_includes_related() {
        let catalog = JsonCatalog::embedded().unwrap();
        let vm = DetailViewModel::for_slug(
            catalog.tours(),
            catalog.categories(),
            "bandarban-hill-tribe-tour",
            &geo(),
        )
        .unwrap();
        assert_eq!(vm.category, "Hill Tracts");
        let related: Vec<&str> = vm.related.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(related, vec!["sajek-valley-cloud-retreat"]);
    }

    #[test]
    fn detail_for_unknown_slug_is_none() {
        let catalog = JsonCatalog::embedded().unwrap();
        assert!(DetailViewModel::for_slug(catalog.tours(), catalog.categories(), "nope", &geo()).is_none());
    }

    #[test]
    fn home_shows_three_featured() {
        let catalog = JsonCatalog::embedded().unwrap();
        let vm = HomeViewModel::new(catalog.tours(), catalog.categories(), &GeoCurrency::default());
        let slugs: Vec<&str> = vm.featured.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["cox-bazar-beach-paradise", "saint-martin-island-escape", "bandarban-hill-tribe-tour"]
        );
        assert_eq!(vm.categories.len(), 3);
        assert_eq!(vm.phone, "+8801704439665");
        assert_eq!(vm.city, None);
    }
}
