//! Plain-text rendering of the view models.
//!
//! Each view model implements [`fmt::Display`]; the `render_*` functions are
//! thin wrappers that produce a `String`.
//!
//! ```rust
//! use tourfinder::app::ViewMode;
//! use tourfinder::domain::SortKey;
//! use tourfinder::locale::GeoCurrency;
//! use tourfinder::ui::{render_listing, ListingViewModel};
//!
//! let vm = ListingViewModel::new(&[], &GeoCurrency::default(), SortKey::Rating, ViewMode::Grid);
//! assert!(render_listing(&vm).contains("No tours found"));
//! ```

use crate::app::ViewMode;
use crate::ui::helpers::{plural, truncate};
use crate::ui::viewmodel::{DetailViewModel, HomeViewModel, ListingViewModel, TourCard};
use std::fmt;

const LIST_DESCRIPTION_WIDTH: usize = 96;

#[must_use]
pub fn render_listing(vm: &ListingViewModel) -> String {
    vm.to_string()
}

#[must_use]
pub fn render_detail(vm: &DetailViewModel) -> String {
    vm.to_string()
}

#[must_use]
pub fn render_home(vm: &HomeViewModel) -> String {
    vm.to_string()
}

/// Text for a detail page whose slug matched nothing.
#[must_use]
pub fn render_not_found(slug: &str) -> String {
    format!("Tour not found: {slug}\n")
}

fn write_rating(f: &mut fmt::Formatter<'_>, card: &TourCard) -> fmt::Result {
    write!(
        f,
        "★ {:.1} ({})",
        card.rating,
        plural(card.reviews_count as usize, "review")
    )
}

fn write_grid_card(f: &mut fmt::Formatter<'_>, card: &TourCard) -> fmt::Result {
    write!(f, "  {} | {} | {} | {} | ", card.title, card.location, card.duration, card.price)?;
    write_rating(f, card)?;
    writeln!(f)
}

fn write_list_card(f: &mut fmt::Formatter<'_>, card: &TourCard) -> fmt::Result {
    writeln!(f, "  {}  [{}]", card.title, card.slug)?;
    writeln!(f, "    {}", truncate(&card.short_description, LIST_DESCRIPTION_WIDTH))?;
    write!(f, "    {} · {} · {} · ", card.location, card.duration, card.difficulty)?;
    write_rating(f, card)?;
    writeln!(f)?;
    writeln!(f, "    From {}", card.price)
}

impl fmt::Display for ListingViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({} found, sorted by {})",
            self.header.title,
            plural(self.header.result_count, "tour"),
            self.header.sort
        )?;
        writeln!(f)?;

        if let Some(empty) = &self.empty_state {
            writeln!(f, "  {}", empty.title)?;
            return writeln!(f, "  {}", empty.message);
        }

        for card in &self.cards {
            match self.view_mode {
                ViewMode::Grid => write_grid_card(f, card)?,
                ViewMode::List => {
                    write_list_card(f, card)?;
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let card = &self.card;
        writeln!(f, "{}", card.title)?;
        write!(f, "{} · {} · {} · ", card.location, card.duration, card.difficulty)?;
        write_rating(f, card)?;
        writeln!(f)?;
        writeln!(f, "Category: {}  Group size: {}", self.category, self.group_size)?;
        writeln!(f, "Price: {} per person", card.price)?;
        writeln!(f)?;
        writeln!(f, "{}", self.long_description)?;

        if !self.highlights.is_empty() {
            writeln!(f, "\nHighlights")?;
            for highlight in &self.highlights {
                writeln!(f, "  - {highlight}")?;
            }
        }

        if !self.itinerary.is_empty() {
            writeln!(f, "\nItinerary")?;
            for item in &self.itinerary {
                writeln!(f, "  {:<12} {} ({})", item.time, item.activity, item.duration)?;
            }
        }

        if !self.includes.is_empty() {
            writeln!(f, "\nIncludes")?;
            for include in &self.includes {
                writeln!(f, "  - {include}")?;
            }
        }

        if !self.related.is_empty() {
            writeln!(f, "\nYou may also like")?;
            for related in &self.related {
                write_grid_card(f, related)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for HomeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Featured tours")?;
        for card in &self.featured {
            write_grid_card(f, card)?;
        }

        if !self.categories.is_empty() {
            writeln!(f, "\nBrowse by category")?;
            for chip in &self.categories {
                writeln!(f, "  {} ({})", chip.name, chip.slug)?;
            }
        }

        writeln!(f)?;
        match &self.city {
            Some(city) => writeln!(f, "Call us: {} ({}, {})", self.phone, city, self.country),
            None => writeln!(f, "Call us: {}", self.phone),
        }
    }
}
