//! Event handling for the listing and booking pages.
//!
//! [`handle_event`] applies one [`Event`] to an [`AppState`] and reports whether
//! the page needs re-rendering, along with any [`Action`]s to run. Filter events
//! go through [`SearchFilters::merge`](crate::domain::SearchFilters::merge) and
//! re-run the query; nothing here performs I/O.
//!
//! # Example
//!
//! ```rust
//! use tourfinder::app::{handle_event, AppState, Event};
//! use tourfinder::catalog::JsonCatalog;
//! use tourfinder::locale::FixedTimezone;
//!
//! let catalog = JsonCatalog::embedded()?;
//! let mut state = AppState::new(&catalog, Box::new(FixedTimezone("Asia/Dhaka".into())));
//! let (render, actions) = handle_event(&mut state, &Event::SetKeyword("beach".into()))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), tourfinder::TourfinderError>(())
//! ```

use super::booking::BookingField;
use super::modes::ViewMode;
use super::params::PageParams;
use super::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Difficulty, FilterUpdate, SortKey};

/// User interactions on the listing and booking pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page shown. Resolves the display currency the first time only.
    Mount,

    /// Search box text. An empty string clears the keyword.
    SetKeyword(String),
    SelectCategory(Option<String>),
    SetMinPrice(Option<u64>),
    SetMaxPrice(Option<u64>),
    SetDuration(Option<String>),
    SetDifficulty(Option<Difficulty>),
    ClearFilters,
    SetSort(SortKey),
    SetViewMode(ViewMode),

    /// Replace filters and sort from a URL query string.
    ApplyQuery(String),

    NextPackage,
    PrevPackage,
    SelectPackage(usize),
    EditBooking(BookingField),

    /// Booking form submit button.
    SubmitBooking,
}

/// Applies `event` to `state`.
///
/// Returns whether the page should re-render and the actions to execute, in
/// order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that load data.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Mount => {
            let resolved = state.mount();
            if resolved {
                tracing::debug!(
                    currency = %state.geo.currency(),
                    city = ?state.geo.city_name(),
                    "display currency resolved"
                );
            }
            Ok((resolved, vec![]))
        }
        Event::SetKeyword(keyword) => {
            let keyword = Some(keyword.clone()).filter(|k| !k.is_empty());
            Ok((state.update_filters(FilterUpdate::Keyword(keyword)), vec![]))
        }
        Event::SelectCategory(category) => {
            Ok((state.update_filters(FilterUpdate::Category(category.clone())), vec![]))
        }
        Event::SetMinPrice(min) => Ok((state.update_filters(FilterUpdate::MinPrice(*min)), vec![])),
        Event::SetMaxPrice(max) => Ok((state.update_filters(FilterUpdate::MaxPrice(*max)), vec![])),
        Event::SetDuration(duration) => {
            Ok((state.update_filters(FilterUpdate::Duration(duration.clone())), vec![]))
        }
        Event::SetDifficulty(difficulty) => {
            Ok((state.update_filters(FilterUpdate::Difficulty(*difficulty)), vec![]))
        }
        Event::ClearFilters => {
            tracing::debug!("clearing filters");
            state.clear_filters();
            Ok((true, vec![]))
        }
        Event::SetSort(sort) => {
            if state.sort == *sort {
                return Ok((false, vec![]));
            }
            state.set_sort(*sort);
            Ok((true, vec![]))
        }
        Event::SetViewMode(mode) => {
            let changed = state.view_mode != *mode;
            state.view_mode = *mode;
            Ok((changed, vec![]))
        }
        Event::ApplyQuery(query) => {
            let params = PageParams::from_query(query);
            tracing::debug!(filters = ?params.filters, sort = %params.sort, "applying page parameters");
            Ok((state.apply_params(&params), vec![]))
        }
        Event::NextPackage => {
            state.picker.next();
            Ok((true, vec![]))
        }
        Event::PrevPackage => {
            state.picker.prev();
            Ok((true, vec![]))
        }
        Event::SelectPackage(index) => Ok((state.picker.select(*index), vec![])),
        Event::EditBooking(field) => {
            state.booking.apply(field.clone());
            Ok((true, vec![]))
        }
        Event::SubmitBooking => {
            let Some(tour) = state.selected_package() else {
                tracing::debug!("no package selected, ignoring submit");
                return Ok((false, vec![]));
            };

            match state.booking.submit(tour) {
                Ok(request) => {
                    tracing::debug!(tour = %tour.slug, "booking form submitted");
                    Ok((false, vec![Action::Submit(request)]))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "booking form rejected");
                    Ok((false, vec![Action::Notify(e.to_string())]))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::booking::TERMS_REQUIRED;
    use crate::catalog::JsonCatalog;
    use crate::locale::FixedTimezone;

    fn state() -> AppState {
        let catalog = JsonCatalog::embedded().unwrap();
        AppState::new(&catalog, Box::new(FixedTimezone("Asia/Dhaka".into())))
    }

    #[test]
    fn mount_renders_only_first_time() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Mount).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Mount).unwrap(), (false, vec![]));
    }

    #[test]
    fn empty_keyword_clears_filter() {
        let mut state = state();
        handle_event(&mut state, &Event::SetKeyword("sundarban".into())).unwrap();
        assert_eq!(state.result_ids, vec![5]);

        handle_event(&mut state, &Event::SetKeyword(String::new())).unwrap();
        assert_eq!(state.filters.keyword, None);
        assert_eq!(state.result_ids.len(), 8);
    }

    #[test]
    fn filter_events_combine() {
        let mut state = state();
        handle_event(&mut state, &Event::SelectCategory(Some("hill-tracts".into()))).unwrap();
        handle_event(&mut state, &Event::SetDifficulty(Some(Difficulty::Moderate))).unwrap();
        assert_eq!(state.result_ids, vec![7]);

        handle_event(&mut state, &Event::ClearFilters).unwrap();
        assert!(state.filters.is_empty());
    }

    #[test]
    fn sort_and_view_changes() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::SetSort(SortKey::Rating)).unwrap().0);
        assert!(handle_event(&mut state, &Event::SetSort(SortKey::Duration)).unwrap().0);
        assert_eq!(state.result_ids, vec![4, 1, 3, 5, 7, 2, 6, 8]);

        assert!(handle_event(&mut state, &Event::SetViewMode(ViewMode::List)).unwrap().0);
        assert!(!handle_event(&mut state, &Event::SetViewMode(ViewMode::List)).unwrap().0);
    }

    #[test]
    fn apply_query_maps_destination() {
        let mut state = state();
        handle_event(&mut state, &Event::ApplyQuery("?destination=international".into())).unwrap();
        assert_eq!(state.filters.keyword.as_deref(), Some("India Golden Triangle Tour"));
        // "golden" contains "old", the first word of "Old Dhaka Heritage Walk".
        assert_eq!(state.result_ids, vec![6, 8]);
    }

    #[test]
    fn submit_without_terms_notifies() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::SubmitBooking).unwrap();
        assert_eq!(actions, vec![Action::Notify(TERMS_REQUIRED.to_string())]);
    }

    #[test]
    fn submit_with_terms_emits_request() {
        let mut state = state();
        handle_event(&mut state, &Event::PrevPackage).unwrap();
        handle_event(&mut state, &Event::EditBooking(BookingField::TermsAccepted(true))).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SubmitBooking).unwrap();
        let [Action::Submit(request)] = actions.as_slice() else {
            panic!("expected a single submit action, got {actions:?}");
        };
        assert_eq!(request.path, "/api/booking");
        assert!(request.body.contains("\"tourSlug\":\"old-dhaka-heritage-walk\""));
    }
}
