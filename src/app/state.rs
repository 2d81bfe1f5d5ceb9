//! Page state for the listing and booking pages.
//!
//! [`AppState`] owns a snapshot of the catalog, the current filters and sort
//! order, and the cached query result. Results are stored as tour ids in display
//! order and recomputed by [`AppState::apply_query`] whenever a filter changes.
//!
//! # Example
//!
//! ```rust
//! use tourfinder::app::AppState;
//! use tourfinder::catalog::JsonCatalog;
//! use tourfinder::domain::FilterUpdate;
//! use tourfinder::locale::FixedTimezone;
//!
//! let catalog = JsonCatalog::embedded()?;
//! let mut state = AppState::new(&catalog, Box::new(FixedTimezone("Asia/Dhaka".into())));
//! state.update_filters(FilterUpdate::Category(Some("beach".into())));
//! assert_eq!(state.results().len(), 2);
//! # Ok::<(), tourfinder::TourfinderError>(())
//! ```

use super::booking::{BookingForm, PackagePicker};
use super::modes::ViewMode;
use super::params::PageParams;
use crate::catalog::{query, CatalogSource};
use crate::domain::{Category, FilterUpdate, SearchFilters, SortKey, Tour};
use crate::locale::{DisplayLocale, GeoCurrency, TimezoneSource};
use crate::ui::ListingViewModel;
use std::fmt;

pub struct AppState {
    /// Catalog snapshot, in catalog order.
    pub tours: Vec<Tour>,

    pub categories: Vec<Category>,

    pub filters: SearchFilters,

    pub sort: SortKey,

    pub view_mode: ViewMode,

    /// Ids of the tours matching `filters`, in `sort` order.
    ///
    /// Only `apply_query` writes this.
    pub result_ids: Vec<u32>,

    /// Display currency. Unresolved until the first `Mount`.
    pub geo: GeoCurrency,

    pub picker: PackagePicker,

    pub booking: BookingForm,

    timezone: Box<dyn TimezoneSource>,
}

impl AppState {
    /// Creates page state over a copy of `catalog` with the default locale.
    ///
    /// The query runs immediately, so `results()` holds the whole catalog sorted
    /// by rating.
    #[must_use]
    pub fn new(catalog: &dyn CatalogSource, timezone: Box<dyn TimezoneSource>) -> Self {
        Self::with_locale(catalog, timezone, DisplayLocale::default())
    }

    #[must_use]
    pub fn with_locale(
        catalog: &dyn CatalogSource,
        timezone: Box<dyn TimezoneSource>,
        locale: DisplayLocale,
    ) -> Self {
        let tours = catalog.tours().to_vec();
        let picker = PackagePicker::new(tours.len());

        let mut state = Self {
            tours,
            categories: catalog.categories().to_vec(),
            filters: SearchFilters::default(),
            sort: SortKey::default(),
            view_mode: ViewMode::default(),
            result_ids: Vec::new(),
            geo: GeoCurrency::unresolved(locale),
            picker,
            booking: BookingForm::default(),
            timezone,
        };
        state.apply_query();
        state
    }

    /// Resolves the display currency on first call; later calls do nothing.
    ///
    /// Returns `true` if the locale was resolved by this call.
    pub fn mount(&mut self) -> bool {
        self.geo.resolve_once(self.timezone.as_ref())
    }

    /// Re-runs the query with the current filters and sort order.
    ///
    /// Returns `true` if the result sequence changed.
    pub fn apply_query(&mut self) -> bool {
        let ids: Vec<u32> = query(&self.tours, &self.filters, self.sort)
            .into_iter()
            .map(|tour| tour.id)
            .collect();

        tracing::debug!(
            result_count = ids.len(),
            catalog_len = self.tours.len(),
            "query applied"
        );

        if ids == self.result_ids {
            false
        } else {
            self.result_ids = ids;
            true
        }
    }

    /// Replaces one filter field and re-runs the query.
    pub fn update_filters(&mut self, update: FilterUpdate) -> bool {
        self.filters = self.filters.merge(update);
        self.apply_query()
    }

    pub fn clear_filters(&mut self) -> bool {
        self.filters = SearchFilters::default();
        self.apply_query()
    }

    pub fn set_sort(&mut self, sort: SortKey) -> bool {
        self.sort = sort;
        self.apply_query()
    }

    /// Replaces filters and sort with those from a page URL and preselects the
    /// named booking package, if any.
    pub fn apply_params(&mut self, params: &PageParams) -> bool {
        self.filters = params.filters.clone();
        self.sort = params.sort;

        let picked = params
            .package
            .as_deref()
            .is_some_and(|title| self.picker.select_by_title(&self.tours, title));

        self.apply_query() || picked
    }

    /// Tours in the current result, in display order.
    #[must_use]
    pub fn results(&self) -> Vec<&Tour> {
        self.result_ids
            .iter()
            .filter_map(|id| self.tours.iter().find(|t| t.id == *id))
            .collect()
    }

    /// Tour currently chosen on the booking page.
    #[must_use]
    pub fn selected_package(&self) -> Option<&Tour> {
        self.picker.current(&self.tours)
    }

    /// Listing page snapshot for the current results.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListingViewModel {
        ListingViewModel::new(&self.results(), &self.geo, self.sort, self.view_mode)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("tours", &self.tours.len())
            .field("filters", &self.filters)
            .field("sort", &self.sort)
            .field("view_mode", &self.view_mode)
            .field("result_ids", &self.result_ids)
            .field("geo", &self.geo)
            .field("picker", &self.picker)
            .finish_non_exhaustive()
    }
}
