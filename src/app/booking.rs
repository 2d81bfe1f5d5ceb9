//! Booking page state: package picker and form fields.

use crate::api::booking::{BookingRequest, StartDate, TERMS_REQUIRED};
use crate::api::{ApiError, ApiRequest};
use crate::catalog::find_by_title;
use crate::domain::Tour;

pub const BOOKING_PATH: &str = "/api/booking";

/// Cursor over the catalog for choosing a tour package.
///
/// Moving past either end wraps around. An empty catalog has no selection and
/// ignores every move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PackagePicker {
    index: usize,
    len: usize,
}

impl PackagePicker {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.index)
        }
    }

    /// The selected tour within `tours`, the slice this picker was built for.
    #[must_use]
    pub fn current<'a>(&self, tours: &'a [Tour]) -> Option<&'a Tour> {
        self.selected().and_then(|i| tours.get(i))
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Selects `index`. Out-of-range indices are ignored; returns whether the
    /// selection was applied.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            tracing::debug!(index, len = self.len, "package index out of range");
            false
        }
    }

    /// Selects the tour whose title matches `title` ignoring case.
    pub fn select_by_title(&mut self, tours: &[Tour], title: &str) -> bool {
        let position = find_by_title(tours, title)
            .and_then(|tour| tours.iter().position(|t| t.id == tour.id));

        match position {
            Some(index) => self.select(index),
            None => {
                tracing::debug!(title = %title, "no package with that title");
                false
            }
        }
    }
}

/// A single field edit on the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingField {
    Title(String),
    FirstName(String),
    LastName(String),
    Email(String),
    Phone(String),
    StartDay(String),
    StartMonth(String),
    StartYear(String),
    TravelInsurance(bool),
    TermsAccepted(bool),
}

/// Values entered on the booking form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingForm {
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: StartDate,
    pub travel_insurance: bool,
    pub terms_accepted: bool,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            title: "Mr.".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            start_date: StartDate::default(),
            travel_insurance: false,
            terms_accepted: false,
        }
    }
}

impl BookingForm {
    pub fn apply(&mut self, field: BookingField) {
        match field {
            BookingField::Title(v) => self.title = v,
            BookingField::FirstName(v) => self.first_name = v,
            BookingField::LastName(v) => self.last_name = v,
            BookingField::Email(v) => self.email = v,
            BookingField::Phone(v) => self.phone = v,
            BookingField::StartDay(v) => self.start_date.day = v,
            BookingField::StartMonth(v) => self.start_date.month = v,
            BookingField::StartYear(v) => self.start_date.year = v,
            BookingField::TravelInsurance(v) => self.travel_insurance = v,
            BookingField::TermsAccepted(v) => self.terms_accepted = v,
        }
    }

    #[must_use]
    pub fn to_request(&self, tour: &Tour) -> BookingRequest {
        BookingRequest {
            title: self.title.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            start_date: self.start_date.clone(),
            tour_slug: tour.slug.clone(),
            travel_insurance: self.travel_insurance,
            terms_accepted: self.terms_accepted,
        }
    }

    /// Builds the booking endpoint request for `tour`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] with the terms message when the terms
    /// box is unticked, and [`ApiError::Internal`] if the body cannot be encoded.
    pub fn submit(&self, tour: &Tour) -> Result<ApiRequest, ApiError> {
        if !self.terms_accepted {
            return Err(ApiError::validation(TERMS_REQUIRED));
        }
        ApiRequest::post_json(BOOKING_PATH, &self.to_request(tour))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, JsonCatalog};

    #[test]
    fn picker_wraps_both_ways() {
        let mut picker = PackagePicker::new(3);
        picker.prev();
        assert_eq!(picker.selected(), Some(2));
        picker.next();
        assert_eq!(picker.selected(), Some(0));
        picker.next();
        picker.next();
        picker.next();
        assert_eq!(picker.selected(), Some(0));
    }

    #[test]
    fn picker_ignores_out_of_range() {
        let mut picker = PackagePicker::new(2);
        assert!(picker.select(1));
        assert!(!picker.select(2));
        assert_eq!(picker.selected(), Some(1));
    }

    #[test]
    fn empty_picker_has_no_selection() {
        let mut picker = PackagePicker::new(0);
        picker.next();
        picker.prev();
        assert_eq!(picker.selected(), None);
        assert!(picker.current(&[]).is_none());
    }

    #[test]
    fn picker_selects_by_title() {
        let catalog = JsonCatalog::embedded().unwrap();
        let mut picker = PackagePicker::new(catalog.tours().len());
        assert!(picker.select_by_title(catalog.tours(), "old dhaka heritage walk"));
        assert_eq!(picker.current(catalog.tours()).unwrap().slug, "old-dhaka-heritage-walk");
        assert!(!picker.select_by_title(catalog.tours(), "Old Dhaka"));
    }

    #[test]
    fn submit_requires_terms() {
        let catalog = JsonCatalog::embedded().unwrap();
        let tour = &catalog.tours()[0];
        let mut form = BookingForm::default();
        assert_eq!(form.submit(tour).unwrap_err().to_string(), TERMS_REQUIRED);

        form.apply(BookingField::TermsAccepted(true));
        form.apply(BookingField::FirstName("Karim".into()));
        let request = form.submit(tour).unwrap();
        assert_eq!(request.path, BOOKING_PATH);

        let body: BookingRequest = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body.tour_slug, tour.slug);
        assert_eq!(body.first_name, "Karim");
        assert!(body.terms_accepted);
    }
}
