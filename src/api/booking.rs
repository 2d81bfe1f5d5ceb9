//! `POST /api/booking`

use super::response::{ApiError, ApiResponse};
use super::validation::{any_blank, is_valid_email, is_valid_phone};
use crate::catalog::find_by_slug;
use crate::domain::Tour;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SUCCESS_MESSAGE: &str = "Your booking request has been submitted successfully.";
pub const TERMS_REQUIRED: &str = "Please accept the terms and conditions to proceed.";

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Start date as entered in the form's three selects.
///
/// `month` may be a number (`"3"`) or an English month name (`"March"`, `"mar"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartDate {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl StartDate {
    #[must_use]
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// The calendar date, or `None` if the parts do not form a real date.
    #[must_use]
    pub fn to_date(&self) -> Option<NaiveDate> {
        let day = self.day.trim().parse().ok()?;
        let year = self.year.trim().parse().ok()?;
        let month = parse_month(&self.month)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn is_blank(&self) -> bool {
        any_blank(&[&self.day, &self.month, &self.year])
    }
}

fn parse_month(month: &str) -> Option<u32> {
    let month = month.trim();
    if let Ok(number) = month.parse::<u32>() {
        return (1..=12).contains(&number).then_some(number);
    }

    let lower = month.to_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|name| name.starts_with(&lower))
        .and_then(|i| u32::try_from(i + 1).ok())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    /// Salutation (`Mr.`, `Ms.`, ...).
    pub title: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub start_date: StartDate,
    pub tour_slug: String,
    pub travel_insurance: bool,
    pub terms_accepted: bool,
}

impl Default for BookingRequest {
    fn default() -> Self {
        Self {
            title: "Mr.".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            start_date: StartDate::default(),
            tour_slug: String::new(),
            travel_insurance: false,
            terms_accepted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub reference: String,
    pub tour: String,
    pub submitted_at: String,
}

/// Validates a booking request against the catalog and accepts it.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when a required field is blank, the email or
/// phone is malformed, the start date is not a real date or lies before `now`,
/// the tour slug is unknown, or the terms were not accepted.
pub fn submit(
    request: &BookingRequest,
    tours: &[Tour],
    now: DateTime<Utc>,
) -> Result<ApiResponse<BookingConfirmation>, ApiError> {
    if any_blank(&[
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.phone,
        &request.tour_slug,
    ]) || request.start_date.is_blank()
    {
        return Err(ApiError::validation("Missing required fields"));
    }
    if !is_valid_email(&request.email) {
        return Err(ApiError::validation("Invalid email address"));
    }
    if !is_valid_phone(&request.phone) {
        return Err(ApiError::validation("Invalid phone number"));
    }

    let start = request
        .start_date
        .to_date()
        .ok_or_else(|| ApiError::validation("Invalid start date"))?;
    if start < now.date_naive() {
        return Err(ApiError::validation("Start date cannot be in the past"));
    }

    let tour = find_by_slug(tours, &request.tour_slug)
        .ok_or_else(|| ApiError::validation("Selected tour does not exist"))?;

    if !request.terms_accepted {
        return Err(ApiError::validation(TERMS_REQUIRED));
    }

    let confirmation = BookingConfirmation {
        reference: reference(),
        tour: tour.title.clone(),
        submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    tracing::info!(
        reference = %confirmation.reference,
        tour = %tour.slug,
        name = %format!("{} {} {}", request.title, request.first_name, request.last_name),
        email = %request.email,
        phone = %request.phone,
        start_date = %start,
        travel_insurance = request.travel_insurance,
        timestamp = %confirmation.submitted_at,
        "booking request submission"
    );

    Ok(ApiResponse::ok(SUCCESS_MESSAGE, confirmation))
}

fn reference() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("EN-{}", hex[..8].to_ascii_uppercase())
}
