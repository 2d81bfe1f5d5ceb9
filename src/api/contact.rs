//! `POST /api/contact`

use super::response::{ApiError, ApiResponse};
use super::validation::{any_blank, is_valid_email, is_valid_phone};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
const ID_LEN: usize = 9;

/// Contact form body. Missing strings deserialize as empty so they are reported
/// as missing fields rather than a malformed body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub tour_interest: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactReceipt {
    pub id: String,
    pub submitted_at: String,
}

/// Validates and accepts a contact message.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] when a required field is blank or the email
/// or phone is malformed. An empty phone is treated as not given.
pub fn submit(form: &ContactForm, now: DateTime<Utc>) -> Result<ApiResponse<ContactReceipt>, ApiError> {
    if any_blank(&[&form.name, &form.email, &form.message]) {
        return Err(ApiError::validation("Missing required fields"));
    }
    if !is_valid_email(&form.email) {
        return Err(ApiError::validation("Invalid email address"));
    }
    if let Some(phone) = form.phone.as_deref().filter(|p| !p.is_empty()) {
        if !is_valid_phone(phone) {
            return Err(ApiError::validation("Invalid phone number"));
        }
    }

    let receipt = ContactReceipt {
        id: short_id(),
        submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    tracing::info!(
        id = %receipt.id,
        name = %form.name,
        email = %form.email,
        phone = ?form.phone,
        tour_interest = ?form.tour_interest,
        timestamp = %receipt.submitted_at,
        "contact form submission"
    );

    Ok(ApiResponse::ok(SUCCESS_MESSAGE, receipt))
}

fn short_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn form() -> ContactForm {
        ContactForm {
            name: "Rahim".into(),
            email: "rahim@example.com".into(),
            message: "Is Sajek open in June?".into(),
            ..ContactForm::default()
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn accepts_valid_message() {
        let response = submit(&form(), now()).unwrap();
        assert!(response.success);
        assert_eq!(response.message.as_deref(), Some(SUCCESS_MESSAGE));

        let receipt = response.data.unwrap();
        assert_eq!(receipt.id.len(), 9);
        assert!(receipt.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        assert_eq!(receipt.submitted_at, "2026-03-01T09:30:00.000Z");
    }

    #[test]
    fn rejects_missing_fields() {
        let mut missing = form();
        missing.message = "   ".into();
        assert_eq!(
            submit(&missing, now()).unwrap_err(),
            ApiError::validation("Missing required fields")
        );
    }

    #[test]
    fn rejects_bad_email_and_phone() {
        let mut bad_email = form();
        bad_email.email = "rahim@example".into();
        assert_eq!(submit(&bad_email, now()).unwrap_err().to_string(), "Invalid email address");

        let mut bad_phone = form();
        bad_phone.phone = Some("017-0443".into());
        assert_eq!(submit(&bad_phone, now()).unwrap_err().to_string(), "Invalid phone number");

        let mut empty_phone = form();
        empty_phone.phone = Some(String::new());
        assert!(submit(&empty_phone, now()).is_ok());
    }
}
