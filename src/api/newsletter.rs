//! `POST /api/newsletter`

use super::response::{ApiError, ApiResponse};
use super::validation::is_valid_email;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

const SUCCESS_MESSAGE: &str = "Successfully subscribed to our newsletter!";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterSignup {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub email: String,
    pub subscribed_at: String,
}

/// Validates and accepts a newsletter subscription.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for a blank or malformed email.
pub fn subscribe(signup: &NewsletterSignup, now: DateTime<Utc>) -> Result<ApiResponse<Subscription>, ApiError> {
    if signup.email.trim().is_empty() {
        return Err(ApiError::validation("Email is required"));
    }
    if !is_valid_email(&signup.email) {
        return Err(ApiError::validation("Invalid email address"));
    }

    let subscription = Subscription {
        email: signup.email.clone(),
        subscribed_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    tracing::info!(
        email = %subscription.email,
        timestamp = %subscription.subscribed_at,
        "newsletter subscription"
    );

    Ok(ApiResponse::ok(SUCCESS_MESSAGE, subscription))
}
