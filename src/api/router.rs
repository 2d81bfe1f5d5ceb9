//! Request dispatch by method and path.

use super::response::{ApiError, ApiReply, ApiResponse};
use super::{booking, contact, newsletter};
use crate::catalog::CatalogSource;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            "HEAD" => Ok(Self::Head),
            "OPTIONS" => Ok(Self::Options),
            _ => Err(format!("unknown method: {s}")),
        }
    }
}

/// A request to one of the mock endpoints. The body is raw JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: String,
}

impl ApiRequest {
    #[must_use]
    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: body.into(),
        }
    }

    /// A POST whose body is `payload` serialized as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] if `payload` cannot be serialized.
    pub fn post_json<T: Serialize>(path: impl Into<String>, payload: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self::post(path, body))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endpoint {
    Contact,
    Newsletter,
    Booking,
}

impl Endpoint {
    fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let path = path.strip_suffix('/').unwrap_or(path);
        match path {
            "/api/contact" => Some(Self::Contact),
            "/api/newsletter" => Some(Self::Newsletter),
            "/api/booking" => Some(Self::Booking),
            _ => None,
        }
    }
}

/// Handles `request` with the current time.
#[must_use]
pub fn dispatch(request: &ApiRequest, catalog: &dyn CatalogSource) -> ApiReply {
    dispatch_at(request, catalog, Utc::now())
}

/// Handles `request` as if received at `now`.
///
/// Never fails: every error becomes a reply with the matching status code and a
/// `{ "success": false, "error": ... }` envelope.
#[must_use]
pub fn dispatch_at(request: &ApiRequest, catalog: &dyn CatalogSource, now: DateTime<Utc>) -> ApiReply {
    let _span = tracing::debug_span!("api_dispatch",
        method = %request.method,
        path = %request.path
    ).entered();

    match route(request, catalog, now) {
        Ok(body) => {
            tracing::debug!(status = 200, "request handled");
            ApiReply::success(body)
        }
        Err(e) => {
            match &e {
                ApiError::InvalidBody(detail) => tracing::debug!(error = %detail, "invalid request body"),
                ApiError::Internal(detail) => tracing::error!(error = %detail, "request failed"),
                other => tracing::debug!(status = other.status(), error = %other, "request rejected"),
            }
            ApiReply::from_error(&e)
        }
    }
}

fn route(
    request: &ApiRequest,
    catalog: &dyn CatalogSource,
    now: DateTime<Utc>,
) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let endpoint = Endpoint::from_path(&request.path).ok_or(ApiError::NotFound)?;
    if request.method != Method::Post {
        return Err(ApiError::MethodNotAllowed);
    }

    match endpoint {
        Endpoint::Contact => {
            let form = parse_body(&request.body)?;
            into_value(contact::submit(&form, now)?)
        }
        Endpoint::Newsletter => {
            let signup = parse_body(&request.body)?;
            into_value(newsletter::subscribe(&signup, now)?)
        }
        Endpoint::Booking => {
            let booking = parse_body(&request.body)?;
            into_value(booking::submit(&booking, catalog.tours(), now)?)
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}

fn into_value<T: Serialize>(response: ApiResponse<T>) -> Result<ApiResponse<serde_json::Value>, ApiError> {
    let data = response
        .data
        .map(serde_json::to_value)
        .transpose()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(ApiResponse {
        success: response.success,
        data,
        message: response.message,
        error: response.error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::JsonCatalog;
    use chrono::TimeZone;
    use serde_json::json;

    fn send(method: Method, path: &str, body: &str) -> ApiReply {
        let catalog = JsonCatalog::embedded().unwrap();
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body: body.to_string(),
        };
        dispatch_at(&request, &catalog, Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap())
    }

    #[test]
    fn non_post_is_rejected() {
        let reply = send(Method::Get, "/api/contact", "");
        assert_eq!(reply.status, 405);
        assert_eq!(reply.body.error.as_deref(), Some("Method not allowed"));
    }

    #[test]
    fn unknown_path_is_not_found() {
        let reply = send(Method::Post, "/api/tours", "{}");
        assert_eq!(reply.status, 404);
        assert_eq!(reply.body.error.as_deref(), Some("Not found"));
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let reply = send(Method::Post, "/api/newsletter", "{ not json");
        assert_eq!(reply.status, 400);
        assert_eq!(reply.body.error.as_deref(), Some("Invalid request body"));
    }

    #[test]
    fn validation_failure_is_bad_request() {
        let reply = send(Method::Post, "/api/contact", r#"{"name":"A","email":"a@b.co"}"#);
        assert_eq!(reply.status, 400);
        assert!(!reply.body.success);
        assert_eq!(reply.body.error.as_deref(), Some("Missing required fields"));
    }

    #[test]
    fn newsletter_success_carries_data() {
        let reply = send(Method::Post, "/api/newsletter/", r#"{"email":"x@y.io"}"#);
        assert!(reply.is_success());
        assert_eq!(
            reply.body.data,
            Some(json!({ "email": "x@y.io", "subscribedAt": "2026-04-01T08:00:00.000Z" }))
        );
    }

    #[test]
    fn method_parsing() {
        assert_eq!("post".parse::<Method>(), Ok(Method::Post));
        assert!("BREW".parse::<Method>().is_err());
    }
}
