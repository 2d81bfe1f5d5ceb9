//! Mock form endpoints.
//!
//! Three JSON endpoints accept form submissions, validate them, log them and
//! answer with a [`ApiResponse`] envelope. Nothing is persisted and nothing is
//! sent anywhere.
//!
//! | Path              | Success message                                              |
//! |-------------------|--------------------------------------------------------------|
//! | `/api/contact`    | Thank you for your message! We will get back to you soon.   |
//! | `/api/newsletter` | Successfully subscribed to our newsletter!                   |
//! | `/api/booking`    | Your booking request has been submitted successfully.        |
//!
//! Requests are routed with [`dispatch`]; the per-endpoint functions can also be
//! called directly with typed bodies.

pub mod booking;
pub mod contact;
pub mod newsletter;
pub mod response;
pub mod router;
pub mod validation;

pub use booking::{BookingConfirmation, BookingRequest, StartDate};
pub use contact::{ContactForm, ContactReceipt};
pub use newsletter::{NewsletterSignup, Subscription};
pub use response::{ApiError, ApiReply, ApiResponse};
pub use router::{dispatch, dispatch_at, ApiRequest, Method};
pub use validation::{is_valid_email, is_valid_phone};
