//! Side effects requested by the event handler.
//!
//! The handler never performs I/O itself. It returns [`Action`]s and the caller
//! (the CLI, or a test) decides how to carry them out.

use crate::api::ApiRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Send a request to one of the form endpoints.
    Submit(ApiRequest),

    /// Show a blocking message to the user, such as a validation prompt.
    Notify(String),
}
