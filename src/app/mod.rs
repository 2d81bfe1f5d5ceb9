//! Page layer: state, events and actions.
//!
//! ```text
//! User input → Event → handle_event → AppState mutation → (render?, Vec<Action>)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the handler
//! - [`booking`]: Booking package picker and form
//! - [`handler`]: Event processing
//! - [`modes`]: Listing layout mode
//! - [`params`]: URL query parameters
//! - [`state`]: Page state and cached query results

pub mod actions;
pub mod booking;
pub mod handler;
pub mod modes;
pub mod params;
pub mod state;

pub use actions::Action;
pub use booking::{BookingField, BookingForm, PackagePicker};
pub use handler::{handle_event, Event};
pub use modes::ViewMode;
pub use params::{destination_title, PageParams};
pub use state::AppState;
