//! Presentation layer.
//!
//! ```text
//! AppState / catalog + GeoCurrency → view model → render_* → String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready snapshots of the listing, detail and home pages
//! - [`renderer`]: Plain-text layout of those snapshots
//! - [`helpers`]: Text utilities (capitalizing, truncation, plurals)

pub mod helpers;
pub mod renderer;
pub mod viewmodel;

pub use renderer::{render_detail, render_home, render_listing, render_not_found};
pub use viewmodel::{
    CategoryChip, DetailViewModel, EmptyState, HeaderInfo, HomeViewModel, ListingViewModel, TourCard,
};
