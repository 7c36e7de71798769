//! Catalog query engine.
//!
//! Pure functions from a catalog plus a [`QueryState`] to the views a UI
//! renders:
//! - category enumeration with counts
//! - filtered and paginated listings
//! - lookup by slug for the detail view
//! - icon classification
//!
//! Nothing here holds state between calls; recompute freely on every change.

mod classify;
mod engine;
mod lookup;
mod pagination;
mod state;

pub use classify::IconClass;
pub use engine::{CategoryCount, Listing, categories, filter, listing, matches};
pub use lookup::{lookup, lookup_index};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageMarker, page_bounds, page_window, total_pages};
pub use state::{ALL_CATEGORIES, QueryState};
