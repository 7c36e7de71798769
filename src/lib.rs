//! tooldir - browse a JSON directory of tools
//!
//! Loads a catalog of tool records from a URL or file and derives the views a
//! directory UI needs: categories with counts, filtered and paginated
//! listings, and lookup by slug.

pub mod catalog;
pub mod error;
pub mod query;
pub mod source;

pub use catalog::{Catalog, ToolRecord};
pub use error::{CatalogError, Result};
pub use query::QueryState;
