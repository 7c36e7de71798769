//! Catalog sources.
//!
//! A catalog comes from a single JSON document, either served over HTTP or
//! read from a local file. Loading never fails the caller: any error degrades
//! to an empty catalog and is reported alongside it.

mod fetch;
mod file;
mod http;

pub use fetch::{FetchMessage, FetchTask, spawn_fetch};
pub use file::FileSource;
pub use http::HttpSource;

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};

/// Default location of the catalog document.
pub const DEFAULT_LOCATION: &str = "tools.json";

/// Where a catalog document is fetched from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch and parse the whole catalog.
    async fn fetch(&self) -> Result<Catalog>;

    /// Human-readable location, for logs and error messages.
    fn location(&self) -> &str;
}

/// Build a source for a location: `http(s)://` URLs go over HTTP, anything
/// else is a file path.
pub fn source_for(location: &str, timeout: Option<Duration>) -> Result<Arc<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Arc::new(FileSource::new(location)))
    }
}

/// Result of a load: always a catalog, plus the error that emptied it.
#[derive(Debug)]
pub struct LoadOutcome {
    pub catalog: Catalog,
    pub error: Option<CatalogError>,
}

impl LoadOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Fetch a catalog, substituting an empty one on any failure.
pub async fn load_or_empty(source: &dyn CatalogSource) -> LoadOutcome {
    info!("Fetching catalog from {}", source.location());
    match source.fetch().await {
        Ok(catalog) => {
            info!("Loaded {} tools from {}", catalog.len(), source.location());
            for issue in catalog.check() {
                warn!("Catalog issue: {}", issue);
            }
            LoadOutcome { catalog, error: None }
        }
        Err(e) => {
            warn!("Failed to load catalog from {}: {}", source.location(), e);
            LoadOutcome {
                catalog: Catalog::empty(),
                error: Some(e),
            }
        }
    }
}
