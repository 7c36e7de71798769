//! Catalog served over HTTP.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::CatalogSource;
use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};

/// Fetches the catalog document with a plain GET.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source for `url`. Without a timeout the request waits as long
    /// as the connection stays open.
    pub fn new(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, url: url.into() })
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    async fn fetch(&self) -> Result<Catalog> {
        debug!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                location: self.url.clone(),
            });
        }

        let body = response.text().await?;
        Catalog::from_json(&body)
    }

    fn location(&self) -> &str {
        &self.url
    }
}
