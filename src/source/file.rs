//! Catalog read from a local file.

use async_trait::async_trait;
use std::path::PathBuf;

use super::CatalogSource;
use crate::catalog::Catalog;
use crate::error::Result;

pub struct FileSource {
    path: PathBuf,
    display: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    async fn fetch(&self) -> Result<Catalog> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Catalog::from_json(&content)
    }

    fn location(&self) -> &str {
        &self.display
    }
}
