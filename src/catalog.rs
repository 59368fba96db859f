//! Catalog sources: where the full list of firm records comes from.

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::models::Firm;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog request returned {0}")]
    Status(u16),
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A read-only source returning the complete catalog on every call.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<Firm>, CatalogError>;
}

/// Catalog served as a JSON array over HTTP.
pub struct HttpCatalog {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    async fn fetch(&self) -> Result<Vec<Firm>, CatalogError> {
        let resp = self.client.get(&self.url).send().await?;
        if !resp.status().is_success() {
            return Err(CatalogError::Status(resp.status().as_u16()));
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Catalog read from a local JSON file.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CatalogSource for FileCatalog {
    async fn fetch(&self) -> Result<Vec<Firm>, CatalogError> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&data)?)
    }
}

/// Fixed in-memory catalog.
#[derive(Default)]
pub struct StaticCatalog {
    firms: Vec<Firm>,
}

impl StaticCatalog {
    pub fn new(firms: Vec<Firm>) -> Self {
        Self { firms }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<Firm>, CatalogError> {
        Ok(self.firms.clone())
    }
}

/// Pick the source for a configured location: http(s) URLs go over the network,
/// anything else is a file path.
pub fn from_location(location: &str, timeout: Duration) -> anyhow::Result<Arc<dyn CatalogSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Arc::new(HttpCatalog::new(location, timeout)?))
    } else {
        Ok(Arc::new(FileCatalog::new(location)))
    }
}
