//! Company list loader.
//!
//! Fetches the static company list once, either from a local file or over
//! HTTP(S), and turns the result into a [`LoadOutcome`] for the view.

use crate::config::Config;
use crate::directory::models::Company;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while loading the company list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("invalid company list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result of a single load attempt, as consumed by the view reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The list was loaded
    Loaded(Vec<Company>),
    /// The list could not be loaded; carries a human-readable reason
    Failed(String),
}

impl From<Result<Vec<Company>, LoadError>> for LoadOutcome {
    fn from(result: Result<Vec<Company>, LoadError>) -> Self {
        match result {
            Ok(companies) => LoadOutcome::Loaded(companies),
            Err(e) => LoadOutcome::Failed(e.to_string()),
        }
    }
}

/// Where the company list lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched with a GET request
    Url(String),
    /// Read from the filesystem
    File(PathBuf),
}

impl DataSource {
    /// Interpret a configured data source string.
    ///
    /// `http://` and `https://` prefixes select [`DataSource::Url`]; anything
    /// else is treated as a path.
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            DataSource::Url(source.to_string())
        } else {
            DataSource::File(PathBuf::from(source))
        }
    }
}

/// Loader for the static company list.
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    /// HTTP client for URL sources
    client: Client,
    /// Location of the company list
    source: DataSource,
}

impl DirectoryClient {
    /// Create a new loader from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `DirectoryClient` - New loader
    pub fn new(config: &Config) -> Self {
        Self::with_source(DataSource::parse(&config.data_source))
    }

    /// Create a new loader for an explicit data source.
    pub fn with_source(source: DataSource) -> Self {
        Self {
            client: Client::new(),
            source,
        }
    }

    /// The data source this loader reads from.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Load the company list.
    ///
    /// # Returns
    /// * `Result<Vec<Company>, LoadError>` - Parsed companies or error
    ///
    /// # Details
    /// The document must be a JSON array. Entries that do not deserialize
    /// into a [`Company`] are skipped rather than failing the whole load.
    pub async fn load(&self) -> Result<Vec<Company>, LoadError> {
        let bytes = match &self.source {
            DataSource::Url(url) => self.fetch(url).await?,
            DataSource::File(path) => {
                tokio::fs::read(path).await.map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?
            }
        };
        parse_companies(&bytes)
    }

    /// Load the company list and log the result.
    ///
    /// # Returns
    /// * `LoadOutcome` - Outcome ready to be dispatched to the view
    pub async fn load_outcome(&self) -> LoadOutcome {
        let result = self.load().await;
        match &result {
            Ok(companies) => info!(count = companies.len(), source = ?self.source, "Loaded companies"),
            Err(e) => error!(source = ?self.source, "Error loading companies: {}", e),
        }
        result.into()
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

/// Parse a JSON array of company objects.
///
/// # Arguments
/// * `bytes` - Raw JSON document
///
/// # Returns
/// * `Result<Vec<Company>, LoadError>` - Companies in document order
///
/// # Details
/// Entries that are not objects, or whose fields carry the wrong JSON type,
/// are dropped with a debug log.
pub fn parse_companies(bytes: &[u8]) -> Result<Vec<Company>, LoadError> {
    let entries: Vec<Value> = serde_json::from_slice(bytes)?;

    let companies = entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value::<Company>(entry) {
            Ok(company) => Some(company),
            Err(e) => {
                debug!("Skipping malformed entry {}: {}", idx, e);
                None
            }
        })
        .collect();

    Ok(companies)
}
