use std::time::Duration;

use crate::error::map_reqwest_error;
use crate::{ClientError, VolumePage, PAGE_SIZE};

/// Connection parameters for the live catalog endpoint.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/books/v1".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// A source of catalog pages. The controller only ever talks to this trait,
/// so tests can substitute an in-process source for the network one.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches one page of results for `query`. `page` is zero-based; the
    /// server offset is `page * PAGE_SIZE`. A successful response carries at
    /// most `PAGE_SIZE` items.
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VolumePage, ClientError>;
}

/// The live `CatalogSource`: one GET per call, no retries, no caching.
#[derive(Debug, Clone)]
pub struct ReqwestCatalog {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestCatalog {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn volumes_url(&self) -> String {
        format!("{}/volumes", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl CatalogSource for ReqwestCatalog {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<VolumePage, ClientError> {
        let offset = page * PAGE_SIZE;
        shelf_logging::shelf_debug!("catalog fetch: query={query:?} page={page} offset={offset}");

        let max_results = PAGE_SIZE.to_string();
        let start_index = offset.to_string();
        let response = self
            .client
            .get(self.volumes_url())
            .query(&[
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("startIndex", start_index.as_str()),
            ])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<VolumePage>().await.map_err(map_reqwest_error)
    }
}
