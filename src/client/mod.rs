//! HTTP client for the proxy's own catalog endpoints.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::models::{CatalogResult, PageRequest};
use crate::pager::PageSource;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("catalog request failed with status {status}")]
    Http { status: u16 },
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid catalog url: {0}")]
    Url(#[from] url::ParseError),
}

/// Fetches pages of one source from a running proxy.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
    source: String,
}

impl CatalogClient {
    pub fn new(
        base_url: Url,
        source: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            source: source.into(),
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// `GET {base}/api/{source}?limit=..&start=..&t=..`
    pub fn page_url(&self, request: &PageRequest) -> Result<Url, ClientError> {
        let mut url = self.base_url.join(&format!("/api/{}", self.source))?;
        url.query_pairs_mut()
            .append_pair("limit", &request.limit.to_string())
            .append_pair("start", &request.start.to_string())
            .append_pair("t", &request.category);
        Ok(url)
    }
}

#[async_trait]
impl PageSource for CatalogClient {
    type Error = ClientError;

    async fn fetch_page(&self, request: &PageRequest) -> Result<CatalogResult, ClientError> {
        let url = self.page_url(request)?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
            });
        }
        Ok(response.json::<CatalogResult>().await?)
    }
}
