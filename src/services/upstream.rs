//! Outbound calls to upstream catalog APIs.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use url::Url;

use crate::constants::{UPSTREAM_ACTION, UPSTREAM_VOD_PATH};
use crate::errors::UpstreamError;
use crate::models::{PageRequest, UpstreamPage, UpstreamRecord};
use crate::services::SourceConfig;

/// Fetches one page of raw records from an upstream catalog.
#[async_trait]
pub trait CatalogUpstream: Send + Sync {
    async fn fetch_records(
        &self,
        source: &SourceConfig,
        request: &PageRequest,
    ) -> Result<Vec<UpstreamRecord>, UpstreamError>;
}

/// Build the upstream video-list URL for `request`.
pub fn build_upstream_url(base: &Url, request: &PageRequest) -> Url {
    let mut url = base.clone();
    url.set_path(UPSTREAM_VOD_PATH);
    url.query_pairs_mut()
        .clear()
        .append_pair("ac", UPSTREAM_ACTION)
        .append_pair("pg", &request.upstream_page().to_string())
        .append_pair("pagesize", &request.limit.to_string())
        .append_pair("t", &request.category);
    url
}

/// [`CatalogUpstream`] backed by [`reqwest`]. One attempt per call.
#[derive(Debug, Clone)]
pub struct ReqwestUpstream {
    client: reqwest::Client,
}

impl ReqwestUpstream {
    /// Fails when the client cannot be built, e.g. for a user agent that is
    /// not a valid header value.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CatalogUpstream for ReqwestUpstream {
    async fn fetch_records(
        &self,
        source: &SourceConfig,
        request: &PageRequest,
    ) -> Result<Vec<UpstreamRecord>, UpstreamError> {
        let url = build_upstream_url(&source.upstream_url, request);
        debug!("Fetching upstream page: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
            });
        }

        let page = response.json::<UpstreamPage>().await?;
        Ok(page.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://hsckzy888.com").unwrap()
    }

    #[test]
    fn test_build_url_first_page() {
        let url = build_upstream_url(&base(), &PageRequest::new(20, 0, ""));
        assert_eq!(
            url.as_str(),
            "https://hsckzy888.com/api.php/provide/vod/?ac=videolist&pg=1&pagesize=20&t="
        );
    }

    #[test]
    fn test_build_url_second_page_with_category() {
        let url = build_upstream_url(&base(), &PageRequest::new(20, 20, "6"));
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("ac".to_string(), "videolist".to_string()),
                ("pg".to_string(), "2".to_string()),
                ("pagesize".to_string(), "20".to_string()),
                ("t".to_string(), "6".to_string()),
            ]
        );
    }

    #[test]
    fn test_new_rejects_invalid_user_agent() {
        assert!(ReqwestUpstream::new(Duration::from_secs(5), "catalog-proxy/0.1").is_ok());
        assert!(ReqwestUpstream::new(Duration::from_secs(5), "bad\nagent").is_err());
    }

    #[test]
    fn test_build_url_replaces_existing_path_and_query() {
        let base = Url::parse("https://cdn.example.com/old/path?x=1").unwrap();
        let url = build_upstream_url(&base, &PageRequest::new(25, 50, ""));
        assert_eq!(url.path(), "/api.php/provide/vod/");
        assert!(url.query().unwrap().starts_with("ac=videolist&pg=3&pagesize=25"));
    }
}
