//! Catalog service: resolve a source, fetch one upstream page, normalize it.

use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::config::CacheTimeProvider;
use crate::constants::{CODE_SOURCE_NOT_FOUND, ERR_CATALOG_FETCH_FAILED, ERR_UNKNOWN_SOURCE};
use crate::errors::ApiError;
use crate::models::{CatalogResult, Item, PageRequest};
use crate::services::{CatalogUpstream, SourceRegistry};

/// A normalized page plus the cache lifetime to advertise for it.
#[derive(Debug)]
pub struct CatalogPage {
    pub result: CatalogResult,
    pub max_age_secs: u64,
}

pub struct CatalogService {
    sources: SourceRegistry,
    upstream: Arc<dyn CatalogUpstream>,
    cache_time: Arc<dyn CacheTimeProvider>,
}

impl CatalogService {
    pub fn new(
        sources: SourceRegistry,
        upstream: Arc<dyn CatalogUpstream>,
        cache_time: Arc<dyn CacheTimeProvider>,
    ) -> Self {
        Self {
            sources,
            upstream,
            cache_time,
        }
    }

    pub fn sources(&self) -> &SourceRegistry {
        &self.sources
    }

    pub async fn fetch_page(
        &self,
        source_tag: &str,
        request: &PageRequest,
    ) -> Result<CatalogPage, ApiError> {
        let source = self.sources.get(source_tag).ok_or_else(|| {
            warn!("Unknown catalog source requested: {}", source_tag);
            ApiError::NotFound {
                code: CODE_SOURCE_NOT_FOUND.to_string(),
                message: format!("{}: {}", ERR_UNKNOWN_SOURCE, source_tag),
            }
        })?;

        if !request.is_aligned() {
            warn!(
                "Offset {} is not a multiple of limit {}; serving upstream page {}",
                request.start,
                request.limit,
                request.upstream_page()
            );
        }

        debug!(
            "Fetching {} page {} (limit {}, category '{}')",
            source.tag,
            request.upstream_page(),
            request.limit,
            request.category
        );

        let records = self
            .upstream
            .fetch_records(source, request)
            .await
            .map_err(|e| {
                error!("Upstream fetch for {} failed: {}", source.tag, e);
                ApiError::Upstream {
                    message: ERR_CATALOG_FETCH_FAILED.to_string(),
                    details: e.to_string(),
                }
            })?;

        let list: Vec<Item> = records
            .into_iter()
            .map(|record| Item::from_upstream(record, &source.tag))
            .collect();

        info!(
            "Fetched {} items from {} page {}",
            list.len(),
            source.tag,
            request.upstream_page()
        );

        Ok(CatalogPage {
            result: CatalogResult::success(list),
            max_age_secs: self.cache_time.cache_time_secs(),
        })
    }
}
