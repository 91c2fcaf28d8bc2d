use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UpstreamRecord;

/// A catalog entry in the shape every source is normalized to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Upstream identifier, stringified
    #[schema(example = "40213")]
    pub id: String,
    #[schema(example = "The Long Road")]
    pub title: String,
    /// Poster image URL
    #[schema(example = "https://img.example.com/poster/40213.jpg")]
    pub poster: String,
    /// Score, empty when upstream has none
    #[schema(example = "8.1")]
    pub rate: String,
    /// Release year, empty when upstream has none
    #[schema(example = "2023")]
    pub year: String,
    /// Tag of the source that produced this item
    #[schema(example = "entertainment2")]
    pub source: String,
}

impl Item {
    /// Map one upstream record, tagging it with `source`.
    pub fn from_upstream(record: UpstreamRecord, source: &str) -> Self {
        Self {
            id: record.vod_id.to_string(),
            title: record.vod_name,
            poster: record.vod_pic,
            rate: record.vod_score.unwrap_or_default(),
            year: record.vod_year.unwrap_or_default(),
            source: source.to_string(),
        }
    }

    /// Key used to identify the item in a rendered list.
    ///
    /// Not durable: the same title at another position gets another key.
    pub fn ui_key(&self, position: usize) -> String {
        format!("{}-{}", self.title, position)
    }
}
