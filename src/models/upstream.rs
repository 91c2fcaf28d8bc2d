//! Wire models for the upstream `provide/vod` API.

use serde::{Deserialize, Deserializer};
use std::fmt;

/// One page of the upstream video list.
#[derive(Debug, Deserialize)]
pub struct UpstreamPage {
    #[serde(default)]
    pub list: Vec<UpstreamRecord>,
}

/// A single upstream video record; only the fields the proxy maps.
#[derive(Debug, Deserialize)]
pub struct UpstreamRecord {
    pub vod_id: UpstreamId,
    #[serde(default)]
    pub vod_name: String,
    #[serde(default)]
    pub vod_pic: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub vod_score: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub vod_year: Option<String>,
}

/// Upstream ids arrive as numbers from some hosts and strings from others.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum UpstreamId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UpstreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpstreamId::Number(n) => write!(f, "{}", n),
            UpstreamId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Accept a string, a number, or null. Empty strings and null become `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
