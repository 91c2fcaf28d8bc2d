//! Built-in upstream catalog sources.

/// Source tag served when `CATALOG_SOURCES` is not set.
pub const DEFAULT_SOURCE_TAG: &str = "entertainment2";

/// Upstream host backing [`DEFAULT_SOURCE_TAG`].
pub const DEFAULT_SOURCE_URL: &str = "https://hsckzy888.com";

/// Path of the upstream video-list endpoint, relative to the source URL.
pub const UPSTREAM_VOD_PATH: &str = "/api.php/provide/vod/";

/// `ac` query value selecting the video-list action.
pub const UPSTREAM_ACTION: &str = "videolist";

/// Application status code signalling a successful catalog result.
pub const RESULT_CODE_OK: i32 = 200;
