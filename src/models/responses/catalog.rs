//! Catalog response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::constants::{MSG_CATALOG_FETCHED, RESULT_CODE_OK};
use crate::models::Item;

/// One page of normalized catalog items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogResult {
    /// Application status; 200 is the only success value
    #[schema(example = 200)]
    pub code: i32,
    #[schema(example = "Catalog page retrieved")]
    pub message: String,
    /// Items in upstream order
    pub list: Vec<Item>,
}

impl CatalogResult {
    pub fn success(list: Vec<Item>) -> Self {
        Self {
            code: RESULT_CODE_OK,
            message: MSG_CATALOG_FETCHED.to_string(),
            list,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == RESULT_CODE_OK
    }
}

/// Body returned when the upstream could not be fetched
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpstreamFailureResponse {
    /// Fixed user-facing message
    #[schema(example = "Failed to fetch catalog data")]
    pub error: String,
    /// Underlying error text
    #[schema(example = "HTTP error! Status: 503")]
    pub details: String,
}
