//! Catalog-related custom validators.

use validator::ValidationError;

use crate::constants::ERR_INVALID_CATEGORY;

/// Custom validator for the `t` query field.
/// Category ids are numeric; an empty value means "all categories".
pub fn validate_category_id(category: &str) -> Result<(), ValidationError> {
    if category.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("invalid_category");
        error.message = Some(ERR_INVALID_CATEGORY.into());
        Err(error)
    }
}
