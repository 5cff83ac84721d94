//! Validation helpers shared by the batch writer, the search executor and the
//! service.

use crate::errors::AlgoliaError;

/// Ensure a required string field is present.
///
/// Whitespace-only values are treated as empty.
///
/// # Example
///
/// ```
/// use algolia_repository::utils::require_non_empty;
///
/// assert!(require_non_empty("indexName", "products").is_ok());
/// assert!(require_non_empty("indexName", "  ").is_err());
/// ```
pub fn require_non_empty(field_name: &str, value: &str) -> Result<(), AlgoliaError> {
    if value.trim().is_empty() {
        return Err(AlgoliaError::validation(format!(
            "{} is required",
            field_name
        )));
    }
    Ok(())
}

/// Ensure an index name is present.
pub fn require_index_name(index_name: &str) -> Result<(), AlgoliaError> {
    require_non_empty("indexName", index_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("apiKey", "secret").is_ok());
    }

    #[test]
    fn test_require_index_name_empty() {
        let result = require_index_name("");
        assert!(matches!(
            result.unwrap_err(),
            AlgoliaError::ValidationError(msg) if msg == "indexName is required"
        ));
    }

    #[test]
    fn test_require_index_name_whitespace() {
        assert!(matches!(
            require_index_name(" \t").unwrap_err(),
            AlgoliaError::ValidationError(_)
        ));
    }
}
