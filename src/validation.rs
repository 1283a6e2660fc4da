//! Input validation helpers shared by the client and the query builders.
//!
//! The CDO service answers out-of-range values with opaque errors, so
//! everything runtime-checkable is rejected here, before any network use.

use crate::errors::Error;

/// Largest result count the API accepts for the `limit` parameter.
pub const MAX_LIMIT: i64 = 1000;

/// Validate an access token: must be a non-empty, non-blank string.
pub fn validate_token(token: &str) -> Result<(), Error> {
    if token.trim().is_empty() {
        return Err(Error::Validation(
            "token must be a non-empty string".to_string(),
        ));
    }
    Ok(())
}

/// Validate the `limit` parameter.
pub fn validate_limit(limit: i64) -> Result<(), Error> {
    if !(0..=MAX_LIMIT).contains(&limit) {
        return Err(Error::Validation(
            "limit must be between 0 and 1000".to_string(),
        ));
    }
    Ok(())
}

/// Validate a single-resource lookup identifier. An empty id would silently
/// turn a `name/id` lookup into a catalog listing, so it is rejected.
pub fn validate_resource_id(id: &str, name: &str) -> Result<(), Error> {
    if id.trim().is_empty() {
        return Err(Error::Validation(format!(
            "{} must be a non-empty string",
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Token --

    #[test]
    fn token_valid() {
        assert!(validate_token("abcdef").is_ok());
    }

    #[test]
    fn token_empty_rejected() {
        assert!(validate_token("").is_err());
    }

    #[test]
    fn token_blank_rejected() {
        assert!(validate_token("   ").is_err());
    }

    // -- Limit bounds --

    #[test]
    fn limit_in_range() {
        assert!(validate_limit(0).is_ok());
        assert!(validate_limit(25).is_ok());
        assert!(validate_limit(1000).is_ok());
    }

    #[test]
    fn limit_negative_rejected() {
        assert!(validate_limit(-1).is_err());
    }

    #[test]
    fn limit_over_max_rejected() {
        assert!(validate_limit(1001).is_err());
        assert!(validate_limit(2000).is_err());
    }

    #[test]
    fn limit_error_names_parameter() {
        let err = validate_limit(2000).unwrap_err();
        assert!(err.to_string().contains("limit"));
    }

    // -- Lookup ids --

    #[test]
    fn resource_id_valid() {
        assert!(validate_resource_id("GHCND", "dataset_id").is_ok());
    }

    #[test]
    fn resource_id_empty_rejected() {
        let err = validate_resource_id("", "dataset_id").unwrap_err();
        assert!(err.to_string().contains("dataset_id"));
    }

    #[test]
    fn resource_id_blank_rejected() {
        assert!(validate_resource_id("  ", "station_id").is_err());
    }
}
