//! Path parameter parsing
//!
//! Snowflake IDs arrive as path strings. A malformed ID is indistinguishable
//! from a missing row to the caller, so parse failures map to the same
//! not-found error the lookup itself would produce.

use qna_core::Snowflake;
use qna_service::ServiceError;

use crate::response::ApiError;

/// Parse a Snowflake ID from a path segment
pub fn parse_id(raw: &str, resource: &'static str) -> Result<Snowflake, ApiError> {
    raw.parse::<Snowflake>()
        .map_err(|_| ServiceError::not_found(resource, raw).into())
}
