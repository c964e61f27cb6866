//! Error taxonomy for the SEO core.
//!
//! Nothing in this crate is allowed to stop a page from rendering: a schema
//! failure drops that one structured-data block, an unavailable head turns
//! the apply into a no-op, and a missing store entry is not an error at all.

use thiserror::Error;

/// Errors from structured-data builders.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A required field of the source entity is missing or empty.
    #[error("invalid {entity}: required field '{field}' is missing or empty")]
    InvalidEntity {
        entity: &'static str,
        field: &'static str,
    },
}

/// Errors from the document-head boundary.
#[derive(Debug, Error)]
pub enum HeadError {
    /// No document head to write to (non-browser context).
    #[error("document head unavailable: {0}")]
    Unavailable(String),
}

/// Errors from route-metadata map construction.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to parse route metadata map: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate route entry '{0}'")]
    DuplicateRoute(String),

    #[error("invalid route path '{0}': must start with '/'")]
    InvalidRoute(String),
}
