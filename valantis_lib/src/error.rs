//! Error types for the orchestration layer.

use std::fmt;

/// Errors produced by the orchestration layer, wrapping upstream API errors.
///
/// Filter input never fails validation: blank fields and non-numeric price
/// strings are coerced to absent criteria before a request is built.
#[derive(Debug)]
pub enum CatalogError {
    /// An error from the underlying API client.
    Api(valantis_api::Error),
}

impl CatalogError {
    /// A short message suitable for surfacing to an end user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(_) => "Failed to fetch catalog data. Please try again later.".to_string(),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
        }
    }
}

impl From<valantis_api::Error> for CatalogError {
    fn from(e: valantis_api::Error) -> Self {
        Self::Api(e)
    }
}
