// ABOUTME: Error taxonomy for the Coral Swimmer club client
// ABOUTME: ClientError enum covering not-found, transport, decode, and storage failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Coral Swimmer Club

use thiserror::Error;

/// Errors surfaced by the club client.
///
/// Malformed embedded-JSON fields are deliberately absent: those are
/// recovered in place with a safe default and a warning log, never
/// propagated to the caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A required single-entity fetch matched no rows.
    #[error("no `{resource}` row matched the requested key")]
    NotFound {
        /// Sheet name of the collection that came back empty
        resource: &'static str,
    },

    /// Network-level failure reaching the sheets endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The sheets endpoint answered with a non-success status.
    #[error("sheet `{sheet}` request failed with HTTP {status}: {message}")]
    Api {
        /// Sheet the request targeted
        sheet: String,
        /// HTTP status code returned by the endpoint
        status: u16,
        /// Response body text, preserved for diagnostics
        message: String,
    },

    /// The response body did not match the expected envelope shape.
    #[error("failed to decode `{sheet}` response: {source}")]
    Decode {
        /// Sheet the request targeted
        sheet: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The base URL or query string could not be constructed.
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),

    /// The local state file could not be read or written.
    #[error("local state i/o error: {0}")]
    Storage(#[from] std::io::Error),

    /// A locally stored value could not be encoded or decoded.
    #[error("stored value serialization failed: {0}")]
    StoredValue(#[source] serde_json::Error),
}

impl ClientError {
    /// Whether this error is the not-found condition for a required
    /// single-entity fetch.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_the_sheet() {
        let err = ClientError::NotFound {
            resource: "deportistas",
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("deportistas"));
    }

    #[test]
    fn api_error_preserves_status_and_body() {
        let err = ClientError::Api {
            sheet: "niveles".to_owned(),
            status: 503,
            message: "upstream quota exhausted".to_owned(),
        };
        assert!(!err.is_not_found());
        let text = err.to_string();
        assert!(text.contains("503"));
        assert!(text.contains("upstream quota exhausted"));
    }
}
