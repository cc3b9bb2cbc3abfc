//! Failure type for calls to the blend endpoints.
//!
//! The `Display` output is user-facing: flows embed it in inline banners.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`BlendApi`](super::api::BlendApi) calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("{0}")]
    Request(String),

    /// The server answered with a non-success status. `body` carries the
    /// response text, or a generic message when the body was empty.
    #[error("{body}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The blend endpoint succeeded but returned no usable word.
    #[error("No word generated")]
    EmptyBlend,

    /// HTTP is only available in the hydrated browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Status`], substituting a generic message for a blank body.
    #[must_use]
    pub fn status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = if body.is_empty() { format!("request failed: {status}") } else { body.to_owned() };
        Self::Status { status, body }
    }
}
