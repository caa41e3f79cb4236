//! Failure classification for REST calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by the REST helpers in [`super::api`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A required query or path parameter was blank.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),
    /// The request never produced a response (network, CORS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The owning view cancelled the request.
    #[error("request aborted")]
    Aborted,
    /// The server rejected the bearer token.
    #[error("not authorized")]
    Unauthorized,
    /// Any other non-2xx response.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No HTTP transport in this build.
    #[error("http transport unavailable")]
    Unavailable,
}

impl ApiError {
    /// Map an HTTP status to `Ok` for 2xx or the matching error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] for 401/403 and
    /// [`ApiError::Status`] for any other non-2xx code.
    pub fn check_status(status: u16) -> Result<(), Self> {
        match status {
            200..=299 => Ok(()),
            401 | 403 => Err(Self::Unauthorized),
            other => Err(Self::Status(other)),
        }
    }

    /// True when signing in again could fix the failure.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
