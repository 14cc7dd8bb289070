//! Stations API error types.

/// Errors that can occur when talking to the stations API.
///
/// An unsuccessful envelope (`success: false`) is not an error; it surfaces
/// as `Ok(None)` from the gateway.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// HTTP request failed (connection refused, timeout, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
