//! Error types for the API client.

/// Errors that can occur when validating parameters or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied parameter failed validation. Raised before any
    /// network use; the message names the offending parameter.
    #[error("{0}")]
    Validation(String),
    /// An HTTP request failed (network error, timeout, or an unreadable or
    /// unparseable response body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}
