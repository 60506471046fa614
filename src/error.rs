//! Error Types

use thiserror::Error;

/// Failures talking to the remote todo API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error on {url}: {message}")]
    Network { url: String, message: String },
    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// The response body was not the JSON we expected.
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
    /// The request body could not be built.
    #[error("failed to encode request body: {0}")]
    Encode(String),
}

/// User filter outside `0..=10`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("user filter {0} is out of range (expected 0..=10)")]
pub struct InvalidUserFilter(pub u32);
