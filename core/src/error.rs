//! Error types for the registry client.
//!
//! # Design
//! Transport failures and non-success statuses collapse into a single
//! `RequestFailed` condition; the optional status is kept for logging only
//! and callers are not expected to branch on it. Local lookup misses are
//! never errors, they surface as `None` from the stores.

use thiserror::Error;

/// Errors returned by the gateway, the resource services and the stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The round-trip failed: either the transport gave up (`status` is
    /// `None`) or the server answered with a non-2xx status.
    #[error("request failed")]
    RequestFailed { status: Option<u16> },

    /// An id supplied by the caller could not be read as a number.
    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn is_request_failed(&self) -> bool {
        matches!(self, ApiError::RequestFailed { .. })
    }
}
