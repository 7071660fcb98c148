// src/error.rs
//! Error types for the submission and transport layers.

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced to the user as alerts. Preconditions fail before any
/// network call; everything else maps onto the single HTTP round trip.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected before any network call was issued.
    #[error("{0}")]
    Validation(String),

    /// Local file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No usable response from the service.
    #[error("Analysis service unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode analysis service response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Non-2xx response; `message` carries the service's `error` field when
    /// the body provided one.
    #[error("{message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl ClientError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClientError::Validation(message.into())
    }
}
