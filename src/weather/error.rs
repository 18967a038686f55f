use crate::types::quantity::Quantity;
use thiserror::Error;

/// Transport-level failures talking to the upstream weather API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body for {0}")]
    BodyRead(String, #[source] reqwest::Error),
}

/// Shape mismatches in a successfully delivered payload.
///
/// Upstream schema drift must surface as one of these variants, never as a
/// panic or a silently truncated series.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to decode weather payload as JSON")]
    JsonDecode(#[from] serde_json::Error),

    #[error("Expected {expected} quantity blocks in payload, found {found}")]
    QuantityCountMismatch { expected: usize, found: usize },

    #[error("Payload block {index} carries parameter '{found}', expected '{expected}'")]
    ParameterMismatch {
        index: usize,
        expected: &'static str,
        found: String,
    },

    #[error("No coordinate block in payload for {0}")]
    MissingCoordinates(Quantity),

    #[error("Empty sample list in payload for {0}")]
    EmptySeries(Quantity),

    #[error("Series length mismatch for {quantity}: expected {expected} samples, found {found}")]
    LengthMismatch {
        quantity: Quantity,
        expected: usize,
        found: usize,
    },

    #[error("Date axis mismatch for {quantity} at sample {index}")]
    DateMisalignment { quantity: Quantity, index: usize },

    #[error("Dates for {quantity} are not strictly ascending at sample {index}")]
    NonAscendingDates { quantity: Quantity, index: usize },
}
