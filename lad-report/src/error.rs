/// Error types for the report crate
use thiserror::Error;

/// Errors raised while decoding a report payload.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Payload is not valid report JSON
    #[error("Failed to parse report JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Report file could not be read
    #[error("Failed to read report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while fetching the report for a year.
///
/// Every variant is recoverable: the dashboard keeps its previous report and
/// offers the user a retry.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failed before a response arrived
    #[error("Network error fetching {year}: {message}")]
    Network { year: String, message: String },

    /// Server answered with a non-success status
    #[error("Report for {year} returned HTTP {status}")]
    Status { year: String, status: u16 },

    /// No report exists for the requested year
    #[error("No report available for {year}")]
    NotFound { year: String },

    /// Response body was not a valid report
    #[error("Report for {year} is malformed: {source}")]
    Parse {
        year: String,
        #[source]
        source: ReportError,
    },
}

impl FetchError {
    /// The year whose fetch failed.
    pub fn year(&self) -> &str {
        match self {
            FetchError::Network { year, .. }
            | FetchError::Status { year, .. }
            | FetchError::NotFound { year }
            | FetchError::Parse { year, .. } => year,
        }
    }
}

/// Type alias for Results using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;
