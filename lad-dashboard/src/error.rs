/// Error types for the dashboard controller
use lad_report::FetchError;
use thiserror::Error;

/// Failures reported by a chart rendering backend.
///
/// These are logged and surfaced, never fatal: the dashboard keeps running
/// with whatever charts did render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Chart could not be created in its container
    #[error("Failed to mount chart in #{target}: {message}")]
    Mount { target: String, message: String },

    /// Existing chart rejected a new option
    #[error("Failed to update chart in #{target}: {message}")]
    Update { target: String, message: String },
}

#[derive(Error, Debug)]
pub enum DashboardError {
    /// Operation needs a loaded report and no load in flight
    #[error("Dashboard is not ready")]
    NotReady,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Render(#[from] RenderError),
}
