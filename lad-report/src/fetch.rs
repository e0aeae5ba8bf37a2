//! Fetch contract for yearly reports.
//!
//! The dashboard core only knows a report is addressed by its year key.
//! Transport lives in the implementations: the browser shell fetches over
//! HTTP, native code and tests read files with [`DirFetcher`].

use crate::error::{FetchError, ReportError};
use crate::model::Report;
use std::path::PathBuf;

/// Source of yearly reports.
///
/// Retry and timeout policy, if any, belong to the implementation.
#[allow(async_fn_in_trait)]
pub trait ReportFetcher {
    async fn fetch_report(&self, year: &str) -> Result<Report, FetchError>;
}

/// File name of the report for `year`, as served under `assets/jsonResponses/`.
pub fn report_file_name(year: &str) -> String {
    format!("dashboard_{}.json", year)
}

/// Reads `dashboard_{year}.json` files from a directory.
#[derive(Debug, Clone)]
pub struct DirFetcher {
    dir: PathBuf,
}

impl DirFetcher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Synchronous read used by the async trait method.
    pub fn read_report(&self, year: &str) -> Result<Report, FetchError> {
        let path = self.dir.join(report_file_name(year));
        log::info!("[LAD] fetch: reading {}", path.display());
        let json = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FetchError::NotFound {
                year: year.to_string(),
            },
            _ => FetchError::Parse {
                year: year.to_string(),
                source: ReportError::Io(e),
            },
        })?;
        Report::from_json(&json).map_err(|source| FetchError::Parse {
            year: year.to_string(),
            source,
        })
    }
}

impl ReportFetcher for DirFetcher {
    async fn fetch_report(&self, year: &str) -> Result<Report, FetchError> {
        self.read_report(year)
    }
}
