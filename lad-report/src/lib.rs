//! Report schema and fetch contract for the learner analytics dashboard.
//!
//! This crate provides:
//! - `model`: the yearly `Report` as published in `dashboard_{year}.json`
//! - `error`: `ReportError` and the retryable `FetchError`
//! - `fetch`: the `ReportFetcher` trait and a directory-backed implementation

pub mod error;
pub mod fetch;
pub mod model;

pub use error::{FetchError, ReportError};
pub use fetch::{DirFetcher, ReportFetcher};
pub use model::{
    AssessmentCompletion, CourseProgress, District, DistrictRanking, Grade, GradeBreakdown,
    PassStats, Report, Summary,
};
