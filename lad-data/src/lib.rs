//! Data processing for the learner analytics dashboard.
//!
//! This crate turns a fetched yearly report into the view shown on screen:
//! - `filter`: the filter state (year, district, date range, rank metric)
//! - `store`: `ReportStore`, holder of the report and its derived view
//! - `metrics`: pure ratio, ranking and maxima helpers
//! - `stats`: the summary stat cards above the charts

pub mod filter;
pub mod metrics;
pub mod stats;
pub mod store;

pub use filter::{DateRangeMode, DistrictFilter, FilterState, RankBy, ALL_DISTRICTS};
pub use store::ReportStore;
