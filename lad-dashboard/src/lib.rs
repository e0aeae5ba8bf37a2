//! Browser-independent core of the learner analytics dashboard.
//!
//! This crate provides:
//! - `controller`: `ViewController`, which sequences year loads, filters,
//!   theme changes and chart refreshes
//! - `config`: `DashboardConfig`, loaded from JSON with defaults
//! - `render`: the `ChartRenderer` / `ChartHandle` traits
//! - `storage`: the `KeyValueStore` trait used to persist the theme
//! - `error`: `DashboardError` and `RenderError`

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod storage;

pub use config::DashboardConfig;
pub use controller::{LoadOutcome, Phase, ViewController, YearRequest};
pub use error::{DashboardError, RenderError};
pub use render::{ChartHandle, ChartRenderer};
pub use storage::{KeyValueStore, MemoryStore};
