//! Dioxus shell for the learner analytics dashboard.
//!
//! This crate provides:
//! - `js_bridge`: ECharts rendering via `js_sys::eval()`, as a `ChartRenderer`
//! - `fetch`: `HttpFetcher`, the browser `ReportFetcher`
//! - `storage`: `LocalStorageStore`, the browser `KeyValueStore`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selectors, cards, containers)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
pub mod storage;
