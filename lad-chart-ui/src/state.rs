//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. All dashboard logic lives in the
//! `ViewController` held by the `controller` signal.

use crate::fetch::HttpFetcher;
use crate::js_bridge::EChartsRenderer;
use crate::storage::LocalStorageStore;
use dioxus::prelude::*;
use lad_dashboard::{DashboardConfig, DashboardError, LoadOutcome, ViewController};
use lad_report::ReportFetcher;

/// The controller as used in the browser.
pub type Controller = ViewController<LocalStorageStore, EChartsRenderer>;

#[derive(Clone, Copy)]
pub struct AppState {
    pub controller: Signal<Controller>,
    /// Whether a year fetch is in flight
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Year chosen in the year selector
    pub selected_year: Signal<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        let selected_year = config.default_year.clone();
        let controller =
            ViewController::new(config, LocalStorageStore::new(), EChartsRenderer::new());
        Self {
            controller: Signal::new(controller),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_year: Signal::new(selected_year),
        }
    }

    /// Fetch `year` and hand the result to the controller.
    ///
    /// The controller is never borrowed across the `await`, so filter and
    /// theme changes stay responsive while the fetch is in flight.
    pub async fn load_year(mut self, year: String) {
        let fetcher = HttpFetcher::new(
            self.controller
                .peek()
                .config()
                .report_url_template
                .clone(),
        );
        let request = self.controller.write().select_year(&year);
        self.loading.set(true);

        let result = fetcher.fetch_report(&year).await;

        let outcome = self.controller.write().finish_year_load(request, result);
        log::info!("[LAD] app: load of {} finished: {:?}", year, outcome);
        if outcome != LoadOutcome::Superseded {
            self.loading.set(false);
            self.sync_error();
        }
    }

    /// Run a controller operation and surface its outcome.
    pub fn apply(mut self, op: impl FnOnce(&mut Controller) -> Result<(), DashboardError>) {
        let result = op(&mut *self.controller.write());
        if let Err(e) = result {
            log::warn!("[LAD] app: {}", e);
            self.error_msg.set(Some(e.to_string()));
            return;
        }
        self.sync_error();
    }

    /// Mirror the controller's last error into `error_msg`.
    pub fn sync_error(mut self) {
        let message = self.controller.peek().last_error().map(|e| e.to_string());
        self.error_msg.set(message);
    }
}
