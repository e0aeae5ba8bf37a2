//! Report fetching with the browser `fetch` API.

use lad_dashboard::config::YEAR_PLACEHOLDER;
use lad_report::{FetchError, Report, ReportFetcher};
use wasm_bindgen::JsCast;
use web_sys::{window, RequestInit, RequestMode, Response};

/// Fetches `dashboard_{year}.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    url_template: String,
}

impl HttpFetcher {
    /// `url_template` contains `{year}`, e.g.
    /// `assets/jsonResponses/dashboard_{year}.json`.
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
        }
    }

    pub fn url(&self, year: &str) -> String {
        self.url_template.replace(YEAR_PLACEHOLDER, year)
    }
}

fn network(year: &str, message: String) -> FetchError {
    FetchError::Network {
        year: year.to_string(),
        message,
    }
}

impl ReportFetcher for HttpFetcher {
    async fn fetch_report(&self, year: &str) -> Result<Report, FetchError> {
        let url = self.url(year);
        log::info!("[LAD] fetch: GET {}", url);
        let window = window().ok_or_else(|| network(year, "No window object".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::SameOrigin);
        let request = web_sys::Request::new_with_str_and_init(&url, &opts)
            .map_err(|e| network(year, format!("Failed to create request: {:?}", e)))?;

        let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network(year, format!("Fetch failed: {:?}", e)))?;
        let response: Response = response_value
            .dyn_into()
            .map_err(|_| network(year, "Not a Response".to_string()))?;

        match response.status() {
            200..=299 => {}
            404 => {
                return Err(FetchError::NotFound {
                    year: year.to_string(),
                })
            }
            status => {
                return Err(FetchError::Status {
                    year: year.to_string(),
                    status,
                })
            }
        }

        let text = wasm_bindgen_futures::JsFuture::from(
            response
                .text()
                .map_err(|e| network(year, format!("Failed to read body: {:?}", e)))?,
        )
        .await
        .map_err(|e| network(year, format!("Failed to read body: {:?}", e)))?
        .as_string()
        .unwrap_or_default();

        Report::from_json(&text).map_err(|source| FetchError::Parse {
            year: year.to_string(),
            source,
        })
    }
}
