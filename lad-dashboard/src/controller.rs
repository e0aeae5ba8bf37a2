//! View controller: the single owner of dashboard state.
//!
//! A year load is split in two so the browser shell never holds the
//! controller across an `await`. [`ViewController::select_year`] hands out a
//! [`YearRequest`] ticket, the shell fetches, and
//! [`ViewController::finish_year_load`] applies the result only if the ticket
//! is still the latest one. Older responses are discarded.

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::render::{ChartHandle, ChartRenderer};
use crate::storage::KeyValueStore;
use lad_charts::{build_all, ChartKind, ChartSpec, Theme};
use lad_data::stats::{summary_cards, StatCard};
use lad_data::{DateRangeMode, DistrictFilter, FilterState, RankBy, ReportStore, ALL_DISTRICTS};
use lad_report::{FetchError, Report, ReportFetcher};

/// Load state of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet.
    Idle,
    /// A year fetch is in flight.
    Loading { year: String, generation: u64 },
    /// A report is loaded and no fetch is in flight.
    Ready,
}

/// Ticket for one year fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearRequest {
    pub year: String,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The report replaced the previous one.
    Applied,
    /// A newer request was issued; the response was dropped.
    Superseded,
    /// The fetch failed; the previous report stays on screen.
    Failed,
}

pub struct ViewController<S: KeyValueStore, R: ChartRenderer> {
    config: DashboardConfig,
    storage: S,
    renderer: R,
    store: ReportStore,
    phase: Phase,
    generation: u64,
    theme: Theme,
    specs: Vec<ChartSpec>,
    handles: Vec<(ChartKind, R::Handle)>,
    last_error: Option<DashboardError>,
}

impl<S: KeyValueStore, R: ChartRenderer> ViewController<S, R> {
    /// Create an idle controller and resolve the startup theme.
    ///
    /// With no stored flag the configured default theme is used and written
    /// back.
    pub fn new(config: DashboardConfig, mut storage: S, renderer: R) -> Self {
        let theme = match storage.get(&config.theme_key) {
            Some(flag) => Theme::from_flag(&flag),
            None => {
                let theme = config.default_theme;
                if let Err(e) = storage.set(&config.theme_key, theme.as_flag()) {
                    log::warn!("[LAD] controller: could not persist theme: {:#}", e);
                }
                theme
            }
        };
        log::info!("[LAD] controller: starting with {:?} theme", theme);

        let store = ReportStore::new();
        let specs = build_all(store.view(), theme);
        Self {
            config,
            storage,
            renderer,
            store,
            phase: Phase::Idle,
            generation: 0,
            theme,
            specs,
            handles: Vec::new(),
            last_error: None,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    pub fn filters(&self) -> &FilterState {
        self.store.filters()
    }

    pub fn view(&self) -> &Report {
        self.store.view()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Current chart specs, in [`ChartKind::all`] order.
    pub fn specs(&self) -> &[ChartSpec] {
        &self.specs
    }

    pub fn summary_cards(&self) -> Vec<StatCard> {
        summary_cards(self.store.view())
    }

    /// District selector entries: the "All Districts" sentinel, then every
    /// district of the loaded report.
    pub fn district_options(&self) -> Vec<String> {
        std::iter::once(ALL_DISTRICTS.to_string())
            .chain(self.store.report().district_names())
            .collect()
    }

    pub fn date_range_label(&self) -> String {
        self.store.filters().date_range_label()
    }

    /// Error from the most recent failed load or render, cleared by the next
    /// successful load.
    pub fn last_error(&self) -> Option<&DashboardError> {
        self.last_error.as_ref()
    }

    /// Start loading `year`. Any earlier request in flight is superseded.
    ///
    /// Nothing in the view changes until the report arrives. Then the date
    /// range goes back to the full year and district and rank selections are
    /// carried over. A failed fetch leaves the current view as it is.
    pub fn select_year(&mut self, year: &str) -> YearRequest {
        self.generation += 1;
        let request = YearRequest {
            year: year.to_string(),
            generation: self.generation,
        };
        log::info!(
            "[LAD] controller: requesting {} (generation {})",
            year,
            request.generation
        );

        self.phase = Phase::Loading {
            year: request.year.clone(),
            generation: request.generation,
        };
        request
    }

    /// Apply the result of the fetch started by `request`.
    ///
    /// Only the pending ticket is accepted, and only once: a stale or
    /// repeated ticket is reported as superseded.
    pub fn finish_year_load(
        &mut self,
        request: YearRequest,
        result: Result<Report, FetchError>,
    ) -> LoadOutcome {
        let pending = matches!(
            &self.phase,
            Phase::Loading { generation, .. } if *generation == request.generation
        );
        if !pending || request.generation != self.generation {
            log::info!(
                "[LAD] controller: dropping superseded response for {} (generation {}, current {})",
                request.year,
                request.generation,
                self.generation
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(report) => {
                let previous = self
                    .store
                    .has_report()
                    .then(|| self.store.filters().clone());
                self.store.replace_report(&request.year, report);
                if let Some(previous) = previous {
                    let carried = self.carried_filters(previous);
                    self.store.apply_filters(&carried);
                }
                self.phase = Phase::Ready;
                self.last_error = None;
                self.refresh_charts();
                LoadOutcome::Applied
            }
            Err(e) => {
                log::warn!("[LAD] controller: {}", e);
                self.last_error = Some(DashboardError::Fetch(e));
                self.phase = if self.store.has_report() {
                    Phase::Ready
                } else {
                    Phase::Idle
                };
                LoadOutcome::Failed
            }
        }
    }

    /// Select, fetch and apply `year` in one call.
    pub async fn load_year<F: ReportFetcher>(&mut self, fetcher: &F, year: &str) -> LoadOutcome {
        let request = self.select_year(year);
        let result = fetcher.fetch_report(year).await;
        self.finish_year_load(request, result)
    }

    /// Filters kept across a year change. A district missing from the new
    /// report falls back to all districts.
    fn carried_filters(&self, previous: FilterState) -> FilterState {
        let district = match previous.district {
            DistrictFilter::Only(name) if !self.store.report().district_names().contains(&name) => {
                log::info!(
                    "[LAD] controller: {} not in {}, showing all districts",
                    name,
                    self.store.filters().year
                );
                DistrictFilter::All
            }
            district => district,
        };
        FilterState {
            district,
            date_range: DateRangeMode::FullYear,
            rank_by: previous.rank_by,
            ..FilterState::default()
        }
    }

    fn ensure_ready(&self) -> Result<(), DashboardError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(DashboardError::NotReady)
        }
    }

    pub fn select_district(&mut self, district: DistrictFilter) -> Result<(), DashboardError> {
        self.ensure_ready()?;
        self.store.apply_district_filter(district);
        self.refresh_charts();
        Ok(())
    }

    pub fn select_date_range(&mut self, mode: DateRangeMode) -> Result<(), DashboardError> {
        self.ensure_ready()?;
        self.store.apply_date_range(mode);
        self.refresh_charts();
        Ok(())
    }

    /// Select `mode`, or return to the full year if it is already active.
    pub fn toggle_date_range(&mut self, mode: DateRangeMode) -> Result<DateRangeMode, DashboardError> {
        let next = self.store.filters().date_range.toggled(mode);
        self.select_date_range(next)?;
        Ok(next)
    }

    pub fn select_rank_by(&mut self, metric: RankBy) -> Result<(), DashboardError> {
        self.ensure_ready()?;
        self.store.apply_rank_by(metric);
        self.refresh_charts();
        Ok(())
    }

    /// Flip and persist the theme. Cached specs are restyled in place, their
    /// values are not rebuilt.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.storage.set(&self.config.theme_key, self.theme.as_flag()) {
            log::warn!("[LAD] controller: could not persist theme: {:#}", e);
        }
        for spec in &mut self.specs {
            spec.restyle(self.theme);
        }
        self.push_specs();
        self.theme
    }

    /// Mount one chart per configured container, disposing any charts
    /// mounted before.
    ///
    /// A chart that fails to mount is skipped; the first failure is
    /// returned after the others have been mounted.
    pub fn mount_charts(&mut self) -> Result<(), DashboardError> {
        self.teardown();
        let mut first_error = None;
        for spec in &self.specs {
            let target = self.config.containers.id(spec.kind);
            match self.renderer.mount(target, spec) {
                Ok(handle) => self.handles.push((spec.kind, handle)),
                Err(e) => {
                    log::warn!("[LAD] controller: {}", e);
                    first_error.get_or_insert(e);
                }
            }
        }
        log::info!("[LAD] controller: {} charts mounted", self.handles.len());
        match first_error {
            Some(e) => {
                self.last_error = Some(DashboardError::Render(e.clone()));
                Err(DashboardError::Render(e))
            }
            None => Ok(()),
        }
    }

    /// Dispose every mounted chart. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        log::info!("[LAD] controller: disposing {} charts", self.handles.len());
        for (_, mut handle) in self.handles.drain(..) {
            handle.dispose();
        }
    }

    fn refresh_charts(&mut self) {
        self.specs = build_all(self.store.view(), self.theme);
        self.push_specs();
    }

    fn push_specs(&mut self) {
        for (kind, handle) in &mut self.handles {
            let Some(spec) = self.specs.iter().find(|s| s.kind == *kind) else {
                continue;
            };
            if let Err(e) = handle.update(spec) {
                log::warn!("[LAD] controller: {}", e);
                self.last_error = Some(DashboardError::Render(e));
            }
        }
    }
}

impl<S: KeyValueStore, R: ChartRenderer> Drop for ViewController<S, R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
