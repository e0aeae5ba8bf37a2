//! Report store: the fetched report plus the filtered view derived from it.
//!
//! The view is never patched. Every filter change records the new filter
//! value and re-derives the whole view from the stored report with
//! [`derive_view`], so applying the same filters twice cannot compound.

use crate::filter::{DateRangeMode, DistrictFilter, FilterState, RankBy};
use crate::metrics;
use lad_report::{FetchError, Report, ReportFetcher, Summary};

/// Derive the on-screen view from `report` under `filters`.
///
/// Steps run in a fixed order: district restriction, date-range proration,
/// then ranking. `report` is only read.
pub fn derive_view(report: &Report, filters: &FilterState) -> Report {
    let mut view = report.clone();

    if let DistrictFilter::Only(_) = filters.district {
        view.course_progress
            .retain(|row| filters.district.admits(&row.district));
        view.district_ranking
            .districts
            .retain(|row| filters.district.admits(&row.district));
    }

    view.summary = prorate_summary(&report.summary, filters.date_range);

    metrics::rank_in_place(&mut view.district_ranking.districts, filters.rank_by);
    view.district_ranking.rank_by = filters.rank_by.label().to_string();

    view
}

/// Divide the yearly learner totals by the date-range divisor, rounding to
/// the nearest learner.
pub fn prorate_summary(summary: &Summary, mode: DateRangeMode) -> Summary {
    let divisor = mode.divisor();
    if divisor == 1 {
        return *summary;
    }
    let divide = |value: u64| (value as f64 / divisor as f64).round() as u64;
    Summary {
        total_learners: divide(summary.total_learners),
        male: divide(summary.male),
        female: divide(summary.female),
        others: divide(summary.others),
        active_learners: divide(summary.active_learners),
        engaged_learners: divide(summary.engaged_learners),
    }
}

/// Holds one year's report and the view derived from it.
#[derive(Debug, Clone, Default)]
pub struct ReportStore {
    report: Report,
    view: Report,
    filters: FilterState,
    loaded: bool,
}

impl ReportStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The report as fetched.
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// The filtered view shown on screen.
    pub fn view(&self) -> &Report {
        &self.view
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Whether any report has been loaded yet.
    pub fn has_report(&self) -> bool {
        self.loaded
    }

    /// Fetch the report for `year` and replace the stored one.
    ///
    /// On failure the previous report, view and filters are left untouched.
    pub async fn load<F: ReportFetcher>(
        &mut self,
        fetcher: &F,
        year: &str,
    ) -> Result<&Report, FetchError> {
        let report = fetcher.fetch_report(year).await?;
        self.replace_report(year, report);
        Ok(&self.report)
    }

    /// Replace the stored report and reset every filter.
    pub fn replace_report(&mut self, year: &str, report: Report) {
        log::info!(
            "[LAD] store: loaded {} ({} districts ranked)",
            year,
            report.district_ranking.districts.len()
        );
        self.report = report;
        self.loaded = true;
        self.filters = FilterState::for_year(year);
        self.rederive();
    }

    pub fn apply_district_filter(&mut self, district: DistrictFilter) {
        self.filters.district = district;
        self.rederive();
        if self.view.course_progress.is_empty() && self.view.district_ranking.districts.is_empty()
        {
            log::info!(
                "[LAD] store: no rows match district {:?}",
                self.filters.district.label()
            );
        }
    }

    pub fn apply_date_range(&mut self, mode: DateRangeMode) {
        self.filters.date_range = mode;
        self.rederive();
    }

    pub fn apply_rank_by(&mut self, metric: RankBy) {
        self.filters.rank_by = metric;
        self.rederive();
    }

    /// Apply district, date range and rank metric in one step.
    ///
    /// The year always stays the year of the stored report.
    pub fn apply_filters(&mut self, filters: &FilterState) {
        let year = std::mem::take(&mut self.filters.year);
        self.filters = FilterState {
            year,
            ..filters.clone()
        };
        self.rederive();
    }

    fn rederive(&mut self) {
        self.view = derive_view(&self.report, &self.filters);
        log::debug!("[LAD] store: view re-derived for {:?}", self.filters);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use lad_report::{DirFetcher, District};

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    fn loaded_store() -> ReportStore {
        let mut store = ReportStore::new();
        store.replace_report("2024", Report::from_json(REPORT_2024).unwrap());
        store
    }

    fn order(view: &Report) -> Vec<(&str, u32)> {
        view.district_ranking
            .districts
            .iter()
            .map(|d| (d.district.as_str(), d.rank))
            .collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = ReportStore::new();
        assert!(!store.has_report());
        assert_eq!(store.view(), &Report::default());
    }

    #[test]
    fn test_replace_report_resets_filters() {
        let mut store = loaded_store();
        store.apply_district_filter(DistrictFilter::Only("Erode".to_string()));
        store.apply_date_range(DateRangeMode::Monthly);
        store.replace_report("2024", Report::from_json(REPORT_2024).unwrap());
        assert!(store.filters().is_unfiltered());
        assert_eq!(store.view().summary.total_learners, 1200);
        assert_eq!(store.view().course_progress.len(), 5);
    }

    #[test]
    fn test_rank_by_enrollment_two_districts() {
        let mut report = Report::default();
        report.district_ranking.districts = vec![
            District { district: "A".to_string(), enrolled: 100, ..Default::default() },
            District { district: "B".to_string(), enrolled: 200, ..Default::default() },
        ];
        let mut store = ReportStore::new();
        store.replace_report("2024", report);
        store.apply_rank_by(RankBy::Enrollment);
        assert_eq!(order(store.view()), vec![("B", 1), ("A", 2)]);
    }

    #[test]
    fn test_rank_by_pass_percent() {
        let mut store = loaded_store();
        store.apply_rank_by(RankBy::PassPercent);
        assert_eq!(
            order(store.view()),
            vec![
                ("Coimbatore", 1),
                ("Chennai", 2),
                ("Karur", 3),
                ("Madurai", 4),
                ("Erode", 5)
            ]
        );
        assert_eq!(store.view().district_ranking.rank_by, "Pass %");
        // stored report keeps its own order
        assert_eq!(store.report().district_ranking.districts[0].district, "Chennai");
    }

    #[test]
    fn test_district_filter_then_all_restores_full_set() {
        let mut store = loaded_store();
        store.apply_district_filter(DistrictFilter::Only("Madurai".to_string()));
        assert_eq!(store.view().course_progress.len(), 1);
        assert_eq!(store.view().district_ranking.districts.len(), 1);
        assert_eq!(store.view().district_ranking.districts[0].rank, 1);

        store.apply_district_filter(DistrictFilter::Only("Erode".to_string()));
        assert_eq!(store.view().course_progress[0].district, "Erode");

        store.apply_district_filter(DistrictFilter::from_label("All Districts"));
        assert_eq!(store.view().course_progress.len(), 5);
        assert_eq!(store.view().district_ranking.districts.len(), 5);
        assert_eq!(store.report().course_progress.len(), 5);
    }

    #[test]
    fn test_district_filter_without_match_is_empty() {
        let mut store = loaded_store();
        store.apply_district_filter(DistrictFilter::Only("Atlantis".to_string()));
        assert!(store.view().course_progress.is_empty());
        assert!(store.view().district_ranking.districts.is_empty());
        assert_eq!(store.view().summary.total_learners, 1200);
    }

    #[test]
    fn test_quarterly_does_not_compound() {
        let mut store = loaded_store();
        store.apply_date_range(DateRangeMode::Quarterly);
        assert_eq!(store.view().summary.total_learners, 300);
        store.apply_date_range(DateRangeMode::Quarterly);
        assert_eq!(store.view().summary.total_learners, 300);
        store.apply_date_range(DateRangeMode::Monthly);
        assert_eq!(store.view().summary.total_learners, 100);
        store.apply_date_range(DateRangeMode::FullYear);
        assert_eq!(store.view().summary.total_learners, 1200);
    }

    #[test]
    fn test_prorate_rounds_each_field() {
        let summary = Summary {
            total_learners: 1200,
            male: 560,
            female: 610,
            others: 30,
            active_learners: 960,
            engaged_learners: 725,
        };
        let monthly = prorate_summary(&summary, DateRangeMode::Monthly);
        assert_eq!(monthly.male, 47); // 46.67
        assert_eq!(monthly.female, 51); // 50.83
        assert_eq!(monthly.others, 3); // 2.5
        assert_eq!(monthly.engaged_learners, 60); // 60.42
        let quarterly = prorate_summary(&summary, DateRangeMode::Quarterly);
        assert_eq!(quarterly.engaged_learners, 181); // 181.25
        assert_eq!(prorate_summary(&summary, DateRangeMode::FullYear), summary);
    }

    #[test]
    fn test_filters_compose_and_replay_identically() {
        let mut store = loaded_store();
        store.apply_district_filter(DistrictFilter::Only("Chennai".to_string()));
        store.apply_date_range(DateRangeMode::Quarterly);
        store.apply_rank_by(RankBy::PassPercent);
        let first = store.view().clone();

        // district filter does not drop the date range
        assert_eq!(first.summary.total_learners, 300);
        assert_eq!(first.course_progress.len(), 1);

        store.apply_filters(&store.filters().clone());
        assert_eq!(store.view(), &first);

        let replayed = derive_view(store.report(), store.filters());
        assert_eq!(replayed, first);
    }

    #[test]
    fn test_apply_filters_keeps_year() {
        let mut store = loaded_store();
        let filters = FilterState {
            year: "1999".to_string(),
            rank_by: RankBy::PassPercent,
            ..Default::default()
        };
        store.apply_filters(&filters);
        assert_eq!(store.filters().year, "2024");
        assert_eq!(store.filters().rank_by, RankBy::PassPercent);
    }

    #[test]
    fn test_load_success_and_failure() {
        let fetcher = DirFetcher::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures"));
        let mut store = ReportStore::new();

        let report = block_on(store.load(&fetcher, "2025")).unwrap();
        assert_eq!(report.summary.total_learners, 2400);
        assert_eq!(store.filters().year, "2025");

        store.apply_rank_by(RankBy::PassPercent);
        let before = store.view().clone();
        assert!(block_on(store.load(&fetcher, "1999")).is_err());
        assert_eq!(store.view(), &before);
        assert_eq!(store.filters().year, "2025");
        assert_eq!(store.filters().rank_by, RankBy::PassPercent);
    }
}
