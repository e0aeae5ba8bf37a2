//! Chart option builders for the learner analytics dashboard.
//!
//! Each builder is a pure function `(view, theme) -> ChartSpec`. Values,
//! ordering and axis ranges come from the view alone; the theme only decides
//! `ChartSpec::styling`. The `echarts` module is the single place that knows
//! the ECharts option vocabulary.

pub mod assessment_score;
pub mod course_progress;
pub mod district_ranking;
pub mod echarts;
mod format;
pub mod learner_details;
pub mod pass_percentage;
pub mod spec;
pub mod theme;

pub use spec::{ChartKind, ChartSpec};
pub use theme::{Styling, Theme};

use lad_report::Report;

/// Build the spec for one chart.
pub fn build(kind: ChartKind, view: &Report, theme: Theme) -> ChartSpec {
    match kind {
        ChartKind::CourseProgress => course_progress::build(view, theme),
        ChartKind::PassPercentage => pass_percentage::build(view, theme),
        ChartKind::AssessmentScore => assessment_score::build(view, theme),
        ChartKind::LearnerDetails => learner_details::build(view, theme),
        ChartKind::DistrictRanking => district_ranking::build(view, theme),
    }
}

/// Specs for all five charts, in [`ChartKind::all`] order.
pub fn build_all(view: &Report, theme: Theme) -> Vec<ChartSpec> {
    log::debug!(
        "[LAD] charts: building {} districts, theme {:?}",
        view.district_ranking.districts.len(),
        theme
    );
    ChartKind::all()
        .into_iter()
        .map(|kind| build(kind, view, theme))
        .collect()
}
