//! Library-neutral chart description.
//!
//! A `ChartSpec` holds everything a chart library needs to draw one chart:
//! axes, series values, legend, pre-rendered tooltip text and styling. Only
//! `styling` depends on the theme.

use crate::theme::{Styling, Theme};
use serde::Serialize;

/// The five dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChartKind {
    CourseProgress,
    PassPercentage,
    AssessmentScore,
    LearnerDetails,
    DistrictRanking,
}

impl ChartKind {
    pub fn all() -> [ChartKind; 5] {
        [
            ChartKind::CourseProgress,
            ChartKind::PassPercentage,
            ChartKind::AssessmentScore,
            ChartKind::LearnerDetails,
            ChartKind::DistrictRanking,
        ]
    }

    /// Card heading shown above the chart.
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::CourseProgress => "Course Progress",
            ChartKind::PassPercentage => "Pass Percentage",
            ChartKind::AssessmentScore => "Assessment Score",
            ChartKind::LearnerDetails => "Learner Details",
            ChartKind::DistrictRanking => "District Ranking",
        }
    }

    /// Default DOM id of the chart container.
    pub fn container_id(self) -> &'static str {
        match self {
            ChartKind::CourseProgress => "course-progress-chart",
            ChartKind::PassPercentage => "pass-percentage-chart",
            ChartKind::AssessmentScore => "assessment-score-chart",
            ChartKind::LearnerDetails => "learner-details-chart",
            ChartKind::DistrictRanking => "district-ranking-chart",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub axes: Axes,
    pub series: Vec<Series>,
    pub legend: Legend,
    pub tooltip: Tooltip,
    /// Text drawn in the middle of a donut.
    pub caption: Option<String>,
    pub styling: Styling,
}

impl ChartSpec {
    /// Replace the styling for `theme`, keeping every computed value.
    pub fn restyle(&mut self, theme: Theme) {
        self.styling = Styling::for_theme(theme);
    }
}

/// Bars grow up from a horizontal category axis, or right from a vertical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Axes of a cartesian chart. Pie charts have no category axis and no value axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axes {
    pub orientation: Orientation,
    pub category: Option<CategoryAxis>,
    pub values: Vec<ValueAxis>,
}

impl Axes {
    pub fn none() -> Self {
        Axes {
            orientation: Orientation::Vertical,
            category: None,
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub name: Option<String>,
    pub labels: Vec<String>,
    pub label_rotate: i32,
    /// Draw the first category at the top (horizontal charts).
    pub inverse: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueAxis {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub interval: f64,
    /// Appended to tick labels, e.g. `%`.
    pub suffix: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SeriesShape {
    /// Bars sharing a `stack` name are stacked on each other.
    Bar { stack: Option<&'static str> },
    /// Radii in percent of the container; an inner radius above 0 is a donut.
    Pie { inner_radius: u8, outer_radius: u8 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub shape: SeriesShape,
    /// Index into `Axes::values` the series is plotted against.
    pub value_axis: usize,
    /// Series-wide color; points may override it.
    pub color: Option<&'static str>,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
    pub color: Option<&'static str>,
    /// Text drawn next to the bar.
    pub annotation: Option<String>,
}

impl Point {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Point {
            label: label.into(),
            value,
            color: None,
            annotation: None,
        }
    }

    pub fn colored(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub show: bool,
    pub entries: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// Series or slice name the entry toggles.
    pub name: String,
    /// Text displayed for the entry.
    pub text: String,
    /// Whether the series starts visible.
    pub selected: bool,
}

impl LegendEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        LegendEntry {
            text: name.clone(),
            name,
            selected: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TooltipTrigger {
    /// One tooltip per category, covering every series.
    Axis,
    /// One tooltip per slice or bar.
    Item,
}

/// Pre-rendered tooltip text, one entry per data index, lines separated by `\n`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub trigger: TooltipTrigger,
    pub entries: Vec<String>,
}
