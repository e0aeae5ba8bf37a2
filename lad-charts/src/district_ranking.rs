//! District ranking: stacked enrollment by gender plus pass and completion rates.

use crate::format;
use crate::spec::{
    Axes, CategoryAxis, ChartKind, ChartSpec, Legend, LegendEntry, Orientation, Point, Series,
    SeriesShape, Tooltip, TooltipTrigger, ValueAxis,
};
use crate::theme::{Styling, Theme};
use lad_data::metrics::{axis_ceiling, max_stacked_enrollment, pass_percent};
use lad_report::{District, Report};

/// Count axis ticks are multiples of this.
pub const COUNT_AXIS_STEP: u64 = 2500;

const ENROLLMENT_STACK: &str = "enrollment";

struct SeriesDef {
    name: &'static str,
    color: &'static str,
    /// 0 = learner counts, 1 = percent
    axis: usize,
    value: fn(&District) -> f64,
}

const SERIES: [SeriesDef; 5] = [
    SeriesDef {
        name: "Male",
        color: "#3B82F6",
        axis: 0,
        value: |d| d.male as f64,
    },
    SeriesDef {
        name: "Female",
        color: "#EC4899",
        axis: 0,
        value: |d| d.female as f64,
    },
    SeriesDef {
        name: "Others",
        color: "#8B5CF6",
        axis: 0,
        value: |d| d.others as f64,
    },
    SeriesDef {
        name: "Pass %",
        color: "#10B981",
        axis: 1,
        value: |d| pass_percent(d) as f64,
    },
    SeriesDef {
        name: "Completion %",
        color: "#F59E0B",
        axis: 1,
        value: |d| d.completion_rate_percent,
    },
];

/// Category label, e.g. "Chennai\nRank 1".
pub fn category_label(district: &District) -> String {
    format!("{}\nRank {}", district.district, district.rank)
}

/// Districts are plotted in the view's ranking order.
pub fn build(view: &Report, theme: Theme) -> ChartSpec {
    let districts = &view.district_ranking.districts;
    let count_max = axis_ceiling(max_stacked_enrollment(view), COUNT_AXIS_STEP);

    let series = SERIES
        .iter()
        .map(|def| Series {
            name: def.name.to_string(),
            shape: SeriesShape::Bar {
                stack: (def.axis == 0).then_some(ENROLLMENT_STACK),
            },
            value_axis: def.axis,
            color: Some(def.color),
            points: districts
                .iter()
                .map(|d| Point::new(d.district.clone(), (def.value)(d)))
                .collect(),
        })
        .collect();

    let tooltip = districts
        .iter()
        .map(|d| {
            format!(
                "{}\nEnrolment\nMale: {}\nFemale: {}\nOthers: {}\nPass %: {}% Passed\nCourse completion %: {} Course Completed",
                d.district,
                format::count(d.male),
                format::count(d.female),
                format::count(d.others),
                pass_percent(d),
                format::percent(d.completion_rate_percent)
            )
        })
        .collect();

    ChartSpec {
        kind: ChartKind::DistrictRanking,
        axes: Axes {
            orientation: Orientation::Vertical,
            category: Some(CategoryAxis {
                name: Some("Districts".to_string()),
                labels: districts.iter().map(category_label).collect(),
                label_rotate: 35,
                inverse: false,
            }),
            values: vec![
                ValueAxis {
                    name: "Number of users".to_string(),
                    min: 0.0,
                    max: count_max as f64,
                    interval: count_max as f64 / 10.0,
                    suffix: "",
                },
                ValueAxis {
                    name: "Pass/completion %".to_string(),
                    min: 0.0,
                    max: 100.0,
                    interval: 10.0,
                    suffix: "%",
                },
            ],
        },
        series,
        legend: Legend {
            show: true,
            entries: SERIES.iter().map(|def| LegendEntry::new(def.name)).collect(),
        },
        tooltip: Tooltip {
            trigger: TooltipTrigger::Axis,
            entries: tooltip,
        },
        caption: None,
        styling: Styling::for_theme(theme),
    }
}
