//! Pass statistics as percentages of all learners.

use crate::format;
use crate::spec::{
    Axes, CategoryAxis, ChartKind, ChartSpec, Legend, Orientation, Point, Series, SeriesShape,
    Tooltip, TooltipTrigger, ValueAxis,
};
use crate::theme::{Styling, Theme};
use lad_data::metrics::percent_of;
use lad_report::Report;

const CATEGORIES: [(&str, &str); 4] = [
    ("Overall Learners", "#7EC3F7"),
    ("Assessment Taken", "#3EC6D8"),
    ("Passed", "#10B981"),
    ("Failed", "#FF6B9D"),
];

pub fn build(view: &Report, theme: Theme) -> ChartSpec {
    let stats = &view.pass_stats;
    let total = stats.overall_learners;
    let counts = [
        stats.overall_learners,
        stats.assessment_taken,
        stats.passed,
        stats.failed,
    ];

    let points: Vec<Point> = CATEGORIES
        .iter()
        .zip(counts)
        .map(|(&(label, color), count)| Point {
            annotation: Some(format::count(count)),
            ..Point::new(label, percent_of(count, total) as f64).colored(color)
        })
        .collect();

    let tooltip = CATEGORIES
        .iter()
        .zip(counts)
        .map(|(&(label, _), count)| {
            format!(
                "{}\nCount: {}\nPercentage: {}%",
                label,
                format::count(count),
                percent_of(count, total)
            )
        })
        .collect();

    ChartSpec {
        kind: ChartKind::PassPercentage,
        axes: Axes {
            orientation: Orientation::Horizontal,
            category: Some(CategoryAxis {
                name: None,
                labels: CATEGORIES.iter().map(|(l, _)| l.to_string()).collect(),
                label_rotate: 0,
                inverse: true,
            }),
            values: vec![ValueAxis {
                name: "Performance".to_string(),
                min: 0.0,
                max: 100.0,
                interval: 20.0,
                suffix: "%",
            }],
        },
        series: vec![Series {
            name: "Pass Percentage".to_string(),
            shape: SeriesShape::Bar { stack: None },
            value_axis: 0,
            color: None,
            points,
        }],
        legend: Legend {
            show: false,
            entries: Vec::new(),
        },
        tooltip: Tooltip {
            trigger: TooltipTrigger::Axis,
            entries: tooltip,
        },
        caption: None,
        styling: Styling::for_theme(theme),
    }
}
