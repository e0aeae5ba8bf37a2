//! Assessment completion donut.

use crate::format;
use crate::spec::{
    Axes, ChartKind, ChartSpec, Legend, Point, Series, SeriesShape, Tooltip, TooltipTrigger,
};
use crate::theme::{Styling, Theme};
use lad_report::Report;

pub const COMPLETED_COLOR: &str = "#7EC3F7";
pub const NOT_COMPLETED_COLOR: &str = "#F59E0B";

/// Values are taken as published; nothing is recomputed.
pub fn build(view: &Report, theme: Theme) -> ChartSpec {
    let completion = &view.assessment_completion;
    let slices = [
        ("Assessment completed", completion.completed_percent, COMPLETED_COLOR),
        (
            "Assessment not completed",
            completion.not_completed_percent,
            NOT_COMPLETED_COLOR,
        ),
    ];

    ChartSpec {
        kind: ChartKind::AssessmentScore,
        axes: Axes::none(),
        series: vec![Series {
            name: "Score".to_string(),
            shape: SeriesShape::Pie {
                inner_radius: 60,
                outer_radius: 85,
            },
            value_axis: 0,
            color: None,
            points: slices
                .iter()
                .map(|&(label, value, color)| Point::new(label, value).colored(color))
                .collect(),
        }],
        legend: Legend {
            show: false,
            entries: Vec::new(),
        },
        tooltip: Tooltip {
            trigger: TooltipTrigger::Item,
            entries: slices
                .iter()
                .map(|(label, value, _)| format!("{}: {}", label, format::percent(*value)))
                .collect(),
        },
        caption: Some("All Districts".to_string()),
        styling: Styling::for_theme(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    #[test]
    fn test_two_slices_as_published() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Dark);
        let points = &spec.series[0].points;
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].value, 75.0);
        assert_eq!(points[1].value, 25.0);
        assert_eq!(points[1].color, Some(NOT_COMPLETED_COLOR));
        assert_eq!(spec.tooltip.entries[0], "Assessment completed: 75%");
    }

    #[test]
    fn test_is_a_donut() {
        let spec = build(&Report::default(), Theme::Light);
        assert!(matches!(
            spec.series[0].shape,
            SeriesShape::Pie { inner_radius: 60, .. }
        ));
        assert!(spec.axes.category.is_none());
        assert_eq!(spec.caption.as_deref(), Some("All Districts"));
    }
}
