//! Grade breakdown pie.

use crate::format;
use crate::spec::{
    Axes, ChartKind, ChartSpec, Legend, LegendEntry, Point, Series, SeriesShape, Tooltip,
    TooltipTrigger,
};
use crate::theme::{Styling, Theme};
use lad_report::{Grade, Report};

/// Slice color of a grade, the same in both themes.
pub fn grade_color(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "#7EC3F7",
        Grade::B => "#4ECDC4",
        Grade::C => "#F59E0B",
        Grade::D => "#FF6B9D",
        Grade::E => "#D3D3D3",
    }
}

pub fn build(view: &Report, theme: Theme) -> ChartSpec {
    let grades = &view.grade_breakdown;

    ChartSpec {
        kind: ChartKind::LearnerDetails,
        axes: Axes::none(),
        series: vec![Series {
            name: "Grades".to_string(),
            shape: SeriesShape::Pie {
                inner_radius: 0,
                outer_radius: 65,
            },
            value_axis: 0,
            color: None,
            points: grades
                .iter()
                .map(|g| Point::new(g.label.clone(), g.percent).colored(grade_color(g.grade)))
                .collect(),
        }],
        legend: Legend {
            show: true,
            entries: grades
                .iter()
                .map(|g| LegendEntry {
                    text: format!("{} {}", format::percent(g.percent), g.label),
                    ..LegendEntry::new(g.label.clone())
                })
                .collect(),
        },
        tooltip: Tooltip {
            trigger: TooltipTrigger::Item,
            entries: grades
                .iter()
                .map(|g| format!("{}: {}", g.label, format::percent(g.percent)))
                .collect(),
        },
        caption: None,
        styling: Styling::for_theme(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    #[test]
    fn test_one_slice_per_grade_in_order() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Dark);
        let points = &spec.series[0].points;
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].label, "A - Grade (>80)");
        assert_eq!(points[0].value, 22.0);
        assert_eq!(points[4].color, Some("#D3D3D3"));
    }

    #[test]
    fn test_grade_colors_ignore_theme() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let dark = build(&view, Theme::Dark);
        let light = build(&view, Theme::Light);
        assert_eq!(dark.series, light.series);
        for grade in Grade::all() {
            assert!(grade_color(grade).starts_with('#'));
        }
    }

    #[test]
    fn test_legend_text_leads_with_percent() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Dark);
        assert_eq!(spec.legend.entries[1].name, "B - Grade (>60)");
        assert_eq!(spec.legend.entries[1].text, "31% B - Grade (>60)");
        assert_eq!(spec.tooltip.entries[1], "B - Grade (>60): 31%");
    }
}
