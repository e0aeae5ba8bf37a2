//! Course progress per district: Below / Average / Good bars.

use crate::format;
use crate::spec::{
    Axes, CategoryAxis, ChartKind, ChartSpec, Legend, LegendEntry, Orientation, Point, Series,
    SeriesShape, Tooltip, TooltipTrigger, ValueAxis,
};
use crate::theme::{Styling, Theme};
use lad_data::metrics::dominant_bucket;
use lad_report::{CourseProgress, Report};

/// Bar color for values below 40.
pub const LOW_COLOR: &str = "#FF6B9D";
/// Bar color for values from 40 up to (not including) 70.
pub const MID_COLOR: &str = "#4ECDC4";
/// Bar color for values of 70 and above.
pub const HIGH_COLOR: &str = "#7EC3F7";

/// Threshold color of a progress value. Independent of the theme.
pub fn bar_color(value: f64) -> &'static str {
    if value < 40.0 {
        LOW_COLOR
    } else if value < 70.0 {
        MID_COLOR
    } else {
        HIGH_COLOR
    }
}

fn bucket_series(name: &str, rows: &[CourseProgress], value: fn(&CourseProgress) -> f64) -> Series {
    Series {
        name: name.to_string(),
        shape: SeriesShape::Bar { stack: None },
        value_axis: 0,
        color: None,
        points: rows
            .iter()
            .map(|c| Point::new(c.district.clone(), value(c)).colored(bar_color(value(c))))
            .collect(),
    }
}

pub fn build(view: &Report, theme: Theme) -> ChartSpec {
    let rows = &view.course_progress;
    let districts: Vec<String> = rows.iter().map(|c| c.district.clone()).collect();

    let series = vec![
        bucket_series("Below", rows, |c| c.below),
        bucket_series("Average", rows, |c| c.average),
        bucket_series("Good", rows, |c| c.good),
    ];

    let tooltip = rows
        .iter()
        .map(|c| {
            format!(
                "{}\nGood: {}\nAverage: {}\nBelow: {}\nHighest: {}",
                c.district,
                format::percent(c.good),
                format::percent(c.average),
                format::percent(c.below),
                dominant_bucket(c.good, c.average, c.below).label()
            )
        })
        .collect();

    ChartSpec {
        kind: ChartKind::CourseProgress,
        axes: Axes {
            orientation: Orientation::Vertical,
            category: Some(CategoryAxis {
                name: None,
                labels: districts,
                label_rotate: 0,
                inverse: false,
            }),
            values: vec![ValueAxis {
                name: "Course Progress %".to_string(),
                min: 0.0,
                max: 100.0,
                interval: 10.0,
                suffix: "",
            }],
        },
        series,
        legend: Legend {
            show: true,
            entries: vec![
                LegendEntry {
                    selected: false,
                    ..LegendEntry::new("Below")
                },
                LegendEntry {
                    selected: false,
                    ..LegendEntry::new("Average")
                },
                LegendEntry::new("Good"),
            ],
        },
        tooltip: Tooltip {
            trigger: TooltipTrigger::Axis,
            entries: tooltip,
        },
        caption: None,
        styling: Styling::for_theme(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lad_data::{DistrictFilter, ReportStore};

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(bar_color(39.0), LOW_COLOR);
        assert_eq!(bar_color(39.9), LOW_COLOR);
        assert_eq!(bar_color(40.0), MID_COLOR);
        assert_eq!(bar_color(69.9), MID_COLOR);
        assert_eq!(bar_color(70.0), HIGH_COLOR);
        assert_eq!(bar_color(100.0), HIGH_COLOR);
        assert_eq!(bar_color(0.0), LOW_COLOR);
    }

    #[test]
    fn test_series_carry_their_own_bucket() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Dark);
        assert_eq!(spec.series.len(), 3);
        let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Below", "Average", "Good"]);

        // Chennai: below 18, average 34, good 72
        assert_eq!(spec.series[0].points[0].value, 18.0);
        assert_eq!(spec.series[1].points[0].value, 34.0);
        assert_eq!(spec.series[2].points[0].value, 72.0);
        assert_eq!(spec.series[0].points[0].color, Some(LOW_COLOR));
        assert_eq!(spec.series[2].points[0].color, Some(HIGH_COLOR));
        // Karur good is exactly 70
        assert_eq!(spec.series[2].points[4].color, Some(HIGH_COLOR));
        // Coimbatore average is 41
        assert_eq!(spec.series[1].points[1].color, Some(MID_COLOR));
    }

    #[test]
    fn test_axis_and_legend() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Light);
        let category = spec.axes.category.as_ref().unwrap();
        assert_eq!(category.labels[0], "Chennai");
        assert_eq!(category.labels.len(), 5);
        assert_eq!(spec.axes.values[0].max, 100.0);
        let selected: Vec<bool> = spec.legend.entries.iter().map(|e| e.selected).collect();
        assert_eq!(selected, vec![false, false, true]);
    }

    #[test]
    fn test_tooltip_names_dominant_bucket() {
        let view = Report::from_json(REPORT_2024).unwrap();
        let spec = build(&view, Theme::Dark);
        assert_eq!(spec.tooltip.entries.len(), 5);
        assert_eq!(
            spec.tooltip.entries[0],
            "Chennai\nGood: 72%\nAverage: 34%\nBelow: 18%\nHighest: Good"
        );
        assert!(spec.tooltip.entries[2].ends_with("Highest: Below"));
        // Erode ties on all three
        assert!(spec.tooltip.entries[3].ends_with("Highest: Good"));
    }

    #[test]
    fn test_unmatched_district_gives_empty_series() {
        let mut store = ReportStore::new();
        store.replace_report("2024", Report::from_json(REPORT_2024).unwrap());
        store.apply_district_filter(DistrictFilter::Only("Nowhere".to_string()));
        let spec = build(store.view(), Theme::Dark);
        assert_eq!(spec.series.len(), 3);
        assert!(spec.series.iter().all(|s| s.points.is_empty()));
        assert!(spec.tooltip.entries.is_empty());
    }
}
