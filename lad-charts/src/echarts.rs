//! ECharts option JSON from a [`ChartSpec`].
//!
//! ECharts formatters are JavaScript functions and cannot travel as JSON, so
//! pre-rendered tooltip text is attached under `ladTooltips`. The JS bridge
//! installs a formatter that looks the text up by data index.

use crate::spec::{
    Axes, CategoryAxis, ChartSpec, Orientation, Series, SeriesShape, TooltipTrigger, ValueAxis,
};
use crate::theme::Styling;
use serde_json::{json, Value};

/// Full ECharts option for `spec`.
pub fn to_option(spec: &ChartSpec) -> Value {
    let styling = &spec.styling;
    let mut option = json!({
        "backgroundColor": styling.background,
        "color": styling.palette,
        "textStyle": {
            "color": styling.text_color,
            "fontFamily": styling.font_family,
        },
        "legend": legend(spec),
        "tooltip": {
            "trigger": match spec.tooltip.trigger {
                TooltipTrigger::Axis => "axis",
                TooltipTrigger::Item => "item",
            },
            "axisPointer": { "type": "shadow" },
            "backgroundColor": styling.tooltip_background,
            "textStyle": { "color": styling.text_color },
        },
        "ladTooltips": spec.tooltip.entries,
        "series": spec.series.iter().map(|s| series(s, styling)).collect::<Vec<_>>(),
    });

    if let Some(caption) = &spec.caption {
        option["title"] = json!({
            "text": caption,
            "left": "center",
            "top": "center",
            "textStyle": {
                "color": styling.text_color,
                "fontSize": 16,
                "fontWeight": "bold",
            },
        });
    }

    if let Some(category) = &spec.axes.category {
        let (x, y) = cartesian_axes(&spec.axes, category, styling);
        option["grid"] = json!({ "left": "10%", "right": "10%", "bottom": "18%", "top": "15%" });
        option["xAxis"] = x;
        option["yAxis"] = y;
    }

    option
}

fn legend(spec: &ChartSpec) -> Value {
    let entries = &spec.legend.entries;
    let selected: serde_json::Map<String, Value> = entries
        .iter()
        .map(|e| (e.name.clone(), Value::Bool(e.selected)))
        .collect();
    let texts: serde_json::Map<String, Value> = entries
        .iter()
        .map(|e| (e.name.clone(), Value::String(e.text.clone())))
        .collect();
    json!({
        "show": spec.legend.show,
        "data": entries.iter().map(|e| e.name.clone()).collect::<Vec<_>>(),
        "selected": selected,
        "ladText": texts,
        "top": 10,
        "right": 10,
        "itemGap": 15,
        "itemWidth": 10,
        "itemHeight": 10,
        "textStyle": { "color": spec.styling.text_color, "fontSize": 11 },
    })
}

fn cartesian_axes(axes: &Axes, category: &CategoryAxis, styling: &Styling) -> (Value, Value) {
    let category_axis = json!({
        "type": "category",
        "data": category.labels,
        "inverse": category.inverse,
        "name": category.name.clone().unwrap_or_default(),
        "nameLocation": "middle",
        "nameGap": 30,
        "nameTextStyle": { "color": styling.text_color, "fontSize": 12 },
        "axisLabel": {
            "interval": 0,
            "rotate": category.label_rotate,
            "color": styling.text_color,
            "fontSize": 10,
        },
        "axisLine": { "lineStyle": { "color": styling.axis_line_color } },
    });
    let value_axes: Vec<Value> = axes.values.iter().map(|v| value_axis(v, styling)).collect();
    let value_axes = match value_axes.len() {
        1 => value_axes.into_iter().next().unwrap_or(Value::Null),
        _ => Value::Array(value_axes),
    };
    match axes.orientation {
        Orientation::Vertical => (category_axis, value_axes),
        Orientation::Horizontal => (value_axes, category_axis),
    }
}

fn value_axis(axis: &ValueAxis, styling: &Styling) -> Value {
    json!({
        "type": "value",
        "name": axis.name,
        "nameLocation": "middle",
        "nameGap": 50,
        "min": axis.min,
        "max": axis.max,
        "interval": axis.interval,
        "nameTextStyle": { "color": styling.text_color, "fontSize": 12 },
        "axisLabel": {
            "formatter": format!("{{value}}{}", axis.suffix),
            "color": styling.text_color,
        },
        "axisLine": { "lineStyle": { "color": styling.axis_line_color } },
        "splitLine": { "lineStyle": { "color": styling.split_line_color } },
    })
}

fn series(series: &Series, styling: &Styling) -> Value {
    let data: Vec<Value> = series
        .points
        .iter()
        .map(|p| {
            let mut point = json!({ "value": p.value, "name": p.label });
            if let Some(color) = p.color {
                point["itemStyle"] = json!({ "color": color });
            }
            if let Some(annotation) = &p.annotation {
                point["label"] = json!({
                    "show": true,
                    "position": "right",
                    "formatter": annotation,
                    "color": styling.text_color,
                    "fontWeight": "bold",
                    "fontSize": 12,
                });
            }
            point
        })
        .collect();

    let mut value = match &series.shape {
        SeriesShape::Bar { stack } => {
            let mut bar = json!({
                "type": "bar",
                "name": series.name,
                "data": data,
                "barMaxWidth": 45,
            });
            if let Some(stack) = stack {
                bar["stack"] = json!(stack);
            }
            if series.value_axis > 0 {
                bar["yAxisIndex"] = json!(series.value_axis);
            }
            bar
        }
        SeriesShape::Pie {
            inner_radius,
            outer_radius,
        } => json!({
            "type": "pie",
            "name": series.name,
            "data": data,
            "radius": [format!("{}%", inner_radius), format!("{}%", outer_radius)],
            "center": ["50%", "50%"],
            "avoidLabelOverlap": false,
            "label": {
                "show": true,
                "formatter": "{c}%",
                "fontSize": 12,
                "color": styling.text_color,
            },
        }),
    };

    if let Some(color) = series.color {
        value["itemStyle"] = json!({ "color": color });
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, build_all, ChartKind, Theme};
    use lad_report::Report;

    const REPORT_2024: &str = include_str!("../../fixtures/dashboard_2024.json");

    fn view() -> Report {
        Report::from_json(REPORT_2024).unwrap()
    }

    #[test]
    fn test_course_progress_option() {
        let option = to_option(&build(ChartKind::CourseProgress, &view(), Theme::Dark));
        assert_eq!(option["xAxis"]["type"], "category");
        assert_eq!(option["xAxis"]["data"][0], "Chennai");
        assert_eq!(option["yAxis"]["max"], 100.0);
        assert_eq!(option["series"][2]["name"], "Good");
        assert_eq!(option["series"][2]["data"][0]["itemStyle"]["color"], "#7EC3F7");
        assert_eq!(option["legend"]["selected"]["Below"], false);
        assert_eq!(option["tooltip"]["trigger"], "axis");
        assert_eq!(option["textStyle"]["color"], "#e2e8f0");
    }

    #[test]
    fn test_horizontal_chart_swaps_axes() {
        let option = to_option(&build(ChartKind::PassPercentage, &view(), Theme::Light));
        assert_eq!(option["xAxis"]["type"], "value");
        assert_eq!(option["xAxis"]["axisLabel"]["formatter"], "{value}%");
        assert_eq!(option["yAxis"]["type"], "category");
        assert_eq!(option["yAxis"]["inverse"], true);
        assert_eq!(option["series"][0]["data"][0]["label"]["formatter"], "1,200");
    }

    #[test]
    fn test_dual_axis_ranking() {
        let option = to_option(&build(ChartKind::DistrictRanking, &view(), Theme::Dark));
        assert!(option["yAxis"].is_array());
        assert_eq!(option["yAxis"][1]["max"], 100.0);
        assert_eq!(option["series"][0]["stack"], "enrollment");
        assert!(option["series"][0].get("yAxisIndex").is_none());
        assert_eq!(option["series"][3]["yAxisIndex"], 1);
        assert_eq!(option["series"][3]["itemStyle"]["color"], "#10B981");
    }

    #[test]
    fn test_pie_options() {
        let option = to_option(&build(ChartKind::AssessmentScore, &view(), Theme::Dark));
        assert!(option.get("xAxis").is_none());
        assert_eq!(option["series"][0]["type"], "pie");
        assert_eq!(option["series"][0]["radius"][0], "60%");
        assert_eq!(option["title"]["text"], "All Districts");

        let option = to_option(&build(ChartKind::LearnerDetails, &view(), Theme::Dark));
        assert_eq!(option["legend"]["ladText"]["A - Grade (>80)"], "22% A - Grade (>80)");
    }

    #[test]
    fn test_tooltips_travel_with_option() {
        for spec in build_all(&view(), Theme::Light) {
            let option = to_option(&spec);
            assert_eq!(
                option["ladTooltips"].as_array().map(Vec::len),
                Some(spec.tooltip.entries.len())
            );
        }
    }
}
