//! Learner Analytics Dashboard
//!
//! Shows one year's learner report as five ECharts charts with year,
//! district, date-range, ranking and theme controls.
//!
//! Data flow:
//! 1. `config/dashboard.json` is embedded with `include_str!` and parsed into
//!    a `DashboardConfig` (defaults on failure).
//! 2. On mount: load ECharts and the bridge script, mount the five charts.
//! 3. On year change: fetch `dashboard_{year}.json` and hand it to the
//!    controller; late responses for an older year are dropped.
//! 4. On filter or theme change: the controller re-derives the view and
//!    pushes new options to every mounted chart.

use dioxus::prelude::*;
use lad_chart_ui::components::{
    ChartContainer, DateRangeToggle, DistrictSelector, ErrorDisplay, LoadingSpinner,
    RankBySelector, StatCards, ThemeToggle, YearSelector,
};
use lad_chart_ui::js_bridge;
use lad_chart_ui::state::AppState;
use lad_charts::ChartKind;
use lad_dashboard::DashboardConfig;

const CONFIG_JSON: &str = include_str!("../config/dashboard.json");
const DASHBOARD_CSS: &str = include_str!("../assets/dashboard.css");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("learner-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state =
        use_context_provider(|| AppState::new(DashboardConfig::from_json_or_default(CONFIG_JSON)));

    // ─── Effect 1: Load ECharts and mount the charts once ───
    // `peek` keeps this effect from subscribing to the controller.
    use_effect(move || {
        let echarts_url = state.controller.peek().config().echarts_url.clone();
        js_bridge::load_echarts(&echarts_url);
        js_bridge::init_charts();
        if let Err(e) = state.controller.write().mount_charts() {
            log::warn!("[LAD] app: {}", e);
        }
        state.sync_error();
    });

    // ─── Effect 2: Load the report whenever the selected year changes ───
    use_effect(move || {
        let year = (state.selected_year)();
        spawn(async move {
            state.load_year(year).await;
        });
    });

    use_drop(move || {
        if let Ok(mut controller) = state.controller.try_write() {
            controller.teardown();
        }
    });

    // ─── Render ───
    let (theme_class, containers) = {
        let controller = state.controller.read();
        (
            controller.theme().css_class(),
            controller.config().containers.clone(),
        )
    };
    let grid_charts: Vec<(String, &'static str)> = [
        ChartKind::CourseProgress,
        ChartKind::PassPercentage,
        ChartKind::AssessmentScore,
        ChartKind::LearnerDetails,
    ]
    .into_iter()
    .map(|kind| (containers.id(kind).to_string(), kind.title()))
    .collect();
    let loading = (state.loading)();
    let year = (state.selected_year)();

    rsx! {
        style { {DASHBOARD_CSS} }
        div {
            class: "lad-root {theme_class}",
            div {
                style: "max-width: 1280px; margin: 0 auto; padding: 16px;",

                header {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; justify-content: space-between; margin-bottom: 8px;",
                    h1 {
                        style: "margin: 0; font-size: 22px;",
                        "Learner Analytics Dashboard"
                    }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center;",
                        YearSelector {}
                        DistrictSelector {}
                        DateRangeToggle {}
                        ThemeToggle {}
                    }
                }

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                if loading {
                    LoadingSpinner { year: year.clone() }
                }

                StatCards {}

                div {
                    class: "lad-grid",
                    for (id, title) in grid_charts.iter() {
                        ChartContainer {
                            key: "{id}",
                            id: id.clone(),
                            title: title.to_string(),
                            loading: loading,
                        }
                    }
                }

                div {
                    style: "margin-top: 16px;",
                    div {
                        style: "display: flex; justify-content: flex-end; margin-bottom: 4px;",
                        RankBySelector {}
                    }
                    ChartContainer {
                        id: containers.id(ChartKind::DistrictRanking).to_string(),
                        title: ChartKind::DistrictRanking.title().to_string(),
                        loading: loading,
                        height: 480,
                    }
                }
            }
        }
    }
}
