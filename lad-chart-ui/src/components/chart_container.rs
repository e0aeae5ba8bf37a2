//! Card holding one ECharts chart.

use super::ChartHeader;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id ECharts renders into
    pub id: String,
    /// Card title
    pub title: String,
    #[props(default = String::new())]
    pub subtitle: String,
    /// Show a loading overlay above the chart
    #[props(default = false)]
    pub loading: bool,
    /// Chart height in pixels. ECharts needs an explicit height.
    #[props(default = 360)]
    pub height: u32,
}

/// A titled card whose body is the ECharts container.
///
/// The container div is rendered even while loading so mounted charts keep
/// their DOM node.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; width: 100%;", props.height);

    rsx! {
        div {
            class: "lad-card",
            style: "position: relative; padding: 12px; border-radius: 8px;",
            ChartHeader {
                title: props.title.clone(),
                subtitle: props.subtitle.clone(),
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); opacity: 0.7;",
                    "Loading chart..."
                }
            }
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
