//! Ranking metric selector for the district ranking chart.

use crate::state::AppState;
use dioxus::prelude::*;
use lad_data::RankBy;

#[component]
pub fn RankBySelector() -> Element {
    let state = use_context::<AppState>();
    let (current, ready) = {
        let controller = state.controller.read();
        (controller.filters().rank_by, controller.is_ready())
    };

    let on_change = move |evt: Event<FormData>| {
        if let Some(metric) = RankBy::from_label(&evt.value()) {
            state.apply(|c| c.select_rank_by(metric));
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; font-size: 13px;",
            "Rank by: "
            select {
                id: "rank-by-select",
                disabled: !ready,
                onchange: on_change,
                for metric in RankBy::all() {
                    option {
                        value: metric.label(),
                        selected: metric == current,
                        {metric.label()}
                    }
                }
            }
        }
    }
}
