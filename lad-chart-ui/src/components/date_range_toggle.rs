//! Monthly / quarterly toggle buttons.

use crate::state::AppState;
use dioxus::prelude::*;
use lad_data::DateRangeMode;

/// Two toggle buttons plus the covered window. Clicking the active button
/// returns to the full year.
#[component]
pub fn DateRangeToggle() -> Element {
    let state = use_context::<AppState>();
    let (active, window_label, ready) = {
        let controller = state.controller.read();
        (
            controller.filters().date_range,
            controller.date_range_label(),
            controller.is_ready(),
        )
    };

    let toggle = move |mode: DateRangeMode| {
        state.apply(|c| c.toggle_date_range(mode).map(|_| ()));
    };

    let button_style = |mode: DateRangeMode| {
        if mode == active {
            "padding: 4px 12px; cursor: pointer; font-weight: bold; background: #3b82f6; color: #fff; border: 1px solid #3b82f6; border-radius: 4px;"
        } else {
            "padding: 4px 12px; cursor: pointer; background: transparent; color: inherit; border: 1px solid #94a3b8; border-radius: 4px;"
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            button {
                style: button_style(DateRangeMode::Monthly),
                disabled: !ready,
                onclick: move |_| toggle(DateRangeMode::Monthly),
                "Monthly"
            }
            button {
                style: button_style(DateRangeMode::Quarterly),
                disabled: !ready,
                onclick: move |_| toggle(DateRangeMode::Quarterly),
                "Quarterly"
            }
            span {
                class: "lad-muted",
                style: "font-size: 12px;",
                "{window_label}"
            }
        }
    }
}
