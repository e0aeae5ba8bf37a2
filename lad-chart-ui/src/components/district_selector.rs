//! Dropdown selector for the district filter.

use crate::state::AppState;
use dioxus::prelude::*;
use lad_data::DistrictFilter;

/// District dropdown listing "All Districts" and every district of the
/// loaded report.
#[component]
pub fn DistrictSelector() -> Element {
    let state = use_context::<AppState>();
    let (options, selected, ready) = {
        let controller = state.controller.read();
        (
            controller.district_options(),
            controller.filters().district.label().to_string(),
            controller.is_ready(),
        )
    };

    let on_change = move |evt: Event<FormData>| {
        let district = DistrictFilter::from_label(&evt.value());
        state.apply(|c| c.select_district(district));
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "District: "
            select {
                id: "district-select",
                disabled: !ready,
                onchange: on_change,
                for name in options.iter() {
                    option {
                        value: "{name}",
                        selected: *name == selected,
                        "{name}"
                    }
                }
            }
        }
    }
}
