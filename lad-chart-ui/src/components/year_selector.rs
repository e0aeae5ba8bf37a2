//! Dropdown selector for the report year.

use crate::state::AppState;
use dioxus::prelude::*;

/// Year dropdown. Changing it updates `selected_year`; the app's load effect
/// does the fetch.
#[component]
pub fn YearSelector() -> Element {
    let mut state = use_context::<AppState>();
    let years = state.controller.read().config().years.clone();
    let selected = (state.selected_year)();

    let on_change = move |evt: Event<FormData>| {
        state.selected_year.set(evt.value());
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Year: "
            select {
                id: "year-select",
                onchange: on_change,
                for year in years.iter() {
                    option {
                        value: "{year}",
                        selected: *year == selected,
                        "{year}"
                    }
                }
            }
        }
    }
}
