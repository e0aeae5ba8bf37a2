//! Error banner with a retry action.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Shows the last load or render error. Retry re-requests the selected year.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let state = use_context::<AppState>();

    let on_retry = move |_| {
        let year = (state.selected_year)();
        spawn(async move {
            state.load_year(year).await;
        });
    };

    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "margin-left: 12px; cursor: pointer;",
                onclick: on_retry,
                "Retry"
            }
        }
    }
}
