//! Loading indicator for the report fetch.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Year being fetched
    pub year: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            class: "lad-muted",
            style: "display: flex; justify-content: center; align-items: center; padding: 12px;",
            "Loading {props.year} report..."
        }
    }
}
