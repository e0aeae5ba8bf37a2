//! Headline learner figures above the charts.

use crate::state::AppState;
use dioxus::prelude::*;
use num_format::{Locale, ToFormattedString};

#[component]
pub fn StatCards() -> Element {
    let state = use_context::<AppState>();
    let cards = state.controller.read().summary_cards();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin: 12px 0;",
            for card in cards.iter() {
                div {
                    key: "{card.label}",
                    class: "lad-card",
                    style: "padding: 12px; border-radius: 8px; border-left: 4px solid {card.color};",
                    div {
                        class: "lad-muted",
                        style: "font-size: 12px;",
                        "{card.label}"
                    }
                    div {
                        style: "font-size: 22px; font-weight: bold; color: {card.color};",
                        {card.value.to_formatted_string(&Locale::en)}
                    }
                    div {
                        class: "lad-muted",
                        style: "font-size: 11px;",
                        "{card.share_percent}% of learners"
                    }
                }
            }
        }
    }
}
