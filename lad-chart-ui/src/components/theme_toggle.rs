//! Light/dark switch.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let mut state = use_context::<AppState>();
    let dark = state.controller.read().theme().is_dark();

    let on_click = move |_| {
        let theme = state.controller.write().toggle_theme();
        log::info!("[LAD] app: theme switched to {:?}", theme);
    };

    rsx! {
        button {
            id: "theme-toggle",
            style: "padding: 4px 12px; cursor: pointer; border-radius: 4px; border: 1px solid #94a3b8; background: transparent; color: inherit;",
            onclick: on_click,
            if dark { "\u{2600} Light" } else { "\u{263E} Dark" }
        }
    }
}
