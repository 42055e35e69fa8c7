mod component;
mod map_panel;

use dioxus::prelude::*;

pub use component::{PlanningBoard, RowStyles};
pub use map_panel::MapPanel;

use crate::config::PageConfig;
use crate::dom;

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        dom::window()
            .and_then(|window| PageConfig::from_window(&window))
            .map_err(|err| err.to_string())
    });

    match config {
        Ok(config) => rsx! {
            div {
                class: "planner",
                style: "display: flex; flex-direction: column; gap: 16px; padding: 16px;",
                MapPanel { config: config.clone() }
                PlanningBoard { rows: config.planning_rows.clone() }
            }
        },
        Err(message) => rsx! {
            div {
                class: "planner-error",
                style: "color: #f44336; padding: 32px; text-align: center;",
                "{message}"
            }
        },
    }
}
