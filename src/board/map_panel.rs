use dioxus::prelude::*;

use crate::config::{PageConfig, MAP_CONTAINER_ID};
use crate::controller::{with_planner, Planner};

#[component]
pub fn MapPanel(config: PageConfig) -> Element {
    // The container has to be mounted before Leaflet can attach to it.
    use_effect(move || {
        if let Err(err) = with_planner(|planner| planner.render_map(&config)) {
            tracing::error!(error = %err, "map render failed");
        }
    });
    use_drop(|| with_planner(Planner::destroy_map));

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map-panel",
            style: "height: 480px; width: 100%; border-radius: 8px;",
        }
    }
}
