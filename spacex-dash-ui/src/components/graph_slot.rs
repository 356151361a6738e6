//! Slot a chart figure is drawn into.

use dioxus::prelude::*;
use spacex_launch::layout::Graph;

/// Placeholder shown until the first figure for a slot arrives.
pub const PENDING_TEXT: &str = "Loading chart...";

/// Empty chart slot for `graph`, marked busy until the client draws the
/// first figure into `#{graph.id}` and drops the `.graph-pending` note.
#[component]
pub fn GraphSlot(graph: Graph, caption: String, height: u32) -> Element {
    rsx! {
        figure {
            class: "dash-graph-slot",
            style: "margin: 0; min-height: {height}px; position: relative;",
            "aria-busy": "true",
            p {
                class: "graph-pending",
                style: "position: absolute; top: 45%; width: 100%; text-align: center; color: #666; margin: 0;",
                "{PENDING_TEXT}"
            }
            div {
                id: "{graph.id}",
                class: "dash-graph",
                "role": "img",
                "aria-label": "{caption}",
                "data-property": "figure",
            }
        }
    }
}
