//! Server-side rendering of the dashboard page.
//!
//! The page is rendered once at startup: the layout never changes, so the
//! resulting HTML string is served as-is for every request.

use crate::components::{ErrorDisplay, GraphSlot, PageHeader, PayloadSlider, SiteSelector, PENDING_TEXT};
use crate::js_bridge;
use dioxus::prelude::*;
use spacex_launch::callbacks::Dependency;
use spacex_launch::Layout;

/// DOM id of the error box the client writes failed updates into.
pub const ERROR_BOX_ID: &str = "dash-error";

/// DOM id of the root element the layout is rendered into.
pub const ROOT_ID: &str = "dash-root";

const D3_CDN: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// The dashboard body: title, site selector, pie chart, payload slider,
/// scatter chart.
#[component]
pub fn Page(layout: Layout) -> Element {
    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader { title: layout.title.clone() }
            ErrorDisplay { id: ERROR_BOX_ID.to_string() }

            SiteSelector { dropdown: layout.site_dropdown.clone() }
            br {}

            GraphSlot {
                graph: layout.pie_chart.clone(),
                caption: "Launch successes pie chart".to_string(),
                height: 400,
            }
            br {}

            PayloadSlider { slider: layout.payload_slider.clone() }

            GraphSlot {
                graph: layout.scatter_chart.clone(),
                caption: "Payload mass against launch outcome".to_string(),
                height: 450,
            }
        }
    }
}

/// Render the complete HTML document for `layout`.
///
/// The layout and callback dependencies are embedded as a JSON blob that
/// the client reads on load to wire controls to outputs.
pub fn render_page(layout: &Layout, dependencies: &[Dependency]) -> String {
    let body = dioxus_ssr::render_element(rsx! {
        Page { layout: layout.clone() }
    });
    let bootstrap = js_bridge::bootstrap_json(layout, dependencies);
    log::debug!("rendered page body ({} bytes)", body.len());

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<script src="{D3_CDN}"></script>
</head>
<body>
<div id="{ROOT_ID}">{body}</div>
<script id="{config_id}" type="application/json">{bootstrap}</script>
<script src="{script_path}"></script>
</body>
</html>
"#,
        title = escape_html(&layout.title),
        config_id = js_bridge::CONFIG_ELEMENT_ID,
        script_path = js_bridge::SCRIPT_PATH,
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
