//! D3.js chart scripts and the data handed to them.
//!
//! Chart functions live in `assets/js/*.js` and are embedded at compile
//! time. They are concatenated into one bundle served at [`SCRIPT_PATH`]
//! and expose `renderPieChart(containerId, figure)` and
//! `renderScatterChart(containerId, figure)` on `window`. The client script
//! reads the bootstrap blob, posts control changes to the server and hands
//! each returned figure to the matching renderer.

use serde::Serialize;
use spacex_launch::callbacks::Dependency;
use spacex_launch::Layout;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static PIE_CHART_JS: &str = include_str!("../assets/js/pie-chart.js");
static SCATTER_CHART_JS: &str = include_str!("../assets/js/scatter-chart.js");
static DASH_CLIENT_JS: &str = include_str!("../assets/js/dash-client.js");

/// URL the bundled chart scripts are served from.
pub const SCRIPT_PATH: &str = "/assets/dash.js";

/// DOM id of the `<script type="application/json">` bootstrap element.
pub const CONFIG_ELEMENT_ID: &str = "dash-config";

/// Endpoint that recomputes a single output from the supplied inputs.
pub const UPDATE_PATH: &str = "/_dash-update-component";

/// Endpoint the client posts control changes to. The server decides which
/// outputs to recompute.
pub const CHANGE_PATH: &str = "/_dash-control-change";

/// All chart scripts followed by the client, in load order.
pub fn chart_scripts() -> String {
    [TOOLTIP_JS, PIE_CHART_JS, SCATTER_CHART_JS, DASH_CLIENT_JS].join("\n")
}

#[derive(Serialize)]
struct Bootstrap<'a> {
    layout: &'a Layout,
    dependencies: &'a [Dependency],
    change_url: &'a str,
}

/// JSON for the inline bootstrap element.
///
/// `</` is escaped so a site name can never close the surrounding
/// `<script>` tag.
pub fn bootstrap_json(layout: &Layout, dependencies: &[Dependency]) -> String {
    let bootstrap = Bootstrap {
        layout,
        dependencies,
        change_url: CHANGE_PATH,
    };
    serde_json::to_string(&bootstrap)
        .unwrap_or_else(|e| {
            log::error!("failed to serialize page bootstrap: {e}");
            "{}".to_string()
        })
        .replace("</", "<\\/")
}
