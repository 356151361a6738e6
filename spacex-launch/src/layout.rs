//! Static page description.
//!
//! Built once from the loaded table and never modified. The UI crate
//! renders it to HTML; the server also exposes it as JSON.

use crate::handlers::ALL_SITES;
use crate::table::LaunchTable;
use serde::Serialize;

pub const TITLE: &str = "SpaceX Launch Records Dashboard";

pub const SITE_DROPDOWN_ID: &str = "site_dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload_slider";
pub const PIE_CHART_ID: &str = "success_pie_chart";
pub const SCATTER_CHART_ID: &str = "success_payload_scatter_chart";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10000.0;
pub const SLIDER_STEP: f64 = 1000.0;
const SLIDER_MARK_EVERY: f64 = 2500.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<SelectOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Dual-handle range control.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RangeSlider {
    pub id: String,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub value: [f64; 2],
    pub marks: Vec<SliderMark>,
}

/// Empty chart slot filled in by a callback.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Graph {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub pie_chart: Graph,
    pub payload_slider: RangeSlider,
    pub scatter_chart: Graph,
}

impl Layout {
    pub fn build(table: &LaunchTable) -> Self {
        let mut options = vec![SelectOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.sites().into_iter().map(|site| SelectOption {
            label: site.to_string(),
            value: site.to_string(),
        }));

        let marks = (0..)
            .map(|i| SLIDER_MIN + SLIDER_MARK_EVERY * i as f64)
            .take_while(|v| *v <= SLIDER_MAX)
            .map(|value| SliderMark {
                value,
                label: format!("{value}"),
            })
            .collect();

        Self {
            title: TITLE.to_string(),
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select launch site".to_string(),
                searchable: true,
            },
            pie_chart: Graph {
                id: PIE_CHART_ID.to_string(),
            },
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID.to_string(),
                label: "Payload range (Kg):".to_string(),
                min: SLIDER_MIN,
                max: SLIDER_MAX,
                step: SLIDER_STEP,
                value: [table.min_payload(), table.max_payload()],
                marks,
            },
            scatter_chart: Graph {
                id: SCATTER_CHART_ID.to_string(),
            },
        }
    }
}
