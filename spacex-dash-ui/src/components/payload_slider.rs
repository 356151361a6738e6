//! Dual-handle payload range slider.

use dioxus::prelude::*;
use spacex_launch::layout::RangeSlider;

/// Two range inputs sharing one track: `{id}-low` and `{id}-high`.
///
/// The client keeps `low <= high` while dragging and sends the pair as the
/// slider's `value`.
#[component]
pub fn PayloadSlider(slider: RangeSlider) -> Element {
    let [low, high] = slider.value;
    let low_id = format!("{}-low", slider.id);
    let high_id = format!("{}-high", slider.id);

    rsx! {
        div {
            id: "{slider.id}",
            class: "dash-range-slider",
            style: "margin: 8px 0;",
            "data-min": "{slider.min}",
            "data-max": "{slider.max}",
            "data-step": "{slider.step}",
            p {
                style: "font-weight: bold; margin: 0 0 4px 0;",
                "{slider.label} "
                span { id: "{slider.id}-readout", "{low} - {high}" }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                input {
                    id: "{low_id}",
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{low}",
                    style: "flex: 1;",
                }
                input {
                    id: "{high_id}",
                    r#type: "range",
                    min: "{slider.min}",
                    max: "{slider.max}",
                    step: "{slider.step}",
                    value: "{high}",
                    style: "flex: 1;",
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #888;",
                for mark in slider.marks.iter() {
                    span { "{mark.label}" }
                }
            }
        }
    }
}
