//! Dropdown selector for choosing a launch site.

use dioxus::prelude::*;
use spacex_launch::layout::Dropdown;

/// Launch site dropdown.
///
/// Rendered with the layout's default selected. The placeholder is a
/// disabled first option, shown only when nothing is selected. A searchable
/// dropdown gets a filter box (`{id}-search`) whose text hides the options
/// that do not contain it.
#[component]
pub fn SiteSelector(dropdown: Dropdown) -> Element {
    let selected = dropdown.value.clone();
    let search_id = format!("{}-search", dropdown.id);

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            label {
                r#for: "{dropdown.id}",
                style: "font-weight: bold;",
                "Launch Site: "
            }
            if dropdown.searchable {
                input {
                    id: "{search_id}",
                    r#type: "search",
                    class: "dash-dropdown-search",
                    placeholder: "{dropdown.placeholder}",
                    "aria-controls": "{dropdown.id}",
                    "autocomplete": "off",
                }
            }
            select {
                id: "{dropdown.id}",
                class: "dash-dropdown",
                style: "flex: 1;",
                option {
                    value: "",
                    disabled: true,
                    selected: selected.is_empty(),
                    "{dropdown.placeholder}"
                }
                for opt in dropdown.options.iter() {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
