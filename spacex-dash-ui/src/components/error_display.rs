//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub id: String,
    #[props(default = String::new())]
    pub message: String,
}

/// Displays an error message in a styled box. Hidden while the message is
/// empty; the client fills it in when a chart update fails.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let display = if props.message.is_empty() { "none" } else { "block" };

    rsx! {
        div {
            id: "{props.id}",
            style: "display: {display}; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            span { class: "dash-error-message", "{props.message}" }
        }
    }
}
