//! Reusable Dioxus RSX components for the dashboard page.

mod error_display;
mod graph_slot;
mod page_header;
mod payload_slider;
mod site_selector;

pub use error_display::ErrorDisplay;
pub use graph_slot::{GraphSlot, PENDING_TEXT};
pub use page_header::PageHeader;
pub use payload_slider::PayloadSlider;
pub use site_selector::SiteSelector;
