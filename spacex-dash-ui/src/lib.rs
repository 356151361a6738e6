//! Page components and D3.js bridge for the SpaceX launch dashboard.
//!
//! This crate provides:
//! - `components`: Dioxus RSX components for the title, controls and chart slots
//! - `page`: renders the full HTML document on the server via `dioxus-ssr`
//! - `js_bridge`: the embedded D3.js chart scripts and the client bootstrap blob

pub mod components;
pub mod js_bridge;
pub mod page;

pub use page::render_page;
