//! Core types for the SpaceX launch records dashboard.
//!
//! This crate provides:
//! - `record`: the immutable `LaunchRecord` row and its binary `Outcome`
//! - `table`: the `LaunchTable` loaded once from CSV at startup
//! - `aggregate`: per-site and per-outcome counts, payload range filtering
//! - `figure`: serializable chart descriptions consumed by the D3.js client
//! - `layout`: the static page description (title, controls, chart slots)
//! - `handlers`: the pie and scatter chart handlers
//! - `callbacks`: input → output subscription map driving chart updates
//!
//! # Usage
//!
//! ```rust
//! use spacex_launch::{handlers, LaunchTable, ALL_SITES};
//!
//! let table = LaunchTable::from_csv_str(
//!     "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
//!      KSC LC-39A,5300,1,FT\n\
//!      KSC LC-39A,3600,0,FT\n",
//! )
//! .unwrap();
//!
//! let pie = handlers::pie_chart(&table, ALL_SITES);
//! assert_eq!(pie.total(), 1);
//! ```

pub mod aggregate;
pub mod callbacks;
pub mod figure;
pub mod handlers;
pub mod layout;
pub mod record;
pub mod table;

pub use aggregate::PayloadRange;
pub use callbacks::{CallbackError, CallbackRegistry, ControlState, Dashboard, PropId};
pub use figure::{Figure, PieFigure, ScatterFigure};
pub use handlers::ALL_SITES;
pub use layout::Layout;
pub use record::{LaunchRecord, Outcome};
pub use table::LaunchTable;
