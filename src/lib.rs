//! barchart-rs: minimal bar-chart rendering library.
//!
//! The crate keeps a strict split between deterministic chart math
//! (`core`), backend-agnostic draw primitives and render surfaces
//! (`render`), and the public `BarChart` builder (`api`). A chart is
//! constructed with a container selector, and each render operation
//! projects one data array into a `RenderFrame` handed to the surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use core::DataPoint;
pub use error::{BarChartError, BarChartResult};
