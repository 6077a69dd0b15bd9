//! multiline-chart-rs: headless multi-series line chart core.
//!
//! Several series share one vertical value domain; each series gets a drawing
//! width derived from its sample count and a fixed step size. Drag gestures
//! select values and report changes through a [`interaction::HapticFeedback`]
//! sink. Rendering goes through backend-agnostic [`render::RenderFrame`]s.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod style;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{MultiLineChart, MultiLineChartConfig};
pub use error::{ChartError, ChartResult};
