//! graph-rs: coordinate-mapping and layout engine for 2-D line, bar and
//! scatter charts.
//!
//! Declarative `ChartSpec`s are aligned, scaled and laid out into a
//! backend-agnostic `RenderFrame` that any `Renderer` can draw.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartSpec};
pub use error::{ChartError, ChartResult};
