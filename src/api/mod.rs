mod axis_render_frame_builder;
mod bar_series_render_frame_builder;
mod chart_spec;
mod engine;
mod engine_config;
mod line_series_render_frame_builder;
mod point_annotation_builder;
mod render_context;
mod render_frame_builder;
mod series_render_frame_builder;
mod title_render_frame_builder;
mod validation;

pub use chart_spec::{ChartOptions, ChartSpec};
pub use engine::ChartEngine;
pub use engine_config::{ChartEngineConfig, ChartStyle, PlotInsets};
pub use render_context::{PreparedChart, RenderContext};
