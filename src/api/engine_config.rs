use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::render::Color;

/// Pixel insets between the canvas edge and the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotInsets {
    /// Left/bottom inset used when a continuous axis starts at zero.
    pub zero_baseline_px: f64,
    /// Left/bottom inset otherwise.
    pub inset_px: f64,
    pub right_px: f64,
    pub top_px: f64,
    /// Left/bottom inset of a categorical axis' tick limits.
    pub axis_px: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            zero_baseline_px: 50.0,
            inset_px: 60.0,
            right_px: 60.0,
            top_px: 60.0,
            axis_px: 50.0,
        }
    }
}

impl PlotInsets {
    /// Widest inset on each axis, used to check the plot area is not empty.
    #[must_use]
    pub fn max_horizontal(self) -> f64 {
        self.zero_baseline_px.max(self.inset_px).max(self.axis_px) + self.right_px
    }

    #[must_use]
    pub fn max_vertical(self) -> f64 {
        self.zero_baseline_px.max(self.inset_px).max(self.axis_px) + self.top_px
    }
}

/// Fixed styling of titles and axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub text_color: Color,
    pub axis_color: Color,
    pub axis_line_width_px: f64,
    pub title_font_size_px: f64,
    pub axis_title_font_size_px: f64,
    pub tick_label_font_size_px: f64,
    pub tick_label_padding_px: f64,
    pub title_top_px: f64,
    pub subtitle_top_px: f64,
    pub axis_title_offset_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            text_color: Color::BLACK,
            axis_color: Color::BLACK,
            axis_line_width_px: 1.0,
            title_font_size_px: 20.0,
            axis_title_font_size_px: 20.0,
            tick_label_font_size_px: 10.0,
            tick_label_padding_px: 2.0,
            title_top_px: 20.0,
            subtitle_top_px: 50.0,
            axis_title_offset_px: 20.0,
        }
    }
}

/// Public engine configuration.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub insets: PlotInsets,
    #[serde(default)]
    pub style: ChartStyle,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            insets: PlotInsets::default(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }
}
