use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::render::Color;

pub const DEFAULT_LINE_WIDTH_PX: f64 = 1.0;
pub const DEFAULT_MARKER_RADIUS_PX: f64 = 5.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 12.0;
pub const DEFAULT_LABEL_OFFSET_PX: f64 = 10.0;
pub const DEFAULT_BAR_OUTLINE_WIDTH_PX: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    #[serde(alias = "linear")]
    Line,
    Bar,
    Scatter,
}

/// One declarative series as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub params: RenderParams,
}

impl Series {
    #[must_use]
    pub fn new(kind: SeriesKind, data: Vec<DataPoint>) -> Self {
        Self {
            kind,
            data,
            params: RenderParams::default(),
        }
    }

    #[must_use]
    pub fn line(data: Vec<DataPoint>) -> Self {
        Self::new(SeriesKind::Line, data)
    }

    #[must_use]
    pub fn bar(data: Vec<DataPoint>) -> Self {
        Self::new(SeriesKind::Bar, data)
    }

    #[must_use]
    pub fn scatter(data: Vec<DataPoint>) -> Self {
        Self::new(SeriesKind::Scatter, data)
    }

    #[must_use]
    pub fn with_params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }
}

/// Per-series styling. Every field is optional and falls back to a fixed default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Stroke color of a line series.
    pub color: Option<Color>,
    /// Stroke width of a line series.
    pub width: Option<f64>,
    pub points: Option<PointStyle>,
    pub labels: Option<LabelStyle>,
    pub bars: BarParams,
}

impl RenderParams {
    #[must_use]
    pub fn line_color(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.width.unwrap_or(DEFAULT_LINE_WIDTH_PX)
    }
}

/// How marker radii are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerRadius {
    Fixed(f64),
    /// Proportional to `|y|`, rescaled to fit the plot.
    FromY,
    /// Proportional to `|value|`, rescaled to fit the plot.
    FromValue,
}

impl Default for MarkerRadius {
    fn default() -> Self {
        Self::Fixed(DEFAULT_MARKER_RADIUS_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PointStyle {
    pub color: Option<Color>,
    pub radius: MarkerRadius,
}

impl PointStyle {
    #[must_use]
    pub fn marker_color(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }
}

/// Which text annotates each point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    /// `(x,y)` coordinate pair.
    #[default]
    Values,
    X,
    Y,
    Value,
    Label,
}

/// Pixel nudge applied to point labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOffset {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for LabelOffset {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: DEFAULT_LABEL_OFFSET_PX,
            top: 0.0,
            bottom: 0.0,
        }
    }
}

impl LabelOffset {
    /// Net `(dx, dy)` in pixel space.
    #[must_use]
    pub fn delta(self) -> (f64, f64) {
        (self.right - self.left, self.bottom - self.top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelStyle {
    pub kind: LabelKind,
    pub color: Option<Color>,
    pub font_size_px: Option<f64>,
    pub offset: LabelOffset,
}

impl LabelStyle {
    #[must_use]
    pub fn new(kind: LabelKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text_color(&self) -> Color {
        self.color.unwrap_or(Color::BLACK)
    }

    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size_px.unwrap_or(DEFAULT_LABEL_FONT_SIZE_PX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarStyle {
    #[default]
    Rect,
    /// A single stick from the baseline to the value.
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarFill {
    /// Each bar uses its point's color.
    #[default]
    PerPoint,
    /// Every bar uses `BarParams::fill_color`.
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarOutline {
    pub color: Option<Color>,
    pub width: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BarParams {
    pub width: Option<f64>,
    pub gap: Option<f64>,
    pub alpha: Option<f64>,
    pub style: BarStyle,
    pub fill: BarFill,
    pub fill_color: Option<Color>,
    pub outline: BarOutline,
}

impl BarParams {
    #[must_use]
    pub fn outline_color(&self) -> Color {
        self.outline.color.unwrap_or(Color::BLACK)
    }

    #[must_use]
    pub fn outline_width(&self) -> f64 {
        self.outline.width.unwrap_or(DEFAULT_BAR_OUTLINE_WIDTH_PX)
    }

    /// Fill for one bar given the point's own color.
    #[must_use]
    pub fn fill_for(&self, point_color: Color) -> Color {
        match self.fill {
            BarFill::PerPoint => point_color,
            BarFill::Fixed => self.fill_color.unwrap_or(Color::WHITE),
        }
    }
}
