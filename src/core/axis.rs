use serde::{Deserialize, Serialize};

use crate::core::AxisMode;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const DEFAULT_TICK_STEP: f64 = 1.0;
pub const DEFAULT_TICK_SIZE_PX: f64 = 5.0;

/// Text placed as a chart or axis title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSpec {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_px: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TitleSpec {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size_px: None,
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TickSpec {
    /// Data-space distance between continuous ticks.
    pub step: Option<f64>,
    /// Tick mark length in pixels.
    pub size: Option<f64>,
    /// Whether tick labels are drawn.
    pub labels: Option<bool>,
}

impl TickSpec {
    #[must_use]
    pub fn with_step(step: f64) -> Self {
        Self {
            step: Some(step),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step.unwrap_or(DEFAULT_TICK_STEP)
    }

    #[must_use]
    pub fn size(&self) -> f64 {
        self.size.unwrap_or(DEFAULT_TICK_SIZE_PX)
    }

    #[must_use]
    pub fn show_labels(&self) -> bool {
        self.labels.unwrap_or(true)
    }
}

/// Declarative description of one axis.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisSpec {
    #[serde(default, alias = "type")]
    pub mode: Option<AxisMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickSpec>,
}

impl AxisSpec {
    #[must_use]
    pub fn new(mode: AxisMode) -> Self {
        Self {
            mode: Some(mode),
            title: None,
            ticks: None,
        }
    }

    #[must_use]
    pub fn continuous() -> Self {
        Self::new(AxisMode::Continuous)
    }

    #[must_use]
    pub fn categorical() -> Self {
        Self::new(AxisMode::Categorical)
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickSpec) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// The axis mode, which a declared axis must state.
    pub fn mode(&self) -> ChartResult<AxisMode> {
        self.mode.ok_or_else(|| {
            ChartError::InvalidConfiguration("axis spec must declare its mode".to_owned())
        })
    }
}
