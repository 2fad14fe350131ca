use serde::{Deserialize, Serialize};

use crate::core::{AxisMode, AxisSpec, GlobalBarOptions, Series, TitleSpec};
use crate::error::{ChartError, ChartResult};

/// Chart-wide options shared by every series.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub bars: Option<GlobalBarOptions>,
}

/// Declarative chart description supplied wholesale per render call.
///
/// The engine takes ownership of the spec; series data is aligned on a copy
/// and never written back to the caller.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChartSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<TitleSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<TitleSpec>,
    pub series: Vec<Series>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_x: Option<AxisSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis_y: Option<AxisSpec>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartSpec {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self {
            series,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: TitleSpec) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    #[must_use]
    pub fn with_axis_x(mut self, axis: AxisSpec) -> Self {
        self.axis_x = Some(axis);
        self
    }

    #[must_use]
    pub fn with_axis_y(mut self, axis: AxisSpec) -> Self {
        self.axis_y = Some(axis);
        self
    }

    #[must_use]
    pub fn with_bar_options(mut self, bars: GlobalBarOptions) -> Self {
        self.options.bars = Some(bars);
        self
    }

    /// Mode of the x axis; an undeclared axis is continuous.
    pub fn x_mode(&self) -> ChartResult<AxisMode> {
        axis_mode(self.axis_x.as_ref())
    }

    /// Mode of the y axis; an undeclared axis is continuous.
    pub fn y_mode(&self) -> ChartResult<AxisMode> {
        axis_mode(self.axis_y.as_ref())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidInput(format!("failed to parse chart spec json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidInput(format!("failed to serialize chart spec json: {e}"))
        })
    }
}

fn axis_mode(spec: Option<&AxisSpec>) -> ChartResult<AxisMode> {
    spec.map_or(Ok(AxisMode::Continuous), AxisSpec::mode)
}
