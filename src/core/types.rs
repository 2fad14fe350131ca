use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// How one axis interprets raw data values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// Data space is an ordered numeric interval.
    Continuous,
    /// Data space is a finite ordered set of keys; the key's index is the data value.
    Categorical,
}

impl AxisMode {
    #[must_use]
    pub fn is_continuous(self) -> bool {
        matches!(self, Self::Continuous)
    }
}

/// Raw domain value carried by a point on one axis.
///
/// Numbers are wrapped in `OrderedFloat` so any value can be used as a
/// hashable category key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Number(OrderedFloat<f64>),
    Text(String),
}

impl DataValue {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(value.0),
            Self::Text(_) => None,
        }
    }

    /// Returns the value as a finite number usable on a continuous axis.
    pub fn continuous_value(&self, axis_name: &str) -> ChartResult<f64> {
        match self {
            Self::Number(value) if value.0.is_finite() => Ok(value.0),
            Self::Number(value) => Err(ChartError::InvalidInput(format!(
                "{axis_name} value `{}` must be finite on a continuous axis",
                value.0
            ))),
            Self::Text(text) => Err(ChartError::InvalidInput(format!(
                "{axis_name} value `{text}` is not numeric but the axis is continuous"
            ))),
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => f.write_str(&format_number(value.0)),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        Self::number(value)
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        Self::number(f64::from(value))
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Formats a data-space number for labels: integral values print without a
/// fractional part and negative zero prints as `0`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}

/// Raw domain datum as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: DataValue,
    pub y: DataValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<DataValue>, y: impl Into<DataValue>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            label: None,
            color: None,
            value: None,
        }
    }

    /// Zero-valued point inserted for a category a series does not contain.
    #[must_use]
    pub fn padding(x: DataValue) -> Self {
        Self::new(x, 0.0)
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{DataPoint, DataValue, format_number};

    #[test]
    fn numbers_format_like_plain_decimals() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-10.0), "-10");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn data_values_parse_untagged_from_json() {
        let point: DataPoint =
            serde_json::from_str(r#"{"x": "a", "y": 3, "label": "first"}"#).expect("parse");
        assert_eq!(point.x, DataValue::text("a"));
        assert_eq!(point.y, DataValue::number(3.0));
        assert_eq!(point.label.as_deref(), Some("first"));
        assert!(point.color.is_none());
    }

    #[test]
    fn text_value_is_rejected_on_continuous_axis() {
        assert!(DataValue::text("a").continuous_value("x").is_err());
        assert!(DataValue::number(f64::NAN).continuous_value("x").is_err());
        assert_eq!(
            DataValue::number(1.5).continuous_value("x").expect("finite"),
            1.5
        );
    }
}
