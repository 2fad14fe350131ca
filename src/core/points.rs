use crate::core::{Axis, Categories, DataPoint, DataValue, Limits, Range, convert};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// How raw values on one axis become data-space numbers.
#[derive(Debug, Clone, Copy)]
pub enum AxisDomain<'a> {
    Continuous,
    /// The category's index is the data value.
    Categorical(&'a Categories),
}

impl AxisDomain<'_> {
    pub fn data_value(&self, value: &DataValue, axis: Axis) -> ChartResult<f64> {
        match self {
            Self::Continuous => value.continuous_value(&axis.to_string()),
            Self::Categorical(categories) => categories
                .index_of(value)
                .map(|index| index as f64)
                .ok_or_else(|| {
                    ChartError::InvalidInput(format!(
                        "{axis} value `{value}` is not a known category"
                    ))
                }),
        }
    }
}

/// Pixel position of one point plus the raw datum it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedPoint {
    pub x: f64,
    pub y: f64,
    pub data_x: DataValue,
    pub data_y: DataValue,
    pub value: Option<f64>,
    pub label: Option<String>,
    pub color: Color,
}

/// Converts raw points into pixel space, keeping supplied order.
pub fn convert_points(
    data: &[DataPoint],
    x_domain: AxisDomain<'_>,
    y_domain: AxisDomain<'_>,
    range: Range,
    limits: Limits,
) -> ChartResult<Vec<ConvertedPoint>> {
    let mut converted = Vec::with_capacity(data.len());
    for point in data {
        let x = convert(x_domain.data_value(&point.x, Axis::X)?, range, limits, Axis::X)?;
        let y = convert(y_domain.data_value(&point.y, Axis::Y)?, range, limits, Axis::Y)?;
        converted.push(ConvertedPoint {
            x,
            y,
            data_x: point.x.clone(),
            data_y: point.y.clone(),
            value: point.value,
            label: point.label.clone(),
            color: point.color.unwrap_or(Color::BLACK),
        });
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::{AxisDomain, convert_points};
    use crate::core::{Categories, DataPoint, DataValue, Limits, Range};
    use crate::render::Color;

    #[test]
    fn categorical_values_convert_by_index() {
        let categories = Categories::from_values([DataValue::text("a"), DataValue::text("b")]);
        let points = convert_points(
            &[DataPoint::new("b", 4.0).with_color(Color::WHITE)],
            AxisDomain::Categorical(&categories),
            AxisDomain::Continuous,
            Range::new(0.0, 2.0, 0.0, 4.0),
            Limits::new(0.0, 200.0, 100.0, 0.0),
        )
        .expect("convert");

        assert!((points[0].x - 100.0).abs() <= 1e-9);
        assert!((points[0].y - 0.0).abs() <= 1e-9);
        assert_eq!(points[0].data_x, DataValue::text("b"));
        assert_eq!(points[0].color, Color::WHITE);
    }

    #[test]
    fn unknown_category_is_invalid_input() {
        let categories = Categories::from_values([DataValue::text("a")]);
        let result = convert_points(
            &[DataPoint::new("z", 1.0)],
            AxisDomain::Categorical(&categories),
            AxisDomain::Continuous,
            Range::new(0.0, 1.0, 0.0, 1.0),
            Limits::new(0.0, 10.0, 10.0, 0.0),
        );
        assert!(result.is_err());
    }
}
