use crate::core::{Axis, ConvertedPoint, Limits, MarkerRadius};
use crate::error::{ChartError, ChartResult};

/// Largest derived marker radius as a share of the smaller plot span.
pub const MAX_MARKER_SPAN_RATIO: f64 = 0.1;

/// Resolves one marker radius per point.
///
/// Fixed radii are used as given. Radii derived from `|y|` or `|value|` are
/// scaled down proportionally when the largest one would exceed
/// `MAX_MARKER_SPAN_RATIO` of the smaller axis span.
pub fn resolve_marker_radii(
    points: &[ConvertedPoint],
    radius: MarkerRadius,
    limits: Limits,
) -> ChartResult<Vec<f64>> {
    let raw: Vec<f64> = match radius {
        MarkerRadius::Fixed(radius) => {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ChartError::InvalidConfiguration(
                    "marker radius must be finite and >= 0".to_owned(),
                ));
            }
            return Ok(vec![radius; points.len()]);
        }
        MarkerRadius::FromY => points
            .iter()
            .map(|point| {
                point.data_y.as_number().map(f64::abs).ok_or_else(|| {
                    ChartError::InvalidConfiguration(
                        "marker radius from y needs numeric y values".to_owned(),
                    )
                })
            })
            .collect::<ChartResult<_>>()?,
        MarkerRadius::FromValue => points
            .iter()
            .map(|point| point.value.map_or(0.0, f64::abs))
            .collect(),
    };

    let cap = MAX_MARKER_SPAN_RATIO
        * limits
            .span(Axis::X)
            .abs()
            .min(limits.span(Axis::Y).abs());
    let largest = raw.iter().copied().fold(0.0_f64, f64::max);
    if largest <= cap || largest == 0.0 {
        return Ok(raw);
    }

    let factor = cap / largest;
    Ok(raw.into_iter().map(|radius| radius * factor).collect())
}
