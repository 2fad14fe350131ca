use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Data-space bounds combined across a series collection.
///
/// For categorical axes the bounds are category counts, not data values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub minx: f64,
    pub maxx: f64,
    pub miny: f64,
    pub maxy: f64,
}

impl Range {
    #[must_use]
    pub const fn new(minx: f64, maxx: f64, miny: f64, maxy: f64) -> Self {
        Self {
            minx,
            maxx,
            miny,
            maxy,
        }
    }

    #[must_use]
    pub fn bounds(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.minx, self.maxx),
            Axis::Y => (self.miny, self.maxy),
        }
    }

    #[must_use]
    pub fn is_degenerate(self, axis: Axis) -> bool {
        let (min, max) = self.bounds(axis);
        min == max
    }

    /// Widens every single-valued axis to `[min, min + 1]` so it can be converted.
    #[must_use]
    pub fn with_unit_fallback(mut self) -> Self {
        if self.is_degenerate(Axis::X) {
            self.maxx = self.minx + 1.0;
        }
        if self.is_degenerate(Axis::Y) {
            self.maxy = self.miny + 1.0;
        }
        self
    }
}

/// Destination pixel interval per axis.
///
/// No ordering is assumed: canvas y grows downward so `miny > maxy` is normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub minx: f64,
    pub maxx: f64,
    pub miny: f64,
    pub maxy: f64,
}

impl Limits {
    #[must_use]
    pub const fn new(minx: f64, maxx: f64, miny: f64, maxy: f64) -> Self {
        Self {
            minx,
            maxx,
            miny,
            maxy,
        }
    }

    #[must_use]
    pub fn bounds(self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::X => (self.minx, self.maxx),
            Axis::Y => (self.miny, self.maxy),
        }
    }

    /// Signed extent `max - min` of one axis.
    #[must_use]
    pub fn span(self, axis: Axis) -> f64 {
        let (min, max) = self.bounds(axis);
        max - min
    }

    #[must_use]
    pub fn with_x(mut self, minx: f64, maxx: f64) -> Self {
        self.minx = minx;
        self.maxx = maxx;
        self
    }
}

/// Maps a data-space value onto pixel space for one axis.
///
/// The map is affine from `[range_min, range_max]` onto `[limit_min, limit_max]`
/// and never clamps: values outside the range extrapolate linearly. Both
/// endpoints map exactly onto the corresponding limits.
pub fn convert(value: f64, range: Range, limits: Limits, axis: Axis) -> ChartResult<f64> {
    let (range_min, range_max) = range.bounds(axis);
    let (limit_min, limit_max) = limits.bounds(axis);

    let range_span = range_max - range_min;
    if range_span == 0.0 {
        return Err(ChartError::DivisionByZero { axis });
    }
    if !value.is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "{axis} value must be finite to be converted"
        )));
    }

    let ratio = (value - range_min) / range_span;
    Ok(limit_min * (1.0 - ratio) + limit_max * ratio)
}
