use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Axis, BarParams, Limits};
use crate::error::{ChartError, ChartResult};

/// Arrangement of several bar series sharing one x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarPosition {
    /// Side by side inside each category slot.
    #[serde(alias = "together")]
    Grouped,
    /// Each series gets its own equal share of the x span.
    Separated,
    /// Every series draws at the same position.
    #[default]
    Overlay,
}

/// Chart-wide bar options (`options.bars`). Width and alpha win over per-series values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBarOptions {
    pub position: Option<BarPosition>,
    pub width: Option<f64>,
    pub gap: Option<f64>,
    pub alpha: Option<f64>,
}

impl GlobalBarOptions {
    #[must_use]
    pub fn with_position(mut self, position: BarPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Effective alpha for one series, defaulting to opaque.
    #[must_use]
    pub fn alpha_for(&self, params: &BarParams) -> f64 {
        self.alpha.or(params.alpha).unwrap_or(1.0)
    }
}

/// Resolved layout request for one bar series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayoutOptions {
    pub position: BarPosition,
    pub total_series_count: usize,
    pub series_index: usize,
    pub explicit_width: Option<f64>,
    pub gap_px: f64,
}

impl BarLayoutOptions {
    #[must_use]
    pub fn new(position: BarPosition, total_series_count: usize, series_index: usize) -> Self {
        Self {
            position,
            total_series_count,
            series_index,
            explicit_width: None,
            gap_px: 0.0,
        }
    }

    /// Merges chart-wide and per-series options for bar series `series_index`.
    #[must_use]
    pub fn for_series(
        global: &GlobalBarOptions,
        params: &BarParams,
        series_index: usize,
        total_series_count: usize,
    ) -> Self {
        Self {
            position: global.position.unwrap_or_default(),
            total_series_count,
            series_index,
            explicit_width: global.width.or(params.width),
            gap_px: global.gap.or(params.gap).unwrap_or(0.0),
        }
    }

    #[must_use]
    pub fn with_explicit_width(mut self, width: f64) -> Self {
        self.explicit_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap_px: f64) -> Self {
        self.gap_px = gap_px;
        self
    }

    fn validate(self) -> ChartResult<Self> {
        if self.total_series_count == 0 || self.series_index >= self.total_series_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "bar series index {} is out of range for {} bar series",
                self.series_index, self.total_series_count
            )));
        }
        if let Some(width) = self.explicit_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidConfiguration(
                    "bar width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return Err(ChartError::InvalidConfiguration(
                "bar gap must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Pixel placement of one bar series.
///
/// A bar's left edge is `point.x + offset_px`; `limits` are the (possibly
/// narrowed) limits the series' points are converted through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayout {
    pub limits: Limits,
    pub slot_px: f64,
    pub width_px: f64,
    pub offset_px: f64,
}

/// Computes width and offset of one bar series so several series never overlap
/// unless overlay is requested.
///
/// Without an explicit width a bar fills its category slot minus the gap. When
/// the gap swallows the slot the bar degenerates to zero width instead of failing.
pub fn resolve_bar_layout(
    options: BarLayoutOptions,
    limits: Limits,
    category_count: usize,
) -> ChartResult<BarLayout> {
    let options = options.validate()?;
    let count = options.total_series_count as f64;
    let index = options.series_index as f64;

    let limits = match options.position {
        BarPosition::Separated => {
            let group = limits.span(Axis::X) / count;
            let minx = limits.minx + group * index;
            limits.with_x(minx, minx + group)
        }
        BarPosition::Grouped | BarPosition::Overlay => limits,
    };

    if category_count == 0 {
        return Ok(BarLayout {
            limits,
            slot_px: 0.0,
            width_px: 0.0,
            offset_px: 0.0,
        });
    }

    let slot = limits.span(Axis::X) / category_count as f64;
    let per_series_slot = match options.position {
        BarPosition::Grouped => (slot - options.gap_px) / count,
        BarPosition::Separated | BarPosition::Overlay => slot - options.gap_px,
    };
    let width = match options.explicit_width {
        Some(width) => width,
        None if per_series_slot > 0.0 => per_series_slot,
        None => {
            warn!(
                slot_px = slot,
                gap_px = options.gap_px,
                series_index = options.series_index,
                "bar gap leaves no room; drawing zero-width bars"
            );
            0.0
        }
    };

    let offset = match options.position {
        BarPosition::Grouped => (slot - width * count) / 2.0 + width * index,
        BarPosition::Separated | BarPosition::Overlay => (slot - width) / 2.0,
    };

    Ok(BarLayout {
        limits,
        slot_px: slot,
        width_px: width,
        offset_px: offset,
    })
}

#[cfg(test)]
mod tests {
    use super::{BarLayoutOptions, BarPosition, GlobalBarOptions, resolve_bar_layout};
    use crate::core::{BarParams, Limits};

    #[test]
    fn global_width_wins_over_series_width() {
        let params = BarParams {
            width: Some(4.0),
            gap: Some(2.0),
            ..BarParams::default()
        };
        let global = GlobalBarOptions::default().with_width(9.0);
        let options = BarLayoutOptions::for_series(&global, &params, 0, 1);
        assert_eq!(options.explicit_width, Some(9.0));
        assert_eq!(options.gap_px, 2.0);
        assert_eq!(options.position, BarPosition::Overlay);
    }

    #[test]
    fn index_outside_series_count_is_rejected() {
        let limits = Limits::new(0.0, 100.0, 100.0, 0.0);
        let result = resolve_bar_layout(BarLayoutOptions::new(BarPosition::Grouped, 2, 2), limits, 4);
        assert!(result.is_err());
    }

    #[test]
    fn gap_wider_than_slot_yields_zero_width() {
        let limits = Limits::new(0.0, 100.0, 100.0, 0.0);
        let layout = resolve_bar_layout(
            BarLayoutOptions::new(BarPosition::Overlay, 1, 0).with_gap(60.0),
            limits,
            2,
        )
        .expect("layout");
        assert_eq!(layout.width_px, 0.0);
        assert!((layout.offset_px - 25.0).abs() <= 1e-9);
    }
}
