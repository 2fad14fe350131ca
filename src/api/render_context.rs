use tracing::debug;

use crate::core::{
    Axis, AxisDomain, AxisMode, AxisSpec, BarLayout, BarLayoutOptions, Categories, ConvertedPoint,
    GlobalBarOptions, Limits, PreparedSeries, Range, Series, SeriesKind, TitleSpec,
    compute_range, convert, convert_points, resolve_bar_layout,
};
use crate::core::Viewport;
use crate::error::ChartResult;

use super::ChartEngineConfig;

/// Immutable per-render state shared by every series and axis builder.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub viewport: Viewport,
    pub x_mode: AxisMode,
    pub y_mode: AxisMode,
    pub range: Range,
    /// Pixel limits series are plotted through.
    pub limits: Limits,
    /// Pixel limits ticks are placed through.
    pub axis_limits: Limits,
    pub x_categories: Categories,
    pub y_categories: Categories,
    pub bar_options: GlobalBarOptions,
    pub bar_series_count: usize,
}

impl RenderContext {
    pub fn resolve(
        config: &ChartEngineConfig,
        x_mode: AxisMode,
        y_mode: AxisMode,
        prepared: &PreparedSeries,
        bar_options: GlobalBarOptions,
    ) -> ChartResult<Self> {
        let computed = compute_range(&prepared.series, x_mode, y_mode)?;
        let range = computed.with_unit_fallback();
        if range != computed {
            debug!(?computed, ?range, "degenerate data range widened to unit span");
        }

        let (limits, axis_limits) = plot_limits(config, x_mode, y_mode, computed);
        let bar_series_count = prepared
            .series
            .iter()
            .filter(|series| series.kind == SeriesKind::Bar)
            .count();

        Ok(Self {
            viewport: config.viewport,
            x_mode,
            y_mode,
            range,
            limits,
            axis_limits,
            x_categories: prepared.x_categories.clone(),
            y_categories: prepared.y_categories.clone(),
            bar_options,
            bar_series_count,
        })
    }

    #[must_use]
    pub fn x_domain(&self) -> AxisDomain<'_> {
        match self.x_mode {
            AxisMode::Continuous => AxisDomain::Continuous,
            AxisMode::Categorical => AxisDomain::Categorical(&self.x_categories),
        }
    }

    #[must_use]
    pub fn y_domain(&self) -> AxisDomain<'_> {
        match self.y_mode {
            AxisMode::Continuous => AxisDomain::Continuous,
            AxisMode::Categorical => AxisDomain::Categorical(&self.y_categories),
        }
    }

    /// Pixel position where the axes cross.
    pub fn zero_pixel(&self) -> ChartResult<(f64, f64)> {
        let x = match self.x_mode {
            AxisMode::Continuous => convert(0.0, self.range, self.limits, Axis::X)?,
            AxisMode::Categorical => self.axis_limits.minx,
        };
        let y = match self.y_mode {
            AxisMode::Continuous => convert(0.0, self.range, self.limits, Axis::Y)?,
            AxisMode::Categorical => self.axis_limits.miny,
        };
        Ok((x, y))
    }

    /// Number of slots a bar series divides its x span into.
    #[must_use]
    pub fn bar_slot_count(&self, series: &Series) -> usize {
        match self.x_mode {
            AxisMode::Continuous => series.data.len(),
            AxisMode::Categorical => self.x_categories.len(),
        }
    }

    /// Layout of the bar series with index `bar_index` among bar series.
    pub fn bar_layout(&self, series: &Series, bar_index: usize) -> ChartResult<BarLayout> {
        let options = BarLayoutOptions::for_series(
            &self.bar_options,
            &series.params.bars,
            bar_index,
            self.bar_series_count,
        );
        resolve_bar_layout(options, self.limits, self.bar_slot_count(series))
    }

    pub fn convert_series(&self, series: &Series, limits: Limits) -> ChartResult<Vec<ConvertedPoint>> {
        convert_points(
            &series.data,
            self.x_domain(),
            self.y_domain(),
            self.range,
            limits,
        )
    }
}

/// Plotting limits and tick limits for the configured canvas.
fn plot_limits(
    config: &ChartEngineConfig,
    x_mode: AxisMode,
    y_mode: AxisMode,
    range: Range,
) -> (Limits, Limits) {
    let insets = config.insets;
    let width = f64::from(config.viewport.width);
    let height = f64::from(config.viewport.height);

    let minx = if x_mode.is_continuous() && range.minx == 0.0 {
        insets.zero_baseline_px
    } else {
        insets.inset_px
    };
    let miny = if y_mode.is_continuous() && range.miny == 0.0 {
        height - insets.zero_baseline_px
    } else {
        height - insets.inset_px
    };
    let limits = Limits::new(minx, width - insets.right_px, miny, insets.top_px);

    let axis_limits = Limits::new(
        if x_mode.is_continuous() {
            limits.minx
        } else {
            insets.axis_px
        },
        width - insets.right_px,
        if y_mode.is_continuous() {
            limits.miny
        } else {
            height - insets.axis_px
        },
        insets.top_px,
    );

    (limits, axis_limits)
}

/// A chart after preparation: aligned series plus the context to draw them.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedChart {
    pub context: RenderContext,
    /// Series in draw order.
    pub series: Vec<Series>,
    pub title: Option<TitleSpec>,
    pub subtitle: Option<TitleSpec>,
    pub axis_x: Option<AxisSpec>,
    pub axis_y: Option<AxisSpec>,
}
