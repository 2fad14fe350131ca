use tracing::debug;

use crate::core::prepare_series;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::{validate_chart_spec, validate_engine_config};
use super::{ChartEngineConfig, ChartSpec, PreparedChart, RenderContext};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` aligns series, computes the shared scale, lays out bars and
/// axes, and hands the resulting frame to its renderer. It keeps no state
/// between render calls besides its configuration.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ChartEngineConfig,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartEngineConfig) -> ChartResult<Self> {
        validate_engine_config(&config)?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        validate_engine_config(&config)?;
        self.config = config;
        Ok(())
    }

    /// Validates the spec and resolves everything drawing needs.
    ///
    /// The spec's series are consumed; the returned chart owns the aligned copy.
    pub fn prepare(&self, spec: ChartSpec) -> ChartResult<PreparedChart> {
        validate_chart_spec(&spec)?;
        let x_mode = spec.x_mode()?;
        let y_mode = spec.y_mode()?;

        let ChartSpec {
            title,
            subtitle,
            series,
            axis_x,
            axis_y,
            options,
        } = spec;
        let prepared = prepare_series(series, x_mode, y_mode)?;
        let context = RenderContext::resolve(
            &self.config,
            x_mode,
            y_mode,
            &prepared,
            options.bars.unwrap_or_default(),
        )?;
        debug!(?x_mode, ?y_mode, range = ?context.range, "prepared chart");

        Ok(PreparedChart {
            context,
            series: prepared.series,
            title,
            subtitle,
            axis_x,
            axis_y,
        })
    }

    pub fn render(&mut self, spec: ChartSpec) -> ChartResult<()> {
        let frame = self.build_render_frame(spec)?;
        self.renderer.render(&frame)
    }

    /// Renders the chart into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(
        &mut self,
        context: &cairo::Context,
        spec: ChartSpec,
    ) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame(spec)?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
