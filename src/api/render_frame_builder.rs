use tracing::trace;

use crate::core::SeriesKind;
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::series_render_frame_builder::series_commands;
use super::{ChartEngine, ChartSpec, PreparedChart};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes backend-agnostic draw commands for one chart spec.
    pub fn build_render_frame(&self, spec: ChartSpec) -> ChartResult<RenderFrame> {
        let chart = self.prepare(spec)?;
        self.build_prepared_frame(&chart)
    }

    /// Draw order: titles, series (line series last), then axes.
    pub fn build_prepared_frame(&self, chart: &PreparedChart) -> ChartResult<RenderFrame> {
        let ctx = &chart.context;
        let mut frame = RenderFrame::new(ctx.viewport);
        self.append_title_commands(&mut frame, chart);

        let mut bar_layouts = Vec::with_capacity(ctx.bar_series_count);
        for series in &chart.series {
            let layout = match series.kind {
                SeriesKind::Bar => {
                    let layout = ctx.bar_layout(series, bar_layouts.len())?;
                    bar_layouts.push(layout);
                    Some(layout)
                }
                SeriesKind::Line | SeriesKind::Scatter => None,
            };
            frame.extend(series_commands(series, ctx, layout)?);
        }

        self.append_axis_commands(&mut frame, chart, &bar_layouts)?;
        frame.validate()?;

        trace!(
            commands = frame.commands.len(),
            series = chart.series.len(),
            bar_series = bar_layouts.len(),
            "built render frame"
        );
        Ok(frame)
    }
}
