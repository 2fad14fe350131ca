use crate::core::{ConvertedPoint, RenderParams};
use crate::render::{DrawCommand, PathPrimitive};

/// One continuous stroked path through the points in array order.
pub(super) fn line_series_commands(
    points: &[ConvertedPoint],
    params: &RenderParams,
) -> Vec<DrawCommand> {
    if points.len() < 2 {
        return Vec::new();
    }

    let path = PathPrimitive::new(
        points.iter().map(|point| (point.x, point.y)).collect(),
        params.line_width(),
        params.line_color(),
    );
    vec![DrawCommand::Path(path)]
}
