use crate::core::{ConvertedPoint, LabelKind, LabelStyle, Limits, PointStyle, format_number, resolve_marker_radii};
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, DrawCommand, TextHAlign, TextPrimitive};

/// Marker circles shared by every series kind.
pub(super) fn marker_commands(
    points: &[ConvertedPoint],
    style: &PointStyle,
    limits: Limits,
) -> ChartResult<Vec<DrawCommand>> {
    let radii = resolve_marker_radii(points, style.radius, limits)?;
    let color = style.marker_color();
    Ok(points
        .iter()
        .zip(radii)
        .map(|(point, radius)| {
            DrawCommand::Circle(CirclePrimitive::new(point.x, point.y, radius, color))
        })
        .collect())
}

/// Text labels next to each point; points without text for the kind are skipped.
pub(super) fn label_commands(points: &[ConvertedPoint], style: &LabelStyle) -> Vec<DrawCommand> {
    let (dx, dy) = style.offset.delta();
    points
        .iter()
        .filter_map(|point| {
            let text = label_text(point, style.kind)?;
            Some(DrawCommand::Text(TextPrimitive::new(
                text,
                point.x + dx,
                point.y + dy,
                style.font_size(),
                style.text_color(),
                TextHAlign::Left,
            )))
        })
        .collect()
}

fn label_text(point: &ConvertedPoint, kind: LabelKind) -> Option<String> {
    let text = match kind {
        LabelKind::Values => format!("({},{})", point.data_x, point.data_y),
        LabelKind::X => point.data_x.to_string(),
        LabelKind::Y => point.data_y.to_string(),
        LabelKind::Value => point.value.map(format_number)?,
        LabelKind::Label => point.label.clone()?,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::label_commands;
    use crate::core::{ConvertedPoint, DataValue, LabelKind, LabelOffset, LabelStyle};
    use crate::render::{Color, DrawCommand};

    fn point() -> ConvertedPoint {
        ConvertedPoint {
            x: 100.0,
            y: 50.0,
            data_x: DataValue::text("a"),
            data_y: DataValue::number(3.0),
            value: None,
            label: Some("peak".to_owned()),
            color: Color::BLACK,
        }
    }

    #[test]
    fn coordinate_pair_label_is_nudged_right_by_default() {
        let commands = label_commands(&[point()], &LabelStyle::new(LabelKind::Values));
        let DrawCommand::Text(text) = &commands[0] else {
            panic!("expected text command");
        };
        assert_eq!(text.text, "(a,3)");
        assert!((text.x - 110.0).abs() <= 1e-9);
        assert!((text.y - 50.0).abs() <= 1e-9);
    }

    #[test]
    fn missing_value_skips_label_and_offsets_combine() {
        let mut style = LabelStyle::new(LabelKind::Value);
        assert!(label_commands(&[point()], &style).is_empty());

        style.kind = LabelKind::Label;
        style.offset = LabelOffset {
            left: 4.0,
            right: 0.0,
            top: 6.0,
            bottom: 1.0,
        };
        let commands = label_commands(&[point()], &style);
        let DrawCommand::Text(text) = &commands[0] else {
            panic!("expected text command");
        };
        assert_eq!(text.text, "peak");
        assert!((text.x - 96.0).abs() <= 1e-9);
        assert!((text.y - 45.0).abs() <= 1e-9);
    }
}
