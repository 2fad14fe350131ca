use approx::assert_relative_eq;
use graph_rs::api::{ChartEngine, ChartEngineConfig, ChartSpec};
use graph_rs::core::{
    AxisSpec, BarPosition, DataPoint, DataValue, GlobalBarOptions, Series, TickSpec, TitleSpec,
    Viewport,
};
use graph_rs::render::{DrawCommand, NullRenderer};
use graph_rs::ChartError;

fn engine() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(Viewport::new(600, 400));
    ChartEngine::new(NullRenderer::default(), config).expect("engine init")
}

fn two_category_bars() -> ChartSpec {
    ChartSpec::new(vec![Series::bar(vec![
        DataPoint::new("a", 3.0),
        DataPoint::new("b", 1.0),
    ])])
    .with_axis_x(AxisSpec::categorical())
}

#[test]
fn categorical_bars_tile_the_plot_width() {
    let engine = engine();
    let chart = engine.prepare(two_category_bars()).expect("prepare");
    assert_eq!(
        chart.context.x_categories.to_vec(),
        vec![DataValue::text("a"), DataValue::text("b")]
    );

    let frame = engine.build_render_frame(two_category_bars()).expect("frame");
    let rects: Vec<_> = frame.rects().collect();
    assert_eq!(rects.len(), 2);

    let plot_width = chart.context.limits.maxx - chart.context.limits.minx;
    for rect in &rects {
        assert_relative_eq!(rect.width, plot_width / 2.0, epsilon = 1e-9);
    }
    assert_relative_eq!(rects[0].x, chart.context.limits.minx, epsilon = 1e-9);
    assert_relative_eq!(rects[1].x, rects[0].x + rects[0].width, epsilon = 1e-9);
}

#[test]
fn bars_grow_from_the_zero_baseline() {
    let engine = engine();
    let chart = engine.prepare(two_category_bars()).expect("prepare");
    let frame = engine.build_render_frame(two_category_bars()).expect("frame");

    let limits = chart.context.limits;
    let first = frame.rects().next().expect("first bar");
    assert_relative_eq!(first.y, limits.miny, epsilon = 1e-9);
    assert_relative_eq!(first.height, limits.maxy - limits.miny, epsilon = 1e-9);
}

#[test]
fn line_series_are_drawn_after_other_series() {
    let spec = ChartSpec::new(vec![
        Series::line(vec![DataPoint::new(0.0, 1.0), DataPoint::new(1.0, 2.0)]),
        Series::bar(vec![DataPoint::new(0.0, 2.0), DataPoint::new(1.0, 1.0)]),
    ]);
    let frame = engine().build_render_frame(spec).expect("frame");

    let first_path = frame
        .commands
        .iter()
        .position(|command| matches!(command, DrawCommand::Path(_)))
        .expect("path");
    let last_rect = frame
        .commands
        .iter()
        .rposition(|command| matches!(command, DrawCommand::Rect(_)))
        .expect("rect");
    assert!(last_rect < first_path);
}

#[test]
fn continuous_line_data_is_sorted_by_x() {
    let spec = ChartSpec::new(vec![Series::line(vec![
        DataPoint::new(3.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, 3.0),
    ])]);
    let frame = engine().build_render_frame(spec).expect("frame");
    let path = frame.paths().next().expect("path");
    assert!(path.points.windows(2).all(|pair| pair[0].0 <= pair[1].0));
}

#[test]
fn separated_bars_draw_one_axis_segment_per_series() {
    let spec = ChartSpec::new(vec![
        Series::bar(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]),
        Series::bar(vec![DataPoint::new("a", 3.0), DataPoint::new("b", 4.0)]),
    ])
    .with_axis_x(AxisSpec::categorical())
    .with_bar_options(GlobalBarOptions::default().with_position(BarPosition::Separated));

    let frame = engine().build_render_frame(spec).expect("frame");
    assert_eq!(frame.lines().count(), 2);
    assert_eq!(frame.rects().count(), 4);

    let lines: Vec<_> = frame.lines().collect();
    assert_relative_eq!(lines[0].x2, lines[1].x1, epsilon = 1e-9);
}

#[test]
fn titles_and_axis_titles_are_placed() {
    let spec = ChartSpec::new(vec![Series::line(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(4.0, 8.0),
    ])])
    .with_title(TitleSpec::new("Sales"))
    .with_subtitle(TitleSpec::new("2024"))
    .with_axis_x(AxisSpec::continuous().with_title(TitleSpec::new("month")))
    .with_axis_y(AxisSpec::continuous().with_title(TitleSpec::new("units")));

    let frame = engine().build_render_frame(spec).expect("frame");
    let texts: Vec<_> = frame.texts().collect();
    assert_eq!(texts.len(), 4);

    assert_eq!(texts[0].text, "Sales");
    assert_relative_eq!(texts[0].x, 300.0, epsilon = 1e-9);
    assert_relative_eq!(texts[0].y, 20.0, epsilon = 1e-9);
    assert_eq!(texts[1].text, "2024");
    assert_relative_eq!(texts[1].y, 50.0, epsilon = 1e-9);

    let units = texts.iter().find(|text| text.text == "units").expect("y title");
    assert_relative_eq!(units.rotation_rad, -std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
    assert_relative_eq!(units.y, 200.0, epsilon = 1e-9);
}

#[test]
fn axis_ticks_are_drawn_only_when_requested() {
    let bare = ChartSpec::new(vec![Series::line(vec![
        DataPoint::new(0.0, 0.0),
        DataPoint::new(4.0, 4.0),
    ])])
    .with_axis_x(AxisSpec::continuous());
    let frame = engine().build_render_frame(bare.clone()).expect("frame");
    assert_eq!(frame.lines().count(), 1);
    assert_eq!(frame.texts().count(), 0);

    let ticked = bare.with_axis_x(AxisSpec::continuous().with_ticks(TickSpec::with_step(1.0)));
    let frame = engine().build_render_frame(ticked).expect("frame");
    assert_eq!(frame.lines().count(), 1 + 5);
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["0", "1", "2", "3", "4"]);
}

#[test]
fn degenerate_data_still_renders() {
    let spec = ChartSpec::new(vec![Series::scatter(vec![DataPoint::new(0.0, 0.0)])]);
    let chart = engine().prepare(spec.clone()).expect("prepare");
    assert_eq!(chart.context.range.maxx - chart.context.range.minx, 1.0);
    assert_eq!(chart.context.range.maxy - chart.context.range.miny, 1.0);

    let frame = engine().build_render_frame(spec).expect("frame");
    assert_eq!(frame.circles().count(), 1);
}

#[test]
fn empty_series_collection_is_invalid_input() {
    let err = engine()
        .build_render_frame(ChartSpec::new(Vec::new()))
        .expect_err("empty spec must fail");
    assert!(matches!(err, ChartError::InvalidInput(_)));
}

#[test]
fn axis_spec_without_mode_is_invalid_configuration() {
    let spec = two_category_bars().with_axis_x(AxisSpec::default());
    let err = engine().build_render_frame(spec).expect_err("mode is required");
    assert!(matches!(err, ChartError::InvalidConfiguration(_)));
}

#[test]
fn too_small_viewport_is_rejected() {
    let config = ChartEngineConfig::new(Viewport::new(100, 100));
    let err = ChartEngine::new(NullRenderer::default(), config)
        .err()
        .expect("viewport must be rejected");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn rendering_is_repeatable_and_reaches_the_renderer() {
    let mut engine = engine();
    let first = engine.build_render_frame(two_category_bars()).expect("first");
    let second = engine.build_render_frame(two_category_bars()).expect("second");
    assert_eq!(first, second);

    engine.render(two_category_bars()).expect("render");
    engine.render(two_category_bars()).expect("render again");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 2);
    assert_eq!(renderer.last_line_count, 1);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn empty_category_keeps_its_tick_mark_without_a_label() {
    let spec = ChartSpec::new(vec![Series::bar(vec![
        DataPoint::new("", 3.0),
        DataPoint::new("b", 1.0),
    ])])
    .with_axis_x(AxisSpec::categorical().with_ticks(TickSpec::default()));

    let frame = engine().build_render_frame(spec).expect("empty key renders");
    assert_eq!(frame.rects().count(), 2);
    assert_eq!(frame.lines().count(), 1 + 2);
    let labels: Vec<&str> = frame.texts().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["b"]);
}
