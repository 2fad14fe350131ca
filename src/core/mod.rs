pub mod axis;
pub mod bar_layout;
pub mod categories;
pub mod converter;
pub mod points;
pub mod preparation;
pub mod range;
pub mod scatter_series;
pub mod series;
pub mod ticks;
pub mod types;

pub use axis::{AxisSpec, DEFAULT_TICK_SIZE_PX, DEFAULT_TICK_STEP, TickSpec, TitleSpec};
pub use bar_layout::{
    BarLayout, BarLayoutOptions, BarPosition, GlobalBarOptions, resolve_bar_layout,
};
pub use categories::{Categories, UnifiedSeries, unify_categories};
pub use converter::{Axis, Limits, Range, convert};
pub use points::{AxisDomain, ConvertedPoint, convert_points};
pub use preparation::{PreparedSeries, prepare_series, sort_by_x};
pub use range::compute_range;
pub use scatter_series::{MAX_MARKER_SPAN_RATIO, resolve_marker_radii};
pub use series::{
    BarFill, BarOutline, BarParams, BarStyle, DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_LABEL_OFFSET_PX,
    DEFAULT_LINE_WIDTH_PX, DEFAULT_MARKER_RADIUS_PX, LabelKind, LabelOffset, LabelStyle,
    MarkerRadius, PointStyle, RenderParams, Series, SeriesKind,
};
pub use ticks::{MAX_TICK_COUNT, Tick, generate_ticks, validate_tick_step};
pub use types::{AxisMode, DataPoint, DataValue, Viewport, format_number};
