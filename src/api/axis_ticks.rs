pub(super) const AXIS_TIME_TARGET_SPACING_PX: f64 = 96.0;
pub(super) const AXIS_VALUE_TARGET_SPACING_PX: f64 = 46.0;
pub(super) const AXIS_TICK_LENGTH_PX: f64 = 6.0;
pub(super) const AXIS_LABEL_GAP_PX: f64 = 3.0;
pub(super) const AXIS_MIN_TICKS: usize = 2;
pub(super) const AXIS_MAX_TICKS: usize = 12;

pub(super) fn axis_tick_target_count(
    axis_span_px: f64,
    target_spacing_px: f64,
    min_ticks: usize,
    max_ticks: usize,
) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return min_ticks;
    }
    if !target_spacing_px.is_finite() || target_spacing_px <= 0.0 {
        return min_ticks;
    }

    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(min_ticks, max_ticks)
}
