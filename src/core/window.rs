use crate::core::trajectory::{TrajectoryInput, TrajectoryPoint, TrajectoryResult};

pub const BASE_TICK_STEP_M: f64 = 5.0;
pub const MAX_TICKS_PER_AXIS: usize = 12;
const SNAP_EPSILON_M: f64 = 1e-9;
// f64 tops out near 1.8e308.
const MAX_LADDER_EXPONENT: i32 = 308;

// 1-2.5-5 ladder scaled by powers of ten, starting at 5 m.
const TICK_MANTISSAS: [f64; 3] = [1.0, 2.5, 5.0];

/// Data-space extents of a plot, in meters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub tick_step: f64,
}

impl AxisWindow {
    pub const DEFAULT: AxisWindow = AxisWindow {
        x_min: 0.0,
        x_max: 50.0,
        y_min: 0.0,
        y_max: 25.0,
        tick_step: BASE_TICK_STEP_M,
    };

    /// Extents that hold the launch point, the landing range and the apex.
    /// Non-finite extents (overflowing launches) are ignored in favour of the
    /// finite samples; if nothing finite is left the default window is used.
    pub fn fit(
        input: &TrajectoryInput,
        result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Self {
        let finite_x = || points.iter().map(|p| p.x).filter(|v| v.is_finite());
        let finite_y = || points.iter().map(|p| p.y).filter(|v| v.is_finite());

        let lowest_x = snap_to_zero(finite_x().fold(input.x0.min(0.0), f64::min));
        let lowest_y = snap_to_zero(finite_y().fold(input.y0.min(0.0), f64::min));
        let reach_x = finite_or_else(result.x_max, || finite_x().fold(input.x0, f64::max));
        let apex_y = finite_or_else(result.max_height, || finite_y().fold(input.y0, f64::max));
        let raw_max_x = reach_x + BASE_TICK_STEP_M;
        let raw_max_y = apex_y.max(input.y0 + BASE_TICK_STEP_M);

        let span = (raw_max_x - lowest_x).max(raw_max_y - lowest_y);
        let first_step = tick_step_for_span(span);

        // Rounding the ends out to whole steps can add an interval per side.
        let window = tick_ladder()
            .skip_while(|step| *step < first_step)
            .map(|step| Self::snapped(lowest_x, raw_max_x, lowest_y, raw_max_y, step))
            .find(|window| !window.is_finite() || window.within_tick_budget())
            .unwrap_or(Self::DEFAULT);

        if window.is_finite() {
            window
        } else {
            Self::DEFAULT
        }
    }

    fn snapped(lowest_x: f64, raw_max_x: f64, lowest_y: f64, raw_max_y: f64, step: f64) -> Self {
        let x_min = floor_to(lowest_x, step);
        let y_min = floor_to(lowest_y, step);
        Self {
            x_min,
            x_max: ceil_to(raw_max_x, step).max(x_min + step),
            y_min,
            y_max: ceil_to(raw_max_y, step).max(y_min + step),
            tick_step: step,
        }
    }

    fn is_finite(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max, self.tick_step]
            .iter()
            .all(|v| v.is_finite())
    }

    fn within_tick_budget(&self) -> bool {
        interval_count(self.x_min, self.x_max, self.tick_step) <= MAX_TICKS_PER_AXIS
            && interval_count(self.y_min, self.y_max, self.tick_step) <= MAX_TICKS_PER_AXIS
    }

    pub fn x_ticks(&self) -> Vec<f64> {
        ticks(self.x_min, self.x_max, self.tick_step)
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        ticks(self.y_min, self.y_max, self.tick_step)
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for AxisWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 5, 10, 25, 50, 100, 250, ...
fn tick_ladder() -> impl Iterator<Item = f64> {
    (0..=MAX_LADDER_EXPONENT)
        .flat_map(|exp| TICK_MANTISSAS.map(move |mantissa| mantissa * 10f64.powi(exp)))
        .filter(|step| *step >= BASE_TICK_STEP_M)
}

/// Smallest step on the ladder that keeps `span` within the tick budget.
pub fn tick_step_for_span(span: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 {
        return BASE_TICK_STEP_M;
    }

    tick_ladder()
        .find(|step| (span / step).ceil() as usize <= MAX_TICKS_PER_AXIS)
        .unwrap_or(BASE_TICK_STEP_M)
}

fn finite_or_else(value: f64, fallback: impl FnOnce() -> f64) -> f64 {
    if value.is_finite() { value } else { fallback() }
}

// Landing samples can sit a rounding error below the ground.
fn snap_to_zero(value: f64) -> f64 {
    if value.abs() < SNAP_EPSILON_M { 0.0 } else { value }
}

fn ceil_to(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

fn floor_to(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

fn interval_count(min: f64, max: f64, step: f64) -> usize {
    ((max - min) / step).round() as usize
}

fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    let count = interval_count(min, max, step).min(MAX_TICKS_PER_AXIS);
    (0..=count).map(|i| min + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trajectory::{sample, solve};

    fn window_for(input: TrajectoryInput) -> AxisWindow {
        let result = solve(input);
        let points = sample(input, result);
        AxisWindow::fit(&input, &result, &points)
    }

    #[test]
    fn default_launch_fits_like_chart_page() {
        let window = window_for(TrajectoryInput::default());

        // Range 40.8 m -> ceil to 45, plus one step; apex 10.2 m -> 15.
        assert_eq!(window.tick_step, 5.0);
        assert_eq!(window.x_min, 0.0);
        assert_eq!(window.x_max, 50.0);
        assert_eq!(window.y_min, 0.0);
        assert_eq!(window.y_max, 15.0);
        assert_eq!(window.x_ticks().len(), 11);
        assert_eq!(window.y_ticks(), vec![0.0, 5.0, 10.0, 15.0]);
    }

    #[test]
    fn low_apex_still_leaves_room_above_start() {
        let window = window_for(TrajectoryInput {
            y0: 7.0,
            angle_deg: 0.0,
            v0: 3.0,
            ..TrajectoryInput::default()
        });
        assert_eq!(window.y_max, 15.0);
    }

    #[test]
    fn long_range_grows_tick_step() {
        let window = window_for(TrajectoryInput {
            a: 0.5,
            ..TrajectoryInput::default()
        });

        assert!(window.tick_step > BASE_TICK_STEP_M);
        assert!(window.x_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
        assert!(window.x_max >= 800.0);
    }

    #[test]
    fn negative_positions_extend_minimum() {
        let window = window_for(TrajectoryInput {
            x0: -7.0,
            y0: -3.0,
            angle_deg: 0.0,
            v0: 1.0,
            ..TrajectoryInput::default()
        });

        assert!(window.x_min <= -7.0);
        assert!(window.y_min < -3.0);
        assert!(window.x_max > window.x_min);
        assert!(window.y_max > window.y_min);
    }

    #[test]
    fn overflowing_launch_keeps_finite_window() {
        let input = TrajectoryInput {
            v0: 1e200,
            ..TrajectoryInput::default()
        };
        let result = solve(input);
        assert!(!result.x_max.is_finite());
        assert!(result.max_height.is_nan());

        let points = sample(input, result);
        let window = AxisWindow::fit(&input, &result, &points);

        assert!(window.is_finite());
        assert!(window.x_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
        assert!(window.y_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
        let last = points[points.len() - 1];
        assert!(window.x_max >= last.x);
    }

    #[test]
    fn non_finite_samples_are_ignored() {
        let input = TrajectoryInput::default();
        let result = TrajectoryResult {
            flight_time: 20.0,
            max_height: f64::NAN,
            x_max: f64::INFINITY,
            is_uniform: false,
        };
        let points = [TrajectoryPoint {
            x: f64::INFINITY,
            y: f64::NAN,
        }];
        let window = AxisWindow::fit(&input, &result, &points);

        assert!(window.is_finite());
        assert!(window.x_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
    }

    #[test]
    fn tick_list_is_capped() {
        let huge = AxisWindow {
            x_max: f64::INFINITY,
            ..AxisWindow::DEFAULT
        };
        assert_eq!(huge.x_ticks().len(), MAX_TICKS_PER_AXIS + 1);
    }

    #[test]
    fn window_rounding_stays_within_budget() {
        // Span is exactly 60 m, but -2.5..57.5 rounds out to 13 intervals of 5.
        let window = window_for(TrajectoryInput {
            x0: -2.5,
            y0: 4.9,
            angle_deg: 0.0,
            v0: 55.0,
            ..TrajectoryInput::default()
        });
        assert_eq!(window.tick_step, 10.0);
        assert!(window.x_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
        assert!(window.y_ticks().len() <= MAX_TICKS_PER_AXIS + 1);
    }

    #[test]
    fn tick_ladder() {
        assert_eq!(tick_step_for_span(40.0), 5.0);
        assert_eq!(tick_step_for_span(60.0), 5.0);
        assert_eq!(tick_step_for_span(61.0), 10.0);
        assert_eq!(tick_step_for_span(200.0), 25.0);
        assert_eq!(tick_step_for_span(820.0), 100.0);
        assert_eq!(tick_step_for_span(2_000.0), 250.0);
        assert_eq!(tick_step_for_span(f64::NAN), BASE_TICK_STEP_M);
    }
}
