use serde::Serialize;

pub const DEFAULT_X0_M: f64 = 0.0;
pub const DEFAULT_Y0_M: f64 = 0.0;
pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_SPEED_MPS: f64 = 20.0;
pub const DEFAULT_ACCEL_MPS2: f64 = 9.8;

/// Below this magnitude the acceleration is treated as zero.
pub const UNIFORM_ACCEL_EPSILON: f64 = 1e-10;
/// Flight duration used when no positive landing time exists.
pub const FALLBACK_HORIZON_S: f64 = 10.0;
pub const MAX_FLIGHT_TIME_S: f64 = 20.0;
pub const SAMPLE_STEPS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryInput {
    pub x0: f64,
    pub y0: f64,
    pub angle_deg: f64,
    pub v0: f64,
    pub a: f64,
}

impl Default for TrajectoryInput {
    fn default() -> Self {
        Self {
            x0: DEFAULT_X0_M,
            y0: DEFAULT_Y0_M,
            angle_deg: DEFAULT_ANGLE_DEG,
            v0: DEFAULT_SPEED_MPS,
            a: DEFAULT_ACCEL_MPS2,
        }
    }
}

impl TrajectoryInput {
    /// Replaces every non-finite field with its default.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, default: f64| if value.is_finite() { value } else { default };
        Self {
            x0: pick(self.x0, defaults.x0),
            y0: pick(self.y0, defaults.y0),
            angle_deg: pick(self.angle_deg, defaults.angle_deg),
            v0: pick(self.v0, defaults.v0),
            a: pick(self.a, defaults.a),
        }
    }

    pub fn velocity_components(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        (self.v0 * theta.cos(), self.v0 * theta.sin())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub flight_time: f64,
    pub max_height: f64,
    pub x_max: f64,
    pub is_uniform: bool,
}

impl TrajectoryResult {
    pub fn motion_kind(&self) -> MotionKind {
        if self.is_uniform {
            MotionKind::Uniform
        } else {
            MotionKind::Accelerated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKind {
    Uniform,
    Accelerated,
}

impl std::fmt::Display for MotionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MotionKind::Uniform => f.write_str("uniform rectilinear motion"),
            MotionKind::Accelerated => f.write_str("uniformly accelerated motion"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything a front-end needs to draw one launch.
#[derive(Clone, Debug)]
pub struct Trajectory {
    pub input: TrajectoryInput,
    pub result: TrajectoryResult,
    pub points: Vec<TrajectoryPoint>,
}

pub fn compute(input: TrajectoryInput) -> Trajectory {
    let input = input.sanitized();
    let result = solve(input);
    let points = sample(input, result);
    Trajectory {
        input,
        result,
        points,
    }
}

pub fn is_uniform(a: f64) -> bool {
    a.abs() < UNIFORM_ACCEL_EPSILON
}

pub fn position_at_time(input: TrajectoryInput, uniform: bool, time_s: f64) -> TrajectoryPoint {
    let (vx, vy) = input.velocity_components();
    let x = input.x0 + vx * time_s;
    let y = if uniform {
        input.y0 + vy * time_s
    } else {
        input.y0 + (vy * time_s) - (0.5 * input.a * time_s * time_s)
    };
    TrajectoryPoint { x, y }
}

/// Smallest positive root of `y0 + vy*t - a*t^2/2 = 0`, the fallback horizon
/// when the discriminant is negative, or 0 when neither root is positive.
fn landing_time(vy: f64, y0: f64, a: f64) -> f64 {
    let qa = -0.5 * a;
    let qb = vy;
    let qc = y0;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return FALLBACK_HORIZON_S;
    }

    let sqrt_disc = disc.sqrt();
    let t1 = (-qb + sqrt_disc) / (2.0 * qa);
    let t2 = (-qb - sqrt_disc) / (2.0 * qa);
    match (t1 > 0.0, t2 > 0.0) {
        (true, true) => t1.min(t2),
        (true, false) => t1,
        (false, true) => t2,
        (false, false) => 0.0,
    }
}

pub fn solve(input: TrajectoryInput) -> TrajectoryResult {
    let (vx, vy) = input.velocity_components();
    let uniform = is_uniform(input.a);

    let (flight_time, max_height) = if uniform {
        if vy == 0.0 {
            (FALLBACK_HORIZON_S, input.y0)
        } else if vy > 0.0 {
            (FALLBACK_HORIZON_S, input.y0 + vy * FALLBACK_HORIZON_S)
        } else if input.y0 > 0.0 {
            (input.y0 / vy.abs(), input.y0)
        } else {
            (0.0, input.y0)
        }
    } else {
        let flight_time = landing_time(vy, input.y0, input.a);
        let t_apex = vy / input.a;
        let max_height = if t_apex > 0.0 && t_apex < flight_time {
            input.y0 + vy * t_apex - 0.5 * input.a * t_apex * t_apex
        } else {
            input.y0
        };
        (flight_time, max_height)
    };

    let x_max = input.x0 + vx * flight_time;

    // Height and range stay tied to the uncapped flight time.
    TrajectoryResult {
        flight_time: flight_time.min(MAX_FLIGHT_TIME_S),
        max_height,
        x_max,
        is_uniform: uniform,
    }
}

pub fn sample(input: TrajectoryInput, result: TrajectoryResult) -> Vec<TrajectoryPoint> {
    if result.flight_time <= 0.0 {
        return Vec::new();
    }

    (0..=SAMPLE_STEPS)
        .map(|i| {
            let t = (i as f64 * result.flight_time) / SAMPLE_STEPS as f64;
            position_at_time(input, result.is_uniform, t)
        })
        .collect()
}
