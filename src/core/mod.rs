pub mod input;
pub mod trajectory;
pub mod window;

pub use input::{Field, RawInput, RawValue};
pub use trajectory::{
    MotionKind, Trajectory, TrajectoryInput, TrajectoryPoint, TrajectoryResult, compute, sample,
    solve,
};
pub use window::AxisWindow;
