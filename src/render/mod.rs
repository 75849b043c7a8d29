pub mod chart;
pub mod data;
pub mod text;

use crate::core::trajectory::{TrajectoryPoint, TrajectoryResult};
use crate::error::TrajectoryError;

pub use chart::ChartRenderer;
pub use data::{CsvReport, JsonReport};
pub use text::TextReport;

/// A sink for one solved trajectory. An empty `points` slice means there is
/// nothing to draw; implementations still show the result block.
pub trait Renderer {
    fn render(
        &mut self,
        result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError>;
}

/// Lines of the results block shown under every chart.
pub fn summary_lines(result: &TrajectoryResult) -> [String; 4] {
    [
        format!("Flight time: {:.2} s", result.flight_time),
        format!("Max height: {:.2} m", result.max_height),
        format!("Range: {:.2} m", result.x_max),
        format!("Motion type: {}", result.motion_kind()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trajectory::{TrajectoryInput, solve};

    #[test]
    fn summary_uses_two_decimals() {
        let lines = summary_lines(&solve(TrajectoryInput::default()));
        assert_eq!(lines[0], "Flight time: 2.89 s");
        assert_eq!(lines[1], "Max height: 10.20 m");
        assert_eq!(lines[2], "Range: 40.82 m");
        assert_eq!(lines[3], "Motion type: uniformly accelerated motion");
    }
}
