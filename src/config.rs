use std::{
    env,
    path::{Path, PathBuf},
};

use crate::core::input::RawInput;
use crate::error::TrajectoryError;

// 900x500 matches the classroom chart page.
pub const DEFAULT_PLOT_WIDTH: u32 = 900;
pub const DEFAULT_PLOT_HEIGHT: u32 = 500;
const MIN_PLOT_SIDE: u32 = 100;

pub fn output_dir() -> PathBuf {
    env::var("TRAJECTORY_OUTPUT_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn plot_size() -> (u32, u32) {
    (
        plot_side("TRAJECTORY_PLOT_WIDTH", DEFAULT_PLOT_WIDTH),
        plot_side("TRAJECTORY_PLOT_HEIGHT", DEFAULT_PLOT_HEIGHT),
    )
}

fn plot_side(var: &str, default: u32) -> u32 {
    env::var(var)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= MIN_PLOT_SIDE)
        .unwrap_or(default)
}

/// Reads a TOML file holding any of `x0`, `y0`, `angle`, `velocity` and
/// `acceleration`.
pub fn load_scenario(path: &Path) -> Result<RawInput, TrajectoryError> {
    let text = std::fs::read_to_string(path).map_err(|source| TrajectoryError::ScenarioRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scenario(&text).map_err(|source| TrajectoryError::ScenarioParse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_scenario(text: &str) -> Result<RawInput, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::RawValue;

    #[test]
    fn parses_partial_scenario() {
        let raw = parse_scenario("angle = 60\nvelocity = \"12.5\"\n").expect("valid scenario");
        assert_eq!(raw.angle, Some(RawValue::Number(60.0)));
        assert_eq!(raw.velocity, Some(RawValue::Text("12.5".to_string())));
        assert!(raw.x0.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(parse_scenario("gravity = 9.8\n").is_err());
    }

    #[test]
    fn missing_scenario_reports_path() {
        let path = Path::new("definitely/not/here.toml");
        let err = load_scenario(path).expect_err("file should be missing");
        assert!(matches!(err, TrajectoryError::ScenarioRead { .. }));
        assert!(err.to_string().contains("here.toml"));
    }
}
