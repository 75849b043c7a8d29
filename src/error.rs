use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrajectoryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read scenario '{path}': {source}")]
    ScenarioRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid scenario '{path}': {source}")]
    ScenarioParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot drawing failed: {0}")]
    Plot(String),

    #[error("Unsupported plot format '{0}'. Expected .svg or .png.")]
    UnsupportedPlotFormat(String),
}
