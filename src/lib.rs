//! Closed-form projectile trajectories for classroom demonstrations.
//!
//! [`core`] holds the pure solver; [`render`] turns a solved trajectory into a
//! report, data file or chart.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod render;

pub use error::TrajectoryError;
