use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::core::trajectory::{TrajectoryInput, TrajectoryPoint, TrajectoryResult};
use crate::core::window::AxisWindow;
use crate::error::TrajectoryError;
use crate::render::{Renderer, summary_lines};

const TRAJECTORY_COLOR: RGBColor = RGBColor(0x34, 0x98, 0xdb);
const START_MARKER_RADIUS: i32 = 5;
const ARROW_LENGTH_PX: f64 = 30.0;
const ARROW_HEAD_PX: f64 = 8.0;
const FONT_FAMILY: &str = "sans-serif";
const INFO_FONT_SIZE: u32 = 16;
const INFO_LINE_HEIGHT_PX: i32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotFormat {
    Svg,
    Png,
}

impl PlotFormat {
    pub fn from_path(path: &Path) -> Result<Self, TrajectoryError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(TrajectoryError::UnsupportedPlotFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Writes a chart of the trajectory to an SVG or PNG file, picked by the
/// file extension.
pub struct ChartRenderer {
    path: PathBuf,
    format: PlotFormat,
    size: (u32, u32),
    input: TrajectoryInput,
}

impl ChartRenderer {
    pub fn new(
        path: impl Into<PathBuf>,
        size: (u32, u32),
        input: TrajectoryInput,
    ) -> Result<Self, TrajectoryError> {
        let path = path.into();
        let format = PlotFormat::from_path(&path)?;
        Ok(Self {
            path,
            format,
            size,
            input,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Renderer for ChartRenderer {
    fn render(
        &mut self,
        result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError> {
        match self.format {
            PlotFormat::Svg => {
                let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
                draw_chart(&root, &self.input, result, points)
            }
            PlotFormat::Png => {
                let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
                draw_chart(&root, &self.input, result, points)
            }
        }
    }
}

fn plot_err<E: std::fmt::Display>(err: E) -> TrajectoryError {
    TrajectoryError::Plot(err.to_string())
}

fn format_tick(value: &f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    input: &TrajectoryInput,
    result: &TrajectoryResult,
    points: &[TrajectoryPoint],
) -> Result<(), TrajectoryError> {
    root.fill(&WHITE).map_err(plot_err)?;
    let window = AxisWindow::fit(input, result, points);

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(window.x_min..window.x_max, window.y_min..window.y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x (m)")
        .y_desc("y (m)")
        .x_labels(window.x_ticks().len())
        .y_labels(window.y_ticks().len())
        .x_label_formatter(&format_tick)
        .y_label_formatter(&format_tick)
        .draw()
        .map_err(plot_err)?;

    if !points.is_empty() {
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|p| (p.x, p.y)),
                TRAJECTORY_COLOR.stroke_width(2),
            ))
            .map_err(plot_err)?;
        chart
            .draw_series(std::iter::once(Circle::new(
                (input.x0, input.y0),
                START_MARKER_RADIUS,
                BLACK.filled(),
            )))
            .map_err(plot_err)?;

        let start = chart.backend_coord(&(input.x0, input.y0));
        draw_launch_arrow(root, start, input.angle_deg.to_radians())?;
    }

    let (info_x, info_y) = chart.backend_coord(&(window.x_min, window.y_max));
    for (idx, line) in summary_lines(result).into_iter().enumerate() {
        root.draw(&Text::new(
            line,
            (info_x + 10, info_y + 10 + idx as i32 * INFO_LINE_HEIGHT_PX),
            (FONT_FAMILY, INFO_FONT_SIZE).into_font(),
        ))
        .map_err(plot_err)?;
    }

    root.present().map_err(plot_err)?;
    Ok(())
}

/// Pixel-space arrow from the start point along the launch direction.
fn draw_launch_arrow<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    start: (i32, i32),
    angle_rad: f64,
) -> Result<(), TrajectoryError> {
    let tip = arrow_point(start, angle_rad, ARROW_LENGTH_PX);
    let left = arrow_point(tip, angle_rad + std::f64::consts::PI * 0.75, ARROW_HEAD_PX);
    let right = arrow_point(tip, angle_rad - std::f64::consts::PI * 0.75, ARROW_HEAD_PX);

    root.draw(&PathElement::new(vec![start, tip], BLACK.stroke_width(2)))
        .map_err(plot_err)?;
    root.draw(&Polygon::new(vec![tip, left, right], BLACK.filled()))
        .map_err(plot_err)?;
    Ok(())
}

// Screen y grows downward.
fn arrow_point(from: (i32, i32), angle_rad: f64, length_px: f64) -> (i32, i32) {
    (
        from.0 + (length_px * angle_rad.cos()).round() as i32,
        from.1 - (length_px * angle_rad.sin()).round() as i32,
    )
}
