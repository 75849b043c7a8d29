use std::io::Write;

use crate::core::trajectory::{TrajectoryPoint, TrajectoryResult};
use crate::error::TrajectoryError;
use crate::render::{Renderer, summary_lines};

/// Plain-text results block, one value per line.
pub struct TextReport<W: Write> {
    out: W,
}

impl<W: Write> TextReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextReport<W> {
    fn render(
        &mut self,
        result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError> {
        for line in summary_lines(result) {
            writeln!(self.out, "{line}")?;
        }
        if points.is_empty() {
            writeln!(self.out, "No trajectory to draw (flight time is zero).")?;
        } else {
            writeln!(self.out, "Samples: {}", points.len())?;
        }
        self.out.flush()?;
        Ok(())
    }
}
