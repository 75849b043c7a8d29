use std::io::Write;

use serde::Serialize;

use crate::core::trajectory::{TrajectoryPoint, TrajectoryResult};
use crate::error::TrajectoryError;
use crate::render::Renderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    result: &'a TrajectoryResult,
    points: &'a [TrajectoryPoint],
}

/// Pretty-printed `{ "result": ..., "points": [...] }`.
pub struct JsonReport<W: Write> {
    out: W,
}

impl<W: Write> JsonReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonReport<W> {
    fn render(
        &mut self,
        result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError> {
        serde_json::to_writer_pretty(&mut self.out, &JsonDocument { result, points })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Sample table with an `x,y` header.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(out),
        }
    }

    pub fn into_inner(self) -> Result<W, TrajectoryError> {
        self.writer
            .into_inner()
            .map_err(|err| TrajectoryError::Io(err.into_error()))
    }
}

impl<W: Write> Renderer for CsvReport<W> {
    fn render(
        &mut self,
        _result: &TrajectoryResult,
        points: &[TrajectoryPoint],
    ) -> Result<(), TrajectoryError> {
        // Header is written explicitly so an empty sample set still gets one.
        self.writer.write_record(["x", "y"])?;
        for point in points {
            self.writer
                .write_record([point.x.to_string(), point.y.to_string()])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
