use std::path::{Path, PathBuf};

use region_fill::{FillReport, FillerKind, RegionFill};

use crate::error::JobError;
use crate::rendering::{read_png, write_png};

/// One fill on a PNG file.
#[derive(Debug, Clone)]
pub struct FillJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub x: i64,
    pub y: i64,
    pub fill: RegionFill,
}

/// What a finished job did.
#[derive(Debug, Clone, PartialEq)]
pub struct FillSummary {
    pub filler: FillerKind,
    pub width: usize,
    pub height: usize,
    pub report: FillReport,
    pub bytes_written: usize,
}

impl FillJob {
    pub fn new(input: &Path, output: &Path, x: i64, y: i64, fill: RegionFill) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            x,
            y,
            fill,
        }
    }

    /// Read the input, fill around the seed and write the output.
    pub fn run(&self) -> Result<FillSummary, JobError> {
        let mut canvas = read_png(&self.input)?;
        let report = self.fill.fill(&mut canvas, self.x, self.y);

        if report.is_empty() {
            tracing::warn!(
                x = self.x,
                y = self.y,
                width = canvas.width(),
                height = canvas.height(),
                "Seed selected no pixels"
            );
        }

        let bytes_written = write_png(&self.output, &canvas)?;
        tracing::info!(
            output = %self.output.display(),
            filler = %self.fill.kind(),
            marked = report.vertical_marked,
            "Fill written"
        );

        Ok(FillSummary {
            filler: self.fill.kind(),
            width: canvas.width(),
            height: canvas.height(),
            report,
            bytes_written,
        })
    }
}
