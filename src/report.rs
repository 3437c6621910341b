//! Output side of a run: where violations and fix operations go, and the
//! final summary line and exit status.

use std::io::{self, Write};

use crate::error::Violation;
use crate::fix::{FixOp, FixSerializer};

/// Exit status when violations were counted.
pub const EXIT_FAILED: u8 = 255;
/// Exit status when fix mode hit an invalid identifier or a loop.
pub const EXIT_UNFIXABLE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Print every violation and fail if any were found.
    #[default]
    Report,
    /// Print corrective operations for the fixable checks instead.
    Fix,
}

/// Receives results in the order the checks produce them.
pub trait Sink {
    fn violation(&mut self, violation: &Violation) -> io::Result<()>;
    fn fix(&mut self, op: &FixOp) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub mode: Mode,
    /// Counted violations.
    pub errors: usize,
    /// Fix operations emitted.
    pub fixes: usize,
}

impl Summary {
    pub fn passed(&self) -> bool {
        self.errors == 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { EXIT_FAILED }
    }

    /// Final line. Fix mode stays silent when nothing was counted.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        if !self.passed() {
            writeln!(out, "Validation failed. {} errors", self.errors)
        } else if self.mode == Mode::Report {
            writeln!(out, "No validity issues")
        } else {
            Ok(())
        }
    }
}

/// Writes `ERROR: ` lines and rendered fix operations to one stream.
pub struct WriterSink<W, S> {
    out: W,
    serializer: S,
}

impl<W: Write, S: FixSerializer> WriterSink<W, S> {
    pub fn new(out: W, serializer: S) -> Self {
        WriterSink { out, serializer }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write, S: FixSerializer> Sink for WriterSink<W, S> {
    fn violation(&mut self, violation: &Violation) -> io::Result<()> {
        writeln!(self.out, "ERROR: {}", violation)
    }

    fn fix(&mut self, op: &FixOp) -> io::Result<()> {
        let line = self.serializer.render(op)?;
        writeln!(self.out, "{}", line)
    }
}

/// Keeps everything in memory.
#[derive(Debug, Default)]
pub struct Collector {
    pub violations: Vec<Violation>,
    pub fixes: Vec<FixOp>,
}

impl Collector {
    pub fn codes(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.code).collect()
    }
}

impl Sink for Collector {
    fn violation(&mut self, violation: &Violation) -> io::Result<()> {
        self.violations.push(violation.clone());
        Ok(())
    }

    fn fix(&mut self, op: &FixOp) -> io::Result<()> {
        self.fixes.push(op.clone());
        Ok(())
    }
}
