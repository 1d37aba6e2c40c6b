//! A tiny stopwatch for reporting how long loads and searches take.

use std::fmt;
use std::time::{Duration, Instant};

/// Starts timing on creation.
pub struct Stopwatch(Instant);

impl Stopwatch {
    /// Starts a new stopwatch.
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Time since [`Stopwatch::start`].
    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.0.elapsed())
    }
}

/// A measured duration, displayed as two `time:` lines.
#[derive(Clone, Copy, Debug)]
pub struct Elapsed(Duration);

impl Elapsed {
    /// The measured time.
    pub fn duration(&self) -> Duration {
        self.0
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time: {} microseconds", self.0.as_micros())?;
        write!(f, "time: {} seconds", self.0.as_secs_f64())
    }
}
