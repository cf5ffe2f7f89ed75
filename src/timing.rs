//! Named interval timers for optional instrumentation.
//!
//! A [`Timings`] value is owned by whoever wants the measurements and passed
//! around explicitly; the parser never touches it.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use smol_str::SmolStr;

#[derive(Debug, Clone, Copy)]
struct Interval {
    started: Instant,
    total: Duration,
}

#[derive(Debug, Default)]
pub struct Timings {
    intervals: HashMap<SmolStr, Interval>,
}

impl Timings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts, or restarts, the interval `name`. Time already accumulated is
    /// kept.
    pub fn tic(&mut self, name: &str) {
        let now = Instant::now();
        self.intervals
            .entry(SmolStr::new(name))
            .and_modify(|interval| interval.started = now)
            .or_insert(Interval {
                started: now,
                total: Duration::ZERO,
            });
    }

    /// Adds the time since the last `tic` or `toc` of `name` to its total and
    /// returns that slice. Unknown names are ignored with a warning.
    pub fn toc(&mut self, name: &str) -> Option<Duration> {
        let Some(interval) = self.intervals.get_mut(name) else {
            tracing::warn!(name, "toc for unknown timer");
            return None;
        };
        let now = Instant::now();
        let slice = now.duration_since(interval.started);
        interval.total += slice;
        interval.started = now;
        Some(slice)
    }

    pub fn elapsed(&self, name: &str) -> Option<Duration> {
        self.intervals.get(name).map(|interval| interval.total)
    }

    /// Accumulated totals, sorted by name.
    pub fn report(&self) -> Vec<(SmolStr, Duration)> {
        let mut rows: Vec<_> = self
            .intervals
            .iter()
            .map(|(name, interval)| (name.clone(), interval.total))
            .collect();
        rows.sort_by(|left, right| left.0.cmp(&right.0));
        rows
    }

    /// Runs `f` inside a `tic`/`toc` pair for `name`.
    pub fn measure<T>(&mut self, name: &str, f: impl FnOnce() -> T) -> T {
        self.tic(name);
        let out = f();
        self.toc(name);
        out
    }
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, total) in self.report() {
            writeln!(f, "{name}: {:.6}(s)", total.as_secs_f64())?;
        }
        Ok(())
    }
}
