//! Time intervals for animation import

use std::fmt;

use serde::Serialize;

/// An interval on the time line, each end open or closed.
///
/// Two intervals matter to import jobs and must never be confused:
/// the [full](TimeInterval::full) interval imports all animation, the
/// [empty](TimeInterval::empty) interval imports none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInterval {
    min: f64,
    max: f64,
    min_closed: bool,
    max_closed: bool,
}

impl TimeInterval {
    pub fn new(min: f64, max: f64, min_closed: bool, max_closed: bool) -> Self {
        Self {
            min,
            max,
            min_closed,
            max_closed,
        }
    }

    /// `[min, max]`
    pub fn closed(min: f64, max: f64) -> Self {
        Self::new(min, max, true, true)
    }

    /// `(-inf, inf)`: every time.
    pub fn full() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, false, false)
    }

    /// `(0, 0)`: no time at all.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0, false, false)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        // NaN bounds compare false everywhere and leave nothing inside
        !(self.min <= self.max) || (self.min == self.max && !(self.min_closed && self.max_closed))
    }

    pub fn is_full(&self) -> bool {
        self.min == f64::NEG_INFINITY && self.max == f64::INFINITY
    }

    pub fn contains(&self, time: f64) -> bool {
        if self.is_empty() {
            return false;
        }
        let above_min = time > self.min || (self.min_closed && time == self.min);
        let below_max = time < self.max || (self.max_closed && time == self.max);
        above_min && below_max
    }
}

impl Default for TimeInterval {
    /// Callers that don't say otherwise import everything.
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            if self.min_closed { '[' } else { '(' },
            self.min,
            self.max,
            if self.max_closed { ']' } else { ')' },
        )
    }
}
