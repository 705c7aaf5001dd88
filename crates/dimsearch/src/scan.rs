//! Scan ranges over the driving parameter, and the volume window that stops a
//! scan.

use crate::error::{Error, Result};

/// Largest number of samples a scan may hold: every index up to this value is
/// exact as an `f64`.
pub const MAX_SAMPLES: u64 = 1 << 53;

/// Range of driving-parameter values to sweep, in centimeters.
///
/// Samples are `start + i·step` for `i = 0, 1, ...` while the value stays
/// below `end`. A range with `start >= end` has no samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanParameters {
    /// First sample.
    start: f64,
    /// Exclusive upper bound.
    end: f64,
    /// Distance between consecutive samples; always finite and positive.
    step: f64,
}

impl ScanParameters {
    /// Create a scan range, rejecting non-finite bounds and a step that is not
    /// strictly positive.
    ///
    /// A non-empty range also rejects a step that would need more than
    /// [`MAX_SAMPLES`] samples, or that is too small to change a value at the
    /// magnitude of the bounds.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        if !start.is_finite() {
            return Err(Error::NonFiniteBound {
                name: "start",
                value: start,
            });
        }
        if !end.is_finite() {
            return Err(Error::NonFiniteBound {
                name: "end",
                value: end,
            });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(Error::InvalidStep(step));
        }
        if start < end {
            let span = end - start;
            let anchor = if start.abs() > end.abs() { start } else { end };
            if !(span / step <= MAX_SAMPLES as f64) || anchor + step == anchor {
                return Err(Error::StepTooSmall { step, span });
            }
        }
        Ok(Self { start, end, step })
    }

    /// First sample.
    pub const fn start(&self) -> f64 {
        self.start
    }

    /// Exclusive upper bound.
    pub const fn end(&self) -> f64 {
        self.end
    }

    /// Sample spacing.
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Whether the range has no samples.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The `i`th sample, computed multiplicatively so that rounding does not
    /// accumulate across steps.
    pub fn sample(&self, i: u64) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Exact number of samples below `end`, never more than [`MAX_SAMPLES`].
    ///
    /// Binary search for the first index whose [`Self::sample`] reaches `end`;
    /// samples never decrease with the index, so the count and the samples
    /// agree about the last value.
    pub fn sample_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let (mut lo, mut hi) = (0, MAX_SAMPLES);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.sample(mid) < self.end {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }

    /// Iterate over every sample in ascending order.
    pub fn samples(&self) -> impl Iterator<Item = f64> + use<> {
        let scan = *self;
        (0..scan.sample_count()).map(move |i| scan.sample(i))
    }
}

/// Inclusive volume band `[target - exit_range, target + exit_range]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceWindow {
    /// Smallest accepted volume.
    pub lower: f64,
    /// Largest accepted volume.
    pub upper: f64,
}

impl ToleranceWindow {
    /// The window of half-width `exit_range` centred on `target`.
    pub fn around(target: f64, exit_range: f64) -> Result<Self> {
        if !target.is_finite() {
            return Err(Error::NonFiniteTarget(target));
        }
        if !(exit_range.is_finite() && exit_range >= 0.0) {
            return Err(Error::InvalidExitRange(exit_range));
        }
        Ok(Self {
            lower: target - exit_range,
            upper: target + exit_range,
        })
    }

    /// Whether `volume` lies inside the window, bounds included.
    pub fn contains(&self, volume: f64) -> bool {
        self.lower <= volume && volume <= self.upper
    }
}
