//! Linear search for the first sample whose volume lands in a tolerance
//! window.

use tracing::{debug, instrument};

use crate::{
    dimensions::Dimensions,
    scan::{ScanParameters, ToleranceWindow},
    shape::ShapeRule,
    units::Measurement,
};

/// How a search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A sample's volume fell inside the tolerance window.
    Matched,
    /// Every sample was evaluated and none matched; the result holds the last
    /// one.
    Exhausted,
    /// The scan range had no samples; the result holds the shape evaluated at
    /// `start`.
    EmptyRange,
}

/// Outcome of a single search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Driving parameter of the reported sample.
    pub driving: f64,
    /// Dimensions at `driving`, in centimeters.
    pub dimensions: Dimensions,
    /// Volume at `driving`, in cm³.
    pub volume: f64,
    /// Number of samples evaluated.
    pub iterations: u64,
    /// How the search terminated.
    pub outcome: Outcome,
}

impl SearchResult {
    /// Whether the reported volume lies inside the tolerance window.
    pub fn is_match(&self) -> bool {
        self.outcome == Outcome::Matched
    }

    /// The reported dimensions in centimeters.
    pub fn in_centimeters(&self) -> Measurement {
        Measurement::centimeters(self.dimensions)
    }

    /// The reported dimensions in inches, with the volume recomputed from the
    /// converted axes.
    pub fn in_inches(&self) -> Measurement {
        self.in_centimeters().to_inches()
    }
}

/// Scan `scan` in ascending order and stop at the first sample whose volume
/// lies in `window`.
///
/// Never fails: if no sample matches the last one is returned with
/// [`Outcome::Exhausted`], and an empty range returns the shape evaluated at
/// `start` with [`Outcome::EmptyRange`] and zero iterations.
#[instrument(
    level = "debug",
    skip_all,
    fields(shape = rule.name(), start = scan.start(), end = scan.end(), step = scan.step())
)]
pub fn search<R>(rule: &R, scan: &ScanParameters, window: &ToleranceWindow) -> SearchResult
where
    R: ShapeRule + ?Sized,
{
    let mut last = None;
    for (iterations, driving) in (1..).zip(scan.samples()) {
        let (dimensions, volume) = rule.evaluate(driving);
        let sample = SearchResult {
            driving,
            dimensions,
            volume,
            iterations,
            outcome: Outcome::Exhausted,
        };
        debug!("{}", sample.in_centimeters());

        if window.contains(volume) {
            return SearchResult {
                outcome: Outcome::Matched,
                ..sample
            };
        }
        last = Some(sample);
    }

    last.unwrap_or_else(|| {
        let (dimensions, volume) = rule.evaluate(scan.start());
        SearchResult {
            driving: scan.start(),
            dimensions,
            volume,
            iterations: 0,
            outcome: Outcome::EmptyRange,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        error::Result,
        ratio::RatioFamily,
        shape::{Rectangular, Spherical},
    };

    /// A cube of side `h`, so volume is `h³`.
    struct Cube;

    impl ShapeRule for Cube {
        fn name(&self) -> &'static str {
            "cube"
        }

        fn dimensions(&self, h: f64) -> Dimensions {
            Dimensions::Cuboid {
                height: h,
                width: h,
                depth: h,
            }
        }
    }

    #[test]
    fn stops_at_first_match() -> Result<()> {
        // 3³ = 27 and 4³ = 64 both fit; the first one wins.
        let scan = ScanParameters::new(1.0, 10.0, 1.0)?;
        let window = ToleranceWindow::around(45.0, 20.0)?;
        let result = search(&Cube, &scan, &window);
        assert_eq!(result.outcome, Outcome::Matched);
        assert!(result.is_match());
        assert_eq!(result.driving, 3.0);
        assert_eq!(result.volume, 27.0);
        assert_eq!(result.iterations, 3);
        Ok(())
    }

    #[test]
    fn boundary_volume_matches() -> Result<()> {
        let scan = ScanParameters::new(1.0, 10.0, 1.0)?;
        let lower = search(&Cube, &scan, &ToleranceWindow::around(28.0, 1.0)?);
        assert_eq!(lower.driving, 3.0);
        let upper = search(&Cube, &scan, &ToleranceWindow::around(62.0, 2.0)?);
        assert_eq!(upper.driving, 4.0);
        assert!(lower.is_match() && upper.is_match());
        Ok(())
    }

    #[test]
    fn exhaustion_returns_last_sample() -> Result<()> {
        let scan = ScanParameters::new(1.0, 5.0, 1.0)?;
        let window = ToleranceWindow::around(1000.0, 1.0)?;
        let result = search(&Cube, &scan, &window);
        assert_eq!(result.outcome, Outcome::Exhausted);
        assert!(!result.is_match());
        assert_eq!(result.driving, 4.0);
        assert_eq!(result.volume, 64.0);
        assert_eq!(result.iterations, 4);
        Ok(())
    }

    #[test]
    fn empty_range_evaluates_start() -> Result<()> {
        let scan = ScanParameters::new(3.0, 2.0, 0.5)?;
        // The window contains 3³, but an empty range never reports a match.
        let window = ToleranceWindow::around(27.0, 1.0)?;
        let result = search(&Cube, &scan, &window);
        assert_eq!(result.outcome, Outcome::EmptyRange);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.driving, 3.0);
        assert_eq!(result.volume, 27.0);
        assert!(!result.is_match());
        Ok(())
    }

    /// Counts how many times the shape is evaluated.
    #[derive(Default)]
    struct CountingCube {
        /// Evaluations so far.
        calls: Cell<u32>,
    }

    impl ShapeRule for CountingCube {
        fn name(&self) -> &'static str {
            "counting cube"
        }

        fn dimensions(&self, h: f64) -> Dimensions {
            self.calls.set(self.calls.get() + 1);
            Cube.dimensions(h)
        }
    }

    #[test]
    fn evaluates_only_scanned_samples() -> Result<()> {
        let rule = CountingCube::default();
        let scan = ScanParameters::new(1.0, 10.0, 1.0)?;
        let result = search(&rule, &scan, &ToleranceWindow::around(8.0, 0.0)?);
        assert_eq!(result.iterations, 2);
        assert_eq!(rule.calls.get(), 2);

        let rule = CountingCube::default();
        let empty = ScanParameters::new(10.0, 1.0, 1.0)?;
        search(&rule, &empty, &ToleranceWindow::around(8.0, 0.0)?);
        assert_eq!(rule.calls.get(), 1);
        Ok(())
    }

    #[test]
    fn long_scan_stops_at_first_sample() -> Result<()> {
        // 10^15 samples; the first one already fits.
        let scan = ScanParameters::new(0.0, 1e12, 1e-3)?;
        let window = ToleranceWindow::around(0.0, 1.0)?;
        let result = search(&Cube, &scan, &window);
        assert_eq!(result.outcome, Outcome::Matched);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.driving, 0.0);
        Ok(())
    }

    #[test]
    fn works_through_trait_objects() -> Result<()> {
        let rules: [Box<dyn ShapeRule>; 2] = [
            Box::new(Rectangular::from_family(RatioFamily::Golden)),
            Box::new(Spherical),
        ];
        let scan = ScanParameters::new(1.0, 50.0, 0.25)?;
        let window = ToleranceWindow::around(5000.0, 200.0)?;
        for rule in &rules {
            let result = search(rule.as_ref(), &scan, &window);
            assert!(result.is_match(), "{} did not match", rule.name());
            assert!(window.contains(result.volume));
        }
        Ok(())
    }

    #[test]
    fn reports_inches() -> Result<()> {
        let scan = ScanParameters::new(2.54, 3.0, 1.0)?;
        let window = ToleranceWindow::around(0.0, 100.0)?;
        let result = search(&Cube, &scan, &window);
        let inches = result.in_inches();
        assert!((inches.volume - 1.0).abs() < 1e-12);
        Ok(())
    }
}
