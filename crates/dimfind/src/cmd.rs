//! Command handlers for the `dimfind` CLI.
//!
//! Each search subcommand validates its inputs, runs the scan, and logs the
//! result in centimeters and inches.

use anyhow::{Context, Result};
use dimsearch::{
    Outcome, RatioFamily, ScanParameters, SearchResult, ToleranceWindow, registry, search,
};
use tracing::{info, warn};

/// Scan settings shared by every search subcommand.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    /// First driving-parameter value, in cm.
    pub start: f64,
    /// Exclusive upper bound, in cm.
    pub end: f64,
    /// Step between samples, in cm.
    pub step: f64,
    /// Accepted distance from the target volume, in cm³.
    pub exit_range: f64,
}

/// Which solid to search for.
#[derive(Clone, Copy, Debug)]
pub struct ShapeSelection<'a> {
    /// Registry key of the shape.
    pub key: &'a str,
    /// Ratio family, for shapes that take one.
    pub family: RatioFamily,
    /// Use the family's narrow factor.
    pub narrow: bool,
}

impl ShapeSelection<'_> {
    /// Human-readable description used in the announcement line.
    fn label(&self) -> Result<String> {
        let entry = registry::entry(self.key)?;
        let display = entry.display.to_lowercase();
        Ok(if entry.takes_ratio {
            let width = if self.narrow { "narrow" } else { "wide" };
            format!("{display} ({} {width})", self.family)
        } else {
            display
        })
    }
}

/// Search for dimensions of `selection` with a volume near `target` cm³.
pub fn find(
    selection: ShapeSelection<'_>,
    target: f64,
    options: ScanOptions,
) -> Result<SearchResult> {
    let scan = ScanParameters::new(options.start, options.end, options.step)
        .context("invalid scan range")?;
    let window =
        ToleranceWindow::around(target, options.exit_range).context("invalid tolerance")?;
    let rule = registry::construct(selection.key, selection.family, selection.narrow)?;

    info!(
        "*** Finding parameters for {} with volume {target} cm^3 ***",
        selection.label()?
    );

    let result = search(rule.as_ref(), &scan, &window);
    match result.outcome {
        Outcome::Matched => {}
        Outcome::Exhausted => warn!(
            "*** No size within {} cm^3 of the target between {} cm and {} cm; reporting the last sample ***",
            options.exit_range, options.start, options.end
        ),
        Outcome::EmptyRange => warn!(
            "*** Scan range is empty (start {} cm >= end {} cm); reporting the size at the start ***",
            options.start, options.end
        ),
    }

    info!("*** Found size: {} ***", result.in_centimeters());
    info!("*** Found size: {} ***", result.in_inches());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The CLI defaults.
    const DEFAULTS: ScanOptions = ScanOptions {
        start: 20.0,
        end: 40.0,
        step: 0.5,
        exit_range: 100.0,
    };

    #[test]
    fn labels() -> Result<()> {
        let golden = ShapeSelection {
            key: "golden-box",
            family: RatioFamily::Golden,
            narrow: false,
        };
        assert_eq!(golden.label()?, "golden ratio box");

        // Boxes fix their family, so the selection's ratio is not shown.
        let sqrt_box = ShapeSelection {
            key: "sqrt-box",
            family: RatioFamily::Golden,
            narrow: true,
        };
        assert_eq!(sqrt_box.label()?, "square root of two box");

        let oblate = ShapeSelection {
            key: "oblate-spheroid",
            family: RatioFamily::Sqrt,
            narrow: true,
        };
        assert_eq!(oblate.label()?, "oblate spheroid (SQRT narrow)");
        Ok(())
    }

    #[test]
    fn finds_golden_box_with_fine_step() -> Result<()> {
        let selection = ShapeSelection {
            key: "golden-box",
            family: RatioFamily::Golden,
            narrow: false,
        };
        let result = find(selection, 25000.0, ScanOptions { step: 0.25, ..DEFAULTS })?;
        assert!(result.is_match());
        Ok(())
    }

    #[test]
    fn rejects_invalid_options() {
        let selection = ShapeSelection {
            key: "sphere",
            family: RatioFamily::Golden,
            narrow: false,
        };
        assert!(find(selection, 1000.0, ScanOptions { step: 0.0, ..DEFAULTS }).is_err());
        assert!(
            find(
                selection,
                1000.0,
                ScanOptions {
                    exit_range: -1.0,
                    ..DEFAULTS
                }
            )
            .is_err()
        );
        assert!(
            find(
                ShapeSelection {
                    key: "cube",
                    ..selection
                },
                1000.0,
                DEFAULTS
            )
            .is_err()
        );
    }
}
