use thiserror::Error;

/// Errors raised while validating search inputs or looking up shapes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The scan step was zero, negative, or not a finite number.
    #[error("step must be a finite number greater than zero, got {0}")]
    InvalidStep(f64),
    /// The scan step is too small for the range: it would need more than
    /// `MAX_SAMPLES` samples, or adding it does not change the bounds.
    #[error("step {step} is too small to scan a range of {span}")]
    StepTooSmall {
        /// The offending step.
        step: f64,
        /// Width of the scan range (`end - start`).
        span: f64,
    },
    /// A scan bound was NaN or infinite.
    #[error("scan {name} must be finite, got {value}")]
    NonFiniteBound {
        /// Which bound was rejected (`start` or `end`).
        name: &'static str,
        /// The offending value.
        value: f64,
    },
    /// The tolerance half-width was negative or not a finite number.
    #[error("exit range must be a finite number >= 0, got {0}")]
    InvalidExitRange(f64),
    /// The target volume was NaN or infinite.
    #[error("target volume must be finite, got {0}")]
    NonFiniteTarget(f64),
    /// No shape with this name is registered.
    #[error("unknown shape '{0}'")]
    UnknownShape(String),
    /// The ratio family selector did not match any family.
    #[error("unknown ratio family '{0}' (expected GOLDEN or SQRT)")]
    UnknownRatioFamily(String),
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
