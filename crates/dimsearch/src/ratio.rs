//! Aspect-ratio constants shared by the proportioned shapes.
//!
//! The narrow factors are defined as `wide - 1`, so a golden box of height `h`
//! has width `1.618·h` and depth `0.618·h`.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// Golden ratio, rounded to three decimals.
pub const GOLDEN_RATIO: f64 = 1.618;
/// Narrow complement of [`GOLDEN_RATIO`].
pub const GOLDEN_RATIO_NARROW: f64 = GOLDEN_RATIO - 1.0;

/// Square root of two, rounded to three decimals.
pub const SQRT_TWO: f64 = 1.414;
/// Narrow complement of [`SQRT_TWO`].
pub const SQRT_TWO_NARROW: f64 = SQRT_TWO - 1.0;

/// Family of proportions a shape is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioFamily {
    /// Golden ratio proportions.
    #[default]
    Golden,
    /// √2 proportions.
    Sqrt,
}

impl RatioFamily {
    /// All families, in display order.
    pub const ALL: [Self; 2] = [Self::Golden, Self::Sqrt];

    /// The wide factor of this family.
    pub const fn wide(self) -> f64 {
        match self {
            Self::Golden => GOLDEN_RATIO,
            Self::Sqrt => SQRT_TWO,
        }
    }

    /// The narrow (`wide - 1`) factor of this family.
    pub const fn narrow(self) -> f64 {
        match self {
            Self::Golden => GOLDEN_RATIO_NARROW,
            Self::Sqrt => SQRT_TWO_NARROW,
        }
    }

    /// The wide or narrow factor, selected by `narrow`.
    pub const fn factor(self, narrow: bool) -> f64 {
        if narrow { self.narrow() } else { self.wide() }
    }

    /// Canonical selector string accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Golden => "GOLDEN",
            Self::Sqrt => "SQRT",
        }
    }
}

impl fmt::Display for RatioFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RatioFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|family| family.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownRatioFamily(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn narrow_is_wide_minus_one() {
        for family in RatioFamily::ALL {
            assert_relative_eq!(family.narrow(), family.wide() - 1.0);
            assert_relative_eq!(family.wide() - family.narrow(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(GOLDEN_RATIO_NARROW, 0.618, epsilon = 1e-12);
        assert_relative_eq!(SQRT_TWO_NARROW, 0.414, epsilon = 1e-12);
    }

    #[test]
    fn factor_selects_narrow() {
        assert_eq!(RatioFamily::Golden.factor(false), GOLDEN_RATIO);
        assert_eq!(RatioFamily::Golden.factor(true), GOLDEN_RATIO_NARROW);
        assert_eq!(RatioFamily::Sqrt.factor(false), SQRT_TWO);
        assert_eq!(RatioFamily::Sqrt.factor(true), SQRT_TWO_NARROW);
    }

    #[test]
    fn parses_family_names() -> Result<()> {
        assert_eq!("GOLDEN".parse::<RatioFamily>()?, RatioFamily::Golden);
        assert_eq!("sqrt".parse::<RatioFamily>()?, RatioFamily::Sqrt);
        assert_eq!(" Golden ".parse::<RatioFamily>()?, RatioFamily::Golden);
        assert_eq!(RatioFamily::default(), RatioFamily::Golden);
        Ok(())
    }

    #[test]
    fn rejects_unknown_family() {
        assert_eq!(
            "silver".parse::<RatioFamily>(),
            Err(Error::UnknownRatioFamily("silver".to_string()))
        );
    }
}
