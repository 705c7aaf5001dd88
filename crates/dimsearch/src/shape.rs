//! Shape rules: how a single driving parameter determines a whole solid.

use crate::{dimensions::Dimensions, ratio::RatioFamily};

/// Derives the full dimension set of a solid from its driving parameter.
///
/// Implementations carry their ratio factors as fields; no shape reads a
/// global.
pub trait ShapeRule {
    /// Short human-readable name used in log output.
    fn name(&self) -> &'static str;

    /// Dimensions of the solid whose driving parameter is `driving`.
    fn dimensions(&self, driving: f64) -> Dimensions;

    /// Dimensions and volume at `driving`.
    fn evaluate(&self, driving: f64) -> (Dimensions, f64) {
        let dims = self.dimensions(driving);
        (dims, dims.volume())
    }
}

/// A box whose width and depth are fixed multiples of its height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangular {
    /// Width multiplier.
    pub wide_factor: f64,
    /// Depth multiplier.
    pub narrow_factor: f64,
}

impl Rectangular {
    /// A box proportioned by `family`'s wide and narrow factors.
    pub const fn from_family(family: RatioFamily) -> Self {
        Self {
            wide_factor: family.wide(),
            narrow_factor: family.narrow(),
        }
    }
}

impl ShapeRule for Rectangular {
    fn name(&self) -> &'static str {
        "box"
    }

    fn dimensions(&self, height: f64) -> Dimensions {
        Dimensions::Cuboid {
            height,
            width: height * self.wide_factor,
            depth: height * self.narrow_factor,
        }
    }
}

/// A sphere driven by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spherical;

impl ShapeRule for Spherical {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn dimensions(&self, radius: f64) -> Dimensions {
        Dimensions::sphere(radius)
    }
}

/// A spheroid with two equal equatorial radii and a polar radius scaled by
/// `factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OblateSpheroid {
    /// Polar radius multiplier.
    pub factor: f64,
}

impl OblateSpheroid {
    /// A spheroid using `family`'s narrow factor when `narrow` is set, and its
    /// wide factor otherwise.
    pub const fn from_family(family: RatioFamily, narrow: bool) -> Self {
        Self {
            factor: family.factor(narrow),
        }
    }
}

impl ShapeRule for OblateSpheroid {
    fn name(&self) -> &'static str {
        "oblate spheroid"
    }

    fn dimensions(&self, a: f64) -> Dimensions {
        Dimensions::Ellipsoid {
            a,
            b: a,
            c: a * self.factor,
        }
    }
}
