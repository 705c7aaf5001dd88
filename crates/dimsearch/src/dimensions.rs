//! Dimension tuples produced by shape rules.

use std::f64::consts::PI;

/// A full set of derived dimensions, tagged by the family of solid they
/// describe.
///
/// The tag owns the volume formula, so a tuple whose axes are rescaled (for
/// example by a unit conversion) recomputes its volume from the new axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimensions {
    /// A rectangular box.
    Cuboid {
        /// Height, the driving parameter of a box.
        height: f64,
        /// Width (`height · wide_factor`).
        width: f64,
        /// Depth (`height · narrow_factor`).
        depth: f64,
    },
    /// An ellipsoid described by its three semi-axes.
    ///
    /// Spheres have `a == b == c`; oblate spheroids have `a == b`.
    Ellipsoid {
        /// First equatorial radius, the driving parameter.
        a: f64,
        /// Second equatorial radius.
        b: f64,
        /// Polar radius.
        c: f64,
    },
}

impl Dimensions {
    /// A sphere of radius `r`.
    pub const fn sphere(r: f64) -> Self {
        Self::Ellipsoid { a: r, b: r, c: r }
    }

    /// The three axis lengths, in declaration order.
    pub const fn axes(&self) -> [f64; 3] {
        match *self {
            Self::Cuboid {
                height,
                width,
                depth,
            } => [height, width, depth],
            Self::Ellipsoid { a, b, c } => [a, b, c],
        }
    }

    /// Volume of the solid described by these dimensions.
    pub fn volume(&self) -> f64 {
        let [x, y, z] = self.axes();
        match self {
            Self::Cuboid { .. } => x * y * z,
            Self::Ellipsoid { .. } => 4.0 / 3.0 * PI * x * y * z,
        }
    }

    /// Apply `f` to every axis, keeping the solid family.
    pub fn map_axes(&self, f: impl Fn(f64) -> f64) -> Self {
        match *self {
            Self::Cuboid {
                height,
                width,
                depth,
            } => Self::Cuboid {
                height: f(height),
                width: f(width),
                depth: f(depth),
            },
            Self::Ellipsoid { a, b, c } => Self::Ellipsoid {
                a: f(a),
                b: f(b),
                c: f(c),
            },
        }
    }

    /// Whether this is an ellipsoid with three equal radii.
    pub fn is_sphere(&self) -> bool {
        matches!(*self, Self::Ellipsoid { a, b, c } if a == b && b == c)
    }
}
