//! Centimeter to inch conversion of search results.
//!
//! Conversions rescale each axis and recompute the volume from the converted
//! axes; the cm³ volume is never divided by `CM_TO_IN³` directly.

use std::fmt;

use crate::dimensions::Dimensions;

/// Centimeters per inch.
pub const CM_TO_IN: f64 = 2.54;

/// Length unit of a [`Measurement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// Centimeters; volumes in cm³.
    Centimeters,
    /// Inches; volumes in in³.
    Inches,
}

impl Unit {
    /// Short symbol for lengths in this unit.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }
}

/// Dimensions paired with their unit and volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Length unit of every axis.
    pub unit: Unit,
    /// Axis lengths.
    pub dimensions: Dimensions,
    /// Volume in `unit`³.
    pub volume: f64,
}

impl Measurement {
    /// A measurement of `dimensions` given in centimeters.
    pub fn centimeters(dimensions: Dimensions) -> Self {
        Self {
            unit: Unit::Centimeters,
            volume: dimensions.volume(),
            dimensions,
        }
    }

    /// Convert to inches, dividing each axis by [`CM_TO_IN`].
    pub fn to_inches(&self) -> Self {
        match self.unit {
            Unit::Inches => *self,
            Unit::Centimeters => {
                let dimensions = self.dimensions.map_axes(|x| x / CM_TO_IN);
                Self {
                    unit: Unit::Inches,
                    volume: dimensions.volume(),
                    dimensions,
                }
            }
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let u = self.unit.symbol();
        match self.dimensions {
            Dimensions::Cuboid {
                height,
                width,
                depth,
            } => write!(f, "{height} {u} x {width} {u} x {depth} {u}")?,
            d if d.is_sphere() => write!(f, "radius {} {u}", d.axes()[0])?,
            Dimensions::Ellipsoid { a, b, c } => write!(f, "radii {a} {u} x {b} {u} x {c} {u}")?,
        }
        write!(f, " = {} {u}^3", self.volume)
    }
}
