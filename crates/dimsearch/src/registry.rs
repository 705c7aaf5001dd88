//! Table of supported shapes and their constructors.

use crate::{
    error::{Error, Result},
    ratio::RatioFamily,
    shape::{OblateSpheroid, Rectangular, ShapeRule, Spherical},
};

/// Metadata and constructor for one shape.
pub struct ShapeEntry {
    /// Registry key, as accepted by [`construct`].
    pub key: &'static str,
    /// Human-readable name.
    pub display: &'static str,
    /// Which options the shape consults.
    pub options: &'static str,
    /// Whether the shape consults the ratio family and narrow flag.
    pub takes_ratio: bool,
    /// Build the rule from the ratio family and narrow flag.
    build: fn(RatioFamily, bool) -> Box<dyn ShapeRule>,
}

/// Golden ratio box; ratio options do not apply.
fn golden_box(_: RatioFamily, _: bool) -> Box<dyn ShapeRule> {
    Box::new(Rectangular::from_family(RatioFamily::Golden))
}

/// √2 box; ratio options do not apply.
fn sqrt_box(_: RatioFamily, _: bool) -> Box<dyn ShapeRule> {
    Box::new(Rectangular::from_family(RatioFamily::Sqrt))
}

/// Sphere; ratio options do not apply.
fn sphere(_: RatioFamily, _: bool) -> Box<dyn ShapeRule> {
    Box::new(Spherical)
}

/// Oblate spheroid with the selected polar factor.
fn oblate_spheroid(family: RatioFamily, narrow: bool) -> Box<dyn ShapeRule> {
    Box::new(OblateSpheroid::from_family(family, narrow))
}

/// Every registered shape, in display order.
pub const REGISTRY: &[ShapeEntry] = &[
    ShapeEntry {
        key: "golden-box",
        display: "Golden ratio box",
        options: "height drives width (x1.618) and depth (x0.618)",
        takes_ratio: false,
        build: golden_box,
    },
    ShapeEntry {
        key: "sqrt-box",
        display: "Square root of two box",
        options: "height drives width (x1.414) and depth (x0.414)",
        takes_ratio: false,
        build: sqrt_box,
    },
    ShapeEntry {
        key: "sphere",
        display: "Sphere",
        options: "radius drives all axes",
        takes_ratio: false,
        build: sphere,
    },
    ShapeEntry {
        key: "oblate-spheroid",
        display: "Oblate spheroid",
        options: "radius drives a = b; c = a x ratio (GOLDEN|SQRT, --narrow for the complement)",
        takes_ratio: true,
        build: oblate_spheroid,
    },
];

/// Registry keys, in display order.
pub fn shape_names() -> Vec<&'static str> {
    REGISTRY.iter().map(|e| e.key).collect()
}

/// Look up a registry entry by key.
pub fn entry(name: &str) -> Result<&'static ShapeEntry> {
    REGISTRY
        .iter()
        .find(|e| e.key == name)
        .ok_or_else(|| Error::UnknownShape(name.to_string()))
}

/// Build the shape rule registered under `name`.
pub fn construct(name: &str, family: RatioFamily, narrow: bool) -> Result<Box<dyn ShapeRule>> {
    Ok((entry(name)?.build)(family, narrow))
}
