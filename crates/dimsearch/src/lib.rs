//! Core library for finding ratio-proportioned solids with a target volume.
//!
//! Exposes the linear dimension search, the [`ShapeRule`] trait used to derive
//! a full dimension set from a single driving parameter, and the unit helpers
//! used by the CLI crate in this workspace.
//!
//! # Supported Shapes
//!
//! - Rectangular box (golden ratio or √2 proportions)
//! - Sphere
//! - Oblate spheroid (golden ratio or √2 polar factor)

/// Derived dimension tuples and their volume formulas.
pub mod dimensions;
/// Error types used across the crate.
pub mod error;
/// Fixed aspect-ratio constants and ratio families.
pub mod ratio;
/// Central registry of shape metadata and constructors.
pub mod registry;
/// Scan ranges and tolerance windows.
pub mod scan;
/// The linear dimension search.
pub mod search;
/// The `ShapeRule` trait and its implementations.
pub mod shape;
/// Centimeter/inch conversion.
pub mod units;

pub use crate::{
    dimensions::Dimensions,
    ratio::RatioFamily,
    scan::{ScanParameters, ToleranceWindow},
    search::{Outcome, SearchResult, search},
    shape::ShapeRule,
};

/// Construct a shape rule by registry name.
///
/// `family` and `narrow` are only consulted by shapes that take a ratio
/// option. Returns an error if the name is unknown.
pub fn rule_from_name(
    name: &str,
    family: RatioFamily,
    narrow: bool,
) -> error::Result<Box<dyn ShapeRule + 'static>> {
    registry::construct(name, family, narrow)
}
