//! # Geometry Utilities
//!
//! Scalar unit conversions and closed-form distance formulas over
//! `(latitude, longitude)` pairs. Nothing here depends on [`Vector`] or
//! [`GeoVector`]; the haversine formula serves as an independent reference
//! for the vector-derived great-circle distances.
//!
//! ## Examples
//!
//! ```rust
//! use spheroid::geometry::{haversine_distance, AngleUnit};
//!
//! // A quarter of the way around the equator of a unit sphere
//! let d = haversine_distance((0.0, 0.0), (0.0, 90.0), 1.0, AngleUnit::Degrees);
//! assert!((d - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```
//!
//! [`Vector`]: crate::vector::Vector
//! [`GeoVector`]: crate::geo_vector::GeoVector

use crate::constants::{DEG2RAD, RAD2DEG};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit in which angular inputs and outputs are expressed
///
/// Geographic factories default to degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Angle given in degrees
    #[default]
    Degrees,
    /// Angle given in radians
    Radians,
}

impl AngleUnit {
    /// Converts a value in this unit to radians
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => deg_to_rad(value),
            AngleUnit::Radians => value,
        }
    }

    /// Converts a value in radians to this unit
    pub fn from_radians(self, radians: f64) -> f64 {
        match self {
            AngleUnit::Degrees => rad_to_deg(radians),
            AngleUnit::Radians => radians,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            other => Err(format!("Unknown angle unit: {}", other)),
        }
    }
}

/// Converts degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG2RAD
}

/// Converts radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD2DEG
}

/// Great-circle distance between two `(lat, lng)` points on a sphere
///
/// Uses the half-angle haversine formula:
///
/// `d = 2r · asin(sqrt(sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)))`
///
/// # Arguments
///
/// * `point_1` - First point as `(latitude, longitude)`
/// * `point_2` - Second point as `(latitude, longitude)`
/// * `radius` - Sphere radius; the result is in the same length unit
/// * `unit` - Unit of the coordinates
pub fn haversine_distance(
    point_1: (f64, f64),
    point_2: (f64, f64),
    radius: f64,
    unit: AngleUnit,
) -> f64 {
    let lat_1 = unit.to_radians(point_1.0);
    let lng_1 = unit.to_radians(point_1.1);
    let lat_2 = unit.to_radians(point_2.0);
    let lng_2 = unit.to_radians(point_2.1);

    let lat_term = (0.5 * (lat_2 - lat_1)).sin().powi(2);
    let lng_term = (0.5 * (lng_2 - lng_1)).sin().powi(2);

    let h = (lat_term + lat_1.cos() * lat_2.cos() * lng_term).sqrt();

    radius * 2.0 * h.asin()
}

/// Flat-plane Euclidean distance between two coordinate pairs
///
/// The result is in the units of the inputs (e.g. degrees) and always
/// underestimates the angular great-circle separation away from the equator.
pub fn pythagorean_distance(point_1: (f64, f64), point_2: (f64, f64)) -> f64 {
    let dx = point_2.0 - point_1.0;
    let dy = point_2.1 - point_1.1;

    (dx * dx + dy * dy).sqrt()
}
