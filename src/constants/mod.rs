//! Constants module for geodesy calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Quarter turn, the latitude of the poles in radians
pub const HALF_PI: f64 = PI / 2.0;

// Distances
/// Result of a polyline scan that found no segment to measure against.
///
/// Returned when a polyline has fewer than two distinct vertices. It is a
/// marker, not a distance, and callers should compare against it explicitly.
pub const NO_SEGMENT_DISTANCE: f64 = 999_999_999_999.0;

/// Earth's equatorial radius in kilometers (WGS84)
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6_378.137;
/// Earth's polar radius in kilometers (WGS84)
pub const EARTH_POLAR_RADIUS_KM: f64 = 6_356.7523;
