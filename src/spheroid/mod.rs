//! # Spheroid Module
//!
//! Ellipsoids of revolution used to model near-spherical bodies, together with
//! the latitude and radius conversions the geographic vectors rely on.
//!
//! ## Immutability
//!
//! The two radii are fixed at construction. Every derived quantity (mean
//! radius, flattening, volume and so on) is computed once when the spheroid is
//! built and kept for its lifetime. The radii are private, so there is no way
//! to change them afterwards; derived values are never recomputed.
//!
//! ## Examples
//!
//! ```rust
//! use spheroid::spheroid::Spheroid;
//!
//! let earth = Spheroid::new(6378.137, 6356.7523, "km");
//! assert!((earth.mean_radius() - 6371.0088).abs() < 1e-4);
//! assert!((earth.inverse_flattening() - 298.257).abs() < 1e-2);
//! ```

pub mod catalog;

use crate::geometry::{self, AngleUnit};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::ops::Deref;

pub use catalog::Body;

/// Serialized form of a spheroid: the radii and the unit label only
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SpheroidRecord {
    equatorial_radius: f64,
    polar_radius: f64,
    #[serde(default = "default_unit_label")]
    unit: String,
}

fn default_unit_label() -> String {
    "km".to_string()
}

/// Ellipsoid of revolution with an equatorial and a polar radius
///
/// `unit_label` documents the length unit of the radii (and therefore of
/// every distance computed against this spheroid). It takes no part in any
/// calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SpheroidRecord", into = "SpheroidRecord")]
pub struct Spheroid {
    equatorial_radius: f64,
    polar_radius: f64,
    unit_label: String,

    mean_radius: f64,
    flattening: f64,
    inverse_flattening: f64,
    flattening_complement_squared: f64,
    volume: f64,
}

impl Spheroid {
    /// Creates a spheroid from its semi-major (equatorial) and semi-minor
    /// (polar) radii
    pub fn new(equatorial_radius: f64, polar_radius: f64, unit_label: impl Into<String>) -> Self {
        let mean_radius = (polar_radius + 2.0 * equatorial_radius) / 3.0;
        let flattening = (equatorial_radius - polar_radius) / equatorial_radius;

        Spheroid {
            equatorial_radius,
            polar_radius,
            unit_label: unit_label.into(),
            mean_radius,
            flattening,
            inverse_flattening: 1.0 / flattening,
            flattening_complement_squared: (1.0 - flattening) * (1.0 - flattening),
            volume: (4.0 / 3.0) * (PI * polar_radius * equatorial_radius * equatorial_radius),
        }
    }

    /// Equatorial (semi-major) radius
    pub fn equatorial_radius(&self) -> f64 {
        self.equatorial_radius
    }

    /// Polar (semi-minor) radius
    pub fn polar_radius(&self) -> f64 {
        self.polar_radius
    }

    /// Length unit the radii are expressed in
    pub fn unit_label(&self) -> &str {
        &self.unit_label
    }

    /// Arithmetic mean of the three semi-axes, `(p + 2e) / 3`
    pub fn mean_radius(&self) -> f64 {
        self.mean_radius
    }

    /// `(e − p) / e`
    pub fn flattening(&self) -> f64 {
        self.flattening
    }

    /// `1 / flattening`; infinite for a sphere
    pub fn inverse_flattening(&self) -> f64 {
        self.inverse_flattening
    }

    /// `(1 − flattening)²`, the factor relating geodetic and geocentric
    /// latitude tangents
    pub fn flattening_complement_squared(&self) -> f64 {
        self.flattening_complement_squared
    }

    /// `(4/3)·π·p·e²`
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Distance from the centre to the surface at a geodetic latitude
    ///
    /// # Arguments
    ///
    /// * `lat` - Geodetic latitude in radians
    ///
    /// # Mathematical Formula
    ///
    /// `R(φ) = sqrt(((e²cos φ)² + (p²sin φ)²) / ((e cos φ)² + (p sin φ)²))`
    pub fn radius_at_geodetic_latitude(&self, lat: f64) -> f64 {
        let e = self.equatorial_radius;
        let p = self.polar_radius;
        let (sin_lat, cos_lat) = lat.sin_cos();

        let numerator = (e * e * cos_lat).powi(2) + (p * p * sin_lat).powi(2);
        let denominator = (e * cos_lat).powi(2) + (p * sin_lat).powi(2);

        (numerator / denominator).sqrt()
    }

    /// Converts a geodetic latitude to the geocentric latitude, both in radians
    ///
    /// `ψ = atan(tan φ · (1 − f)²)`
    pub fn geodetic_to_geocentric_latitude(&self, lat: f64) -> f64 {
        (lat.tan() * self.flattening_complement_squared).atan()
    }

    /// Haversine distance between two `(lat, lng)` points on the sphere of
    /// this spheroid's mean radius
    pub fn haversine_distance(&self, point_1: (f64, f64), point_2: (f64, f64), unit: AngleUnit) -> f64 {
        geometry::haversine_distance(point_1, point_2, self.mean_radius, unit)
    }
}

impl From<SpheroidRecord> for Spheroid {
    fn from(record: SpheroidRecord) -> Self {
        Spheroid::new(record.equatorial_radius, record.polar_radius, record.unit)
    }
}

impl From<Spheroid> for SpheroidRecord {
    fn from(spheroid: Spheroid) -> Self {
        SpheroidRecord {
            equatorial_radius: spheroid.equatorial_radius,
            polar_radius: spheroid.polar_radius,
            unit: spheroid.unit_label,
        }
    }
}

/// Spheroid whose equatorial and polar radii are equal
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    spheroid: Spheroid,
    diameter: f64,
    circumference: f64,
    surface_area: f64,
}

impl Sphere {
    /// Creates a sphere of the given radius
    pub fn new(radius: f64, unit_label: impl Into<String>) -> Self {
        Sphere {
            spheroid: Spheroid::new(radius, radius, unit_label),
            diameter: radius * 2.0,
            circumference: 2.0 * PI * radius,
            surface_area: 4.0 * (PI * radius * radius),
        }
    }

    /// Radius of the sphere
    pub fn radius(&self) -> f64 {
        self.spheroid.equatorial_radius
    }

    /// Twice the radius
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Length of a great circle, `2πr`
    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    /// `4πr²`
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// The underlying spheroid, for binding geographic vectors
    pub fn as_spheroid(&self) -> &Spheroid {
        &self.spheroid
    }
}

impl Deref for Sphere {
    type Target = Spheroid;

    fn deref(&self) -> &Spheroid {
        &self.spheroid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::deg_to_rad;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn earth() -> Spheroid {
        Spheroid::new(6378.1370, 6356.7523, "km")
    }

    #[test]
    fn test_derived_quantities() {
        let s = earth();

        assert_abs_diff_eq!(s.mean_radius(), 6371.008766666667, epsilon = 1e-9);
        assert_abs_diff_eq!(s.flattening(), (6378.1370 - 6356.7523) / 6378.1370, epsilon = 1e-15);
        assert_relative_eq!(s.inverse_flattening(), 1.0 / s.flattening());
        assert_relative_eq!(
            s.flattening_complement_squared(),
            (1.0 - s.flattening()).powi(2)
        );
        assert_relative_eq!(
            s.volume(),
            4.0 / 3.0 * PI * 6356.7523 * 6378.1370 * 6378.1370,
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_unit_label_is_documentary() {
        let km = Spheroid::new(10.0, 9.0, "km");
        let furlongs = Spheroid::new(10.0, 9.0, "furlong");

        assert_eq!(furlongs.unit_label(), "furlong");
        assert_eq!(km.mean_radius(), furlongs.mean_radius());
        assert_eq!(
            km.radius_at_geodetic_latitude(0.3),
            furlongs.radius_at_geodetic_latitude(0.3)
        );
    }

    #[test]
    fn test_radius_at_equator_and_pole() {
        let s = earth();
        assert_abs_diff_eq!(s.radius_at_geodetic_latitude(0.0), 6378.1370, epsilon = 1e-9);
        assert_abs_diff_eq!(
            s.radius_at_geodetic_latitude(deg_to_rad(90.0)),
            6356.7523,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            s.radius_at_geodetic_latitude(deg_to_rad(-90.0)),
            6356.7523,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_radius_decreases_towards_pole() {
        let s = earth();
        let mut previous = s.radius_at_geodetic_latitude(0.0);
        for deg in (5..=90).step_by(5) {
            let r = s.radius_at_geodetic_latitude(deg_to_rad(deg as f64));
            assert!(r < previous, "radius did not shrink at {} degrees", deg);
            previous = r;
        }
    }

    #[test]
    fn test_geocentric_latitude() {
        let s = earth();
        assert_eq!(s.geodetic_to_geocentric_latitude(0.0), 0.0);

        // Geocentric latitude sits slightly closer to the equator
        let lat = deg_to_rad(45.0);
        let geocentric = s.geodetic_to_geocentric_latitude(lat);
        assert!(geocentric < lat);
        assert_abs_diff_eq!(lat - geocentric, deg_to_rad(0.1924), epsilon = 1e-5);
    }

    #[test]
    fn test_sphere_has_no_latitude_correction() {
        let sphere = Sphere::new(1.0, "unit");
        let lat = deg_to_rad(33.0);
        assert_abs_diff_eq!(sphere.geodetic_to_geocentric_latitude(lat), lat, epsilon = 1e-15);
        assert_eq!(sphere.radius_at_geodetic_latitude(lat), 1.0);
        assert!(sphere.inverse_flattening().is_infinite());
    }

    #[test]
    fn test_sphere_measurements() {
        let sphere = Sphere::new(2.0, "m");
        assert_eq!(sphere.radius(), 2.0);
        assert_eq!(sphere.diameter(), 4.0);
        assert_abs_diff_eq!(sphere.circumference(), 4.0 * PI);
        assert_abs_diff_eq!(sphere.surface_area(), 16.0 * PI);
        assert_abs_diff_eq!(sphere.volume(), 32.0 / 3.0 * PI, epsilon = 1e-12);
        assert_eq!(sphere.mean_radius(), 2.0);
        assert_eq!(sphere.as_spheroid().polar_radius(), 2.0);
    }

    #[test]
    fn test_spheroid_haversine_uses_mean_radius() {
        let s = earth();
        let d = s.haversine_distance((0.0, 0.0), (0.0, 10.0), AngleUnit::Degrees);
        assert_abs_diff_eq!(d, s.mean_radius() * deg_to_rad(10.0), epsilon = 1e-9);
    }

    #[test]
    fn test_serde_round_trip_recomputes_derived_values() {
        let json = r#"{"equatorial_radius": 3396.2, "polar_radius": 3376.2}"#;
        let mars: Spheroid = serde_json::from_str(json).expect("valid spheroid json");

        assert_eq!(mars.unit_label(), "km");
        assert_abs_diff_eq!(mars.mean_radius(), (3376.2 + 2.0 * 3396.2) / 3.0);

        let encoded = serde_json::to_string(&mars).expect("serializable");
        let decoded: Spheroid = serde_json::from_str(&encoded).expect("round trip");
        assert_eq!(decoded, mars);
    }
}
