//! # Cartesian Vector Module
//!
//! This module provides the immutable 3D vector value type underlying all of
//! the geodesy in this crate.
//!
//! ## Design Philosophy
//!
//! A `Vector` is a plain value: every operation returns a new instance and
//! nothing is ever mutated in place. Equality is exact component-wise
//! comparison with no tolerance.
//!
//! ## Degenerate Inputs
//!
//! Operations that divide by a length do not guard against zero. Normalizing
//! the zero vector, or measuring distance from a line whose two points
//! coincide, yields IEEE infinities or NaN exactly as the arithmetic produces
//! them.
//!
//! ## Examples
//!
//! ```rust
//! use spheroid::vector::Vector;
//!
//! let x_axis = Vector::new(1.0, 0.0, 0.0);
//! let y_axis = Vector::new(0.0, 1.0, 0.0);
//!
//! assert_eq!(x_axis.cross(&y_axis), Vector::new(0.0, 0.0, 1.0));
//! assert_eq!(Vector::new(3.0, 4.0, 0.0).magnitude(), 5.0);
//! ```

use crate::constants::NO_SEGMENT_DISTANCE;
use crate::geometry::AngleUnit;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-dimensional cartesian vector
///
/// Represents a point or a direction. Components are stored as `f64` and are
/// never normalized or altered after construction.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Vector {
    /// Creates a new vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spheroid::vector::Vector;
    ///
    /// let v = Vector::new(4.0, 5.0, 2.0);
    /// assert_eq!(v.x, 4.0);
    /// assert_eq!(v.y, 5.0);
    /// assert_eq!(v.z, 2.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector { x, y, z }
    }

    /// Creates a vector in the x/y plane, with `z = 0`
    pub fn xy(x: f64, y: f64) -> Self {
        Vector { x, y, z: 0.0 }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Vector::default()
    }

    /// Creates a planar vector from a magnitude and a heading
    ///
    /// # Arguments
    ///
    /// * `magnitude` - Length of the resulting vector
    /// * `angle` - Heading measured from the x-axis towards the y-axis
    /// * `unit` - Unit of `angle`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spheroid::geometry::AngleUnit;
    /// use spheroid::vector::Vector;
    ///
    /// let v = Vector::from_polar(2.0, 30.0, AngleUnit::Degrees);
    /// assert!((v.x - 3f64.sqrt()).abs() < 1e-12);
    /// assert!((v.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_polar(magnitude: f64, angle: f64, unit: AngleUnit) -> Self {
        let angle = unit.to_radians(angle);

        Vector::xy(angle.cos() * magnitude, angle.sin() * magnitude)
    }

    /// Multiplies every component by `scalar`
    ///
    /// The `*` and `/` operators both go through this method; division uses
    /// the reciprocal. Sums and differences are the `+` and `-` operators.
    pub fn scale(&self, scalar: f64) -> Vector {
        Vector::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Calculates the magnitude (length) of the vector
    ///
    /// # Mathematical Formula
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns the unit vector with the same direction
    ///
    /// The zero vector normalizes to NaN components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spheroid::vector::Vector;
    ///
    /// let unit = Vector::new(3.0, 4.0, 0.0).normalize();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// assert!(Vector::zero().normalize().x.is_nan());
    /// ```
    pub fn normalize(&self) -> Vector {
        self.scale(1.0 / self.magnitude())
    }

    /// Heading of the vector in the x/y plane, in radians
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Calculates the dot product with another vector
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector
    ///
    /// The result is perpendicular to both operands and follows the
    /// right-hand rule.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Magnitude of the cross product with another vector
    ///
    /// Same value as `self.cross(other).magnitude()` without building the
    /// intermediate vector.
    pub fn cross_length(&self, other: &Vector) -> f64 {
        let x = self.y * other.z - self.z * other.y;
        let y = self.z * other.x - self.x * other.z;
        let z = self.x * other.y - self.y * other.x;

        (x * x + y * y + z * z).sqrt()
    }

    /// Unit vector normal to the plane of this vector and `other`
    pub fn cross_normal(&self, other: &Vector) -> Vector {
        self.cross(other).normalize()
    }

    /// Angle between this vector and another, in radians
    ///
    /// Computed as `atan2(|a × b|, a · b)`, which stays accurate near 0 and π
    /// where `acos` of the normalized dot product loses precision.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spheroid::vector::Vector;
    /// use std::f64::consts::PI;
    ///
    /// let x_axis = Vector::new(1.0, 0.0, 0.0);
    /// let y_axis = Vector::new(0.0, 1.0, 0.0);
    /// assert!((x_axis.angle(&y_axis) - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angle(&self, other: &Vector) -> f64 {
        other.cross_length(self).atan2(self.dot(other))
    }

    /// True when the dot product is exactly zero
    ///
    /// No tolerance is applied, so vectors that are perpendicular only up to
    /// rounding report `false`.
    pub fn is_orthogonal(&self, other: &Vector) -> bool {
        self.dot(other) == 0.0
    }

    /// True when the cross product is exactly the zero vector
    ///
    /// No tolerance is applied.
    pub fn is_parallel(&self, other: &Vector) -> bool {
        self.cross(other) == Vector::zero()
    }

    /// Euclidean distance between the points represented by two vectors
    pub fn distance(&self, other: &Vector) -> f64 {
        (*other - *self).magnitude()
    }

    /// Perpendicular distance from the infinite line through `point_a` and `point_b`
    ///
    /// `|(b − a) × (self − a)| / |b − a|`
    pub fn distance_from_line(&self, point_a: &Vector, point_b: &Vector) -> f64 {
        let line_vector = *point_b - *point_a;
        let point_vector = *self - *point_a;

        line_vector.cross(&point_vector).magnitude() / line_vector.magnitude()
    }

    /// Distance from the finite segment between `point_a` and `point_b`
    ///
    /// Projects `self − a` onto the line. A projection ratio of 1 or more
    /// measures to `point_b`, 0 or less measures to `point_a`, anything in
    /// between is the perpendicular distance.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spheroid::vector::Vector;
    ///
    /// let start = Vector::xy(0.0, 0.0);
    /// let end = Vector::xy(5.0, 5.0);
    ///
    /// // Beyond the end point the distance is to the end point itself
    /// let d = Vector::xy(6.0, 5.0).distance_from_line_segment(&start, &end);
    /// assert!((d - 1.0).abs() < 1e-12);
    /// ```
    pub fn distance_from_line_segment(&self, point_a: &Vector, point_b: &Vector) -> f64 {
        let line_vector = *point_b - *point_a;
        let point_vector = *self - *point_a;

        let line_length = line_vector.magnitude();
        let projection_ratio = line_vector.dot(&point_vector) / line_length.powi(2);

        if projection_ratio >= 1.0 {
            (*point_b - *self).magnitude()
        } else if projection_ratio <= 0.0 {
            (*point_a - *self).magnitude()
        } else {
            line_vector.cross(&point_vector).magnitude() / line_length
        }
    }

    /// Minimum distance from any segment of a polyline
    ///
    /// Consecutive vertices that repeat the previous vertex exactly are
    /// skipped. Returns [`NO_SEGMENT_DISTANCE`] when the polyline has fewer
    /// than two distinct vertices.
    pub fn distance_from_polyline(&self, polyline: &[Vector]) -> f64 {
        let Some((first, rest)) = polyline.split_first() else {
            log::debug!("Empty polyline, no segments to measure");
            return NO_SEGMENT_DISTANCE;
        };

        let mut last = first;
        let mut minimum_distance = NO_SEGMENT_DISTANCE;

        for vertex in rest {
            if vertex == last {
                continue;
            }

            let segment_distance = self.distance_from_line_segment(last, vertex);
            if segment_distance < minimum_distance {
                minimum_distance = segment_distance;
            }

            last = vertex;
        }

        if minimum_distance == NO_SEGMENT_DISTANCE {
            log::debug!(
                "Polyline of {} vertices has no distinct segment",
                polyline.len()
            );
        }

        minimum_distance
    }

    /// Converts to an nalgebra `Vector3`
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates a vector from an nalgebra `Vector3`
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Vector::new(vec.x, vec.y, vec.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from(c: [f64; 3]) -> Self {
        Vector::new(c[0], c[1], c[2])
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::xy(x, y)
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(vec: Vector3<f64>) -> Self {
        Vector::from_vector3(vec)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl std::ops::Sub for Vector {
    type Output = Vector;

    fn sub(self, other: Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl std::ops::Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, scalar: f64) -> Vector {
        self.scale(scalar)
    }
}

impl std::ops::Div<f64> for Vector {
    type Output = Vector;

    fn div(self, scalar: f64) -> Vector {
        self.scale(1.0 / scalar)
    }
}

impl std::ops::Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.scale(-1.0)
    }
}
