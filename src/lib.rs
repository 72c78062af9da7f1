//! Spheroid: 3D vector algebra and geodesy on reference bodies
//!
//! This crate converts geographic coordinates to cartesian vectors on an
//! ellipsoid of revolution and measures distances between them: cartesian,
//! great-circle, and from great circles, arcs and polylines.
//!
//! # Main Components
//!
//! - `vector`: immutable 3D vector value type
//! - `spheroid`: reference ellipsoids, spheres and the solar system catalog
//! - `geo_vector`: spheroid-bound vectors and great-circle distance queries
//! - `geometry`: unit conversions and the haversine reference formula
//!
//! Everything is a pure function of its inputs. Values are immutable and the
//! catalog is read-only, so they can be shared between threads freely.

pub mod constants;
pub mod errors;
pub mod geo_vector;
pub mod geometry;
pub mod spheroid;
pub mod vector;

// Re-export commonly used types
pub use errors::{GeodesyError, Result};
pub use geo_vector::{EarthVector, GeoOptions, GeoVector, Polyline};
pub use geometry::AngleUnit;
pub use spheroid::{Body, Sphere, Spheroid};
pub use vector::Vector;
