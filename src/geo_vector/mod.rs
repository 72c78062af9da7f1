//! # Geographic Vector Module
//!
//! A [`GeoVector`] is a cartesian [`Vector`] tied to a reference [`Spheroid`]:
//! it is built from latitude/longitude, measures great-circle distances
//! against the spheroid, and finds distances to great circles, arcs and
//! polylines drawn on its surface.
//!
//! ## Spheroid Binding
//!
//! The spheroid is borrowed, never owned, so any number of vectors can share
//! one instance (usually a catalog entry). It is passed explicitly to every
//! factory; an unbound vector (`None`) works on the unit sphere and reports
//! angular distances in radians. [`EarthVector`] builds vectors permanently
//! bound to the Earth spheroid.
//!
//! ## Cached Coordinates
//!
//! Latitude, longitude and geodetic radius are derived from the components on
//! first access and kept for the life of the value. Components never change,
//! so the caches never need invalidating.
//!
//! ## Examples
//!
//! ```rust
//! use spheroid::geo_vector::{EarthVector, GeoOptions};
//!
//! let options = GeoOptions::default();
//! let london = EarthVector::from_geographic(51.454007, -0.263672, &options);
//! let glasgow = EarthVector::from_geographic(55.862982, -4.251709, &options);
//!
//! let km = london.great_circle_distance(&glasgow, &options);
//! assert!((km - 557.42295).abs() < 1e-4);
//! ```

use crate::constants::{HALF_PI, NO_SEGMENT_DISTANCE};
use crate::errors::{GeodesyError, Result};
use crate::geometry::AngleUnit;
use crate::spheroid::{catalog, Spheroid};
use crate::vector::Vector;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::ops::Deref;
use std::sync::OnceLock;

/// Options shared by the geographic factories and distance queries
///
/// The defaults read coordinates in degrees as geodetic latitudes, scale
/// vectors to the spheroid surface, and scale angular distances by the
/// spheroid's mean radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeoOptions {
    /// Unit of latitude/longitude inputs
    pub unit: AngleUnit,
    /// Treat input latitudes as already geocentric
    pub geocentric: bool,
    /// Build unscaled unit vectors, and report distances as angles
    pub unit_vector: bool,
    /// Scale distances by the mean of the two points' geodetic radii
    /// instead of the spheroid's mean radius
    pub use_mean_geodetic_radius: bool,
}

impl GeoOptions {
    /// Sets the unit of latitude/longitude inputs
    pub fn with_unit(mut self, unit: AngleUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Treats input latitudes as geocentric
    pub fn with_geocentric(mut self, geocentric: bool) -> Self {
        self.geocentric = geocentric;
        self
    }

    /// Builds unit vectors and reports angular distances
    pub fn with_unit_vector(mut self, unit_vector: bool) -> Self {
        self.unit_vector = unit_vector;
        self
    }

    /// Scales distances by the two points' mean geodetic radius
    pub fn with_mean_geodetic_radius(mut self, use_mean_geodetic_radius: bool) -> Self {
        self.use_mean_geodetic_radius = use_mean_geodetic_radius;
        self
    }
}

/// Polyline vertices for [`GeoVector::great_circle_distance_from_polyline`]
#[derive(Debug, Clone, Copy)]
pub enum Polyline<'a> {
    /// Raw `[x, y, z]` triples
    Cartesian(&'a [[f64; 3]]),
    /// `(latitude, longitude)` pairs, converted with [`GeoVector::from_geographic`]
    Geographic(&'a [(f64, f64)]),
}

/// Cartesian vector bound to an optional reference spheroid
#[derive(Debug, Clone)]
pub struct GeoVector<'s> {
    vector: Vector,
    spheroid: Option<&'s Spheroid>,

    latitude: OnceLock<f64>,
    longitude: OnceLock<f64>,
    geodetic_radius: OnceLock<f64>,
}

impl<'s> GeoVector<'s> {
    /// Creates a geographic vector from cartesian components
    pub fn new(x: f64, y: f64, z: f64, spheroid: Option<&'s Spheroid>) -> Self {
        Self::from_vector(Vector::new(x, y, z), spheroid)
    }

    /// Wraps an existing vector
    pub fn from_vector(vector: Vector, spheroid: Option<&'s Spheroid>) -> Self {
        GeoVector {
            vector,
            spheroid,
            latitude: OnceLock::new(),
            longitude: OnceLock::new(),
            geodetic_radius: OnceLock::new(),
        }
    }

    /// Creates a vector for a geographic position
    ///
    /// The latitude is geodetic unless `options.geocentric` is set; with no
    /// spheroid available it is used as-is. The point on the unit sphere at
    /// the geocentric latitude is returned directly when
    /// `options.unit_vector` is set, otherwise it is scaled to the spheroid
    /// radius at the geodetic latitude.
    ///
    /// # Errors
    ///
    /// [`GeodesyError::MissingSpheroid`] when a scaled vector is requested
    /// and `spheroid` is `None`.
    pub fn from_geographic(
        lat: f64,
        lng: f64,
        spheroid: Option<&'s Spheroid>,
        options: &GeoOptions,
    ) -> Result<Self> {
        match spheroid {
            Some(spheroid) => Ok(Self::from_geographic_on(lat, lng, spheroid, options)),
            None if options.unit_vector => {
                let lat = options.unit.to_radians(lat);
                let lng = options.unit.to_radians(lng);
                Ok(Self::from_vector(unit_sphere_point(lat, lng), None))
            }
            None => Err(GeodesyError::MissingSpheroid),
        }
    }

    /// Creates a vector for a geographic position on a known spheroid
    ///
    /// Same conversion as [`from_geographic`](GeoVector::from_geographic),
    /// which cannot fail once the spheroid is present.
    pub fn from_geographic_on(
        lat: f64,
        lng: f64,
        spheroid: &'s Spheroid,
        options: &GeoOptions,
    ) -> Self {
        let lat = options.unit.to_radians(lat);
        let lng = options.unit.to_radians(lng);

        let geocentric_latitude = if options.geocentric {
            lat
        } else {
            spheroid.geodetic_to_geocentric_latitude(lat)
        };

        let unit_vector = unit_sphere_point(geocentric_latitude, lng);

        if options.unit_vector {
            Self::from_vector(unit_vector, Some(spheroid))
        } else {
            let radius = spheroid.radius_at_geodetic_latitude(lat);
            Self::from_vector(unit_vector.scale(radius), Some(spheroid))
        }
    }

    /// One of the two points where the great circles through `(v1, v2)` and
    /// `(v3, v4)` cross
    ///
    /// The other is its [`antipode`](GeoVector::antipode). Which one is
    /// returned depends only on operand order. The result is scaled to the
    /// spheroid's mean radius when one is given, otherwise it is a unit
    /// vector.
    pub fn from_great_circle_intersection(
        v1: &Vector,
        v2: &Vector,
        v3: &Vector,
        v4: &Vector,
        spheroid: Option<&'s Spheroid>,
    ) -> Self {
        let normal_1 = v1.cross_normal(v2);
        let normal_2 = v3.cross_normal(v4);

        let unit_vector = normal_1.cross_normal(&normal_2);

        match spheroid {
            Some(s) => Self::from_vector(unit_vector.scale(s.mean_radius()), spheroid),
            None => Self::from_vector(unit_vector, None),
        }
    }

    /// The bound spheroid, if any
    pub fn spheroid(&self) -> Option<&'s Spheroid> {
        self.spheroid
    }

    /// Same components bound to another spheroid
    pub fn with_spheroid<'t>(&self, spheroid: Option<&'t Spheroid>) -> GeoVector<'t> {
        GeoVector::from_vector(self.vector, spheroid)
    }

    /// The underlying cartesian vector
    pub fn as_vector(&self) -> &Vector {
        &self.vector
    }

    /// Latitude in radians
    ///
    /// Derived as `atan2(z, x)`, folded back by `π − lat` when it exceeds
    /// π/2, with negative zero reported as zero. This measures the angle in
    /// the x/z plane, so it equals the geocentric latitude only on the
    /// prime (or anti-) meridian; elsewhere it drifts towards ±π/2.
    pub fn latitude(&self) -> f64 {
        *self.latitude.get_or_init(|| {
            let mut lat = self.vector.z.atan2(self.vector.x);

            if lat > HALF_PI {
                lat = PI - lat;
            }
            if lat == 0.0 {
                lat = lat.abs();
            }

            lat
        })
    }

    /// Longitude in radians, `atan2(y, x)`
    pub fn longitude(&self) -> f64 {
        *self
            .longitude
            .get_or_init(|| self.vector.y.atan2(self.vector.x))
    }

    /// Latitude in the requested unit
    pub fn latitude_in(&self, unit: AngleUnit) -> f64 {
        unit.from_radians(self.latitude())
    }

    /// Longitude in the requested unit
    pub fn longitude_in(&self, unit: AngleUnit) -> f64 {
        unit.from_radians(self.longitude())
    }

    /// `(latitude, longitude)` in the requested unit
    pub fn to_geographic(&self, unit: AngleUnit) -> (f64, f64) {
        (self.latitude_in(unit), self.longitude_in(unit))
    }

    /// Spheroid radius at this vector's latitude
    ///
    /// # Errors
    ///
    /// [`GeodesyError::MissingSpheroid`] when no spheroid is bound.
    pub fn geodetic_radius(&self) -> Result<f64> {
        if let Some(radius) = self.geodetic_radius.get() {
            return Ok(*radius);
        }

        let spheroid = self.spheroid.ok_or(GeodesyError::MissingSpheroid)?;
        Ok(*self
            .geodetic_radius
            .get_or_init(|| spheroid.radius_at_geodetic_latitude(self.latitude())))
    }

    /// Mean of this vector's and `other`'s geodetic radii
    pub fn mean_geodetic_radius(&self, other: &GeoVector<'_>) -> Result<f64> {
        let spheroid = self.spheroid.ok_or(GeodesyError::MissingSpheroid)?;
        Ok((self.geodetic_radius()? + other.geodetic_radius_or(spheroid)) / 2.0)
    }

    fn geodetic_radius_or(&self, fallback: &Spheroid) -> f64 {
        self.geodetic_radius()
            .unwrap_or_else(|_| fallback.radius_at_geodetic_latitude(self.latitude()))
    }

    /// The diametrically opposite point, bound to the same spheroid
    pub fn antipode(&self) -> GeoVector<'s> {
        GeoVector::from_vector(self.vector.scale(-1.0), self.spheroid)
    }

    /// Great-circle distance to `other`
    ///
    /// The angle between the two vectors, scaled by the spheroid's mean
    /// radius (or by the mean geodetic radius of the two points when
    /// `options.use_mean_geodetic_radius` is set). Unbound vectors and
    /// `options.unit_vector` give the angle in radians.
    pub fn great_circle_distance(&self, other: &GeoVector<'_>, options: &GeoOptions) -> f64 {
        let angular_distance = self.vector.angle(&other.vector);

        match self.spheroid {
            Some(spheroid) if !options.unit_vector => {
                if options.use_mean_geodetic_radius {
                    let radius = (self.geodetic_radius_or(spheroid)
                        + other.geodetic_radius_or(spheroid))
                        / 2.0;
                    angular_distance * radius
                } else {
                    angular_distance * spheroid.mean_radius()
                }
            }
            _ => angular_distance,
        }
    }

    /// Nearest point on the great circle through `point_a` and `point_b`,
    /// as one of two antipodal candidates
    fn perpendicular_foot(&self, point_a: &Vector, point_b: &Vector) -> GeoVector<'s> {
        let mut normal_to_line = point_a.cross_normal(point_b);
        if let Some(spheroid) = self.spheroid {
            normal_to_line = normal_to_line.scale(spheroid.mean_radius());
        }

        // The great circle through self and the normal meets the line at a right angle
        GeoVector::from_great_circle_intersection(
            point_a,
            point_b,
            &self.vector,
            &normal_to_line,
            self.spheroid,
        )
    }

    /// Shortest great-circle distance to the full great circle through
    /// `point_a` and `point_b`
    pub fn great_circle_distance_from_great_circle(
        &self,
        point_a: &GeoVector<'_>,
        point_b: &GeoVector<'_>,
    ) -> f64 {
        let options = GeoOptions::default();
        let intersection = self.perpendicular_foot(point_a, point_b);

        self.great_circle_distance(&intersection, &options)
            .min(self.great_circle_distance(&intersection.antipode(), &options))
    }

    /// Shortest great-circle distance to the arc between `point_a` and `point_b`
    ///
    /// The perpendicular foot is tested for containment first, then its
    /// antipode; the distance to the first one on the arc is returned. A foot
    /// counts as on the arc when neither end point is further from it than
    /// the arc length. With neither on the arc the distance to the nearer end
    /// point is returned.
    ///
    /// For arcs of 120 degrees or more both feet can pass the containment
    /// test, and the result can then exceed the nearer end point distance.
    pub fn great_circle_distance_from_arc(
        &self,
        point_a: &GeoVector<'_>,
        point_b: &GeoVector<'_>,
        options: &GeoOptions,
    ) -> f64 {
        let intersection = self.perpendicular_foot(point_a, point_b);
        let antipode = intersection.antipode();
        let arc_length = point_a.great_circle_distance(point_b, options);

        for foot in [&intersection, &antipode] {
            if arc_length >= foot.great_circle_distance(point_a, options)
                && arc_length >= foot.great_circle_distance(point_b, options)
            {
                return self.great_circle_distance(foot, options);
            }
        }

        self.great_circle_distance(point_a, options)
            .min(self.great_circle_distance(point_b, options))
    }

    /// Shortest great-circle distance to any arc of a polyline
    ///
    /// Geographic vertices are converted with this vector's spheroid and
    /// `options`. Vertices repeating the previous one are skipped. Returns
    /// [`NO_SEGMENT_DISTANCE`] when there are fewer than two distinct
    /// vertices.
    ///
    /// # Errors
    ///
    /// [`GeodesyError::MissingSpheroid`] when geographic vertices need scaling
    /// and this vector is unbound.
    pub fn great_circle_distance_from_polyline(
        &self,
        polyline: Polyline<'_>,
        options: &GeoOptions,
    ) -> Result<f64> {
        match polyline {
            Polyline::Cartesian(vertices) => self.scan_polyline(vertices, options, |&[x, y, z]| {
                Ok(GeoVector::new(x, y, z, self.spheroid))
            }),
            Polyline::Geographic(vertices) => {
                self.scan_polyline(vertices, options, |&(lat, lng)| {
                    GeoVector::from_geographic(lat, lng, self.spheroid, options)
                })
            }
        }
    }

    fn scan_polyline<V, F>(&self, vertices: &[V], options: &GeoOptions, build: F) -> Result<f64>
    where
        V: PartialEq,
        F: Fn(&V) -> Result<GeoVector<'s>>,
    {
        let Some((first, rest)) = vertices.split_first() else {
            log::debug!("Empty polyline, no arcs to measure");
            return Ok(NO_SEGMENT_DISTANCE);
        };

        let mut last_vertex = first;
        let mut last_vector = build(first)?;
        let mut minimum_distance = NO_SEGMENT_DISTANCE;

        for (index, vertex) in rest.iter().enumerate() {
            if vertex == last_vertex {
                continue;
            }

            let end_vector = build(vertex)?;
            let arc_distance = self.great_circle_distance_from_arc(&last_vector, &end_vector, options);

            if arc_distance < minimum_distance {
                log::trace!("Arc ending at vertex {} is nearest so far: {}", index + 1, arc_distance);
                minimum_distance = arc_distance;
            }

            last_vertex = vertex;
            last_vector = end_vector;
        }

        if minimum_distance == NO_SEGMENT_DISTANCE {
            log::debug!("Polyline of {} vertices has no distinct arc", vertices.len());
        }

        Ok(minimum_distance)
    }

    /// True when this point is strictly closer to both `point_a` and
    /// `point_b` than they are to each other
    pub fn within_both_radii(&self, point_a: &GeoVector<'_>, point_b: &GeoVector<'_>) -> bool {
        let options = GeoOptions::default();
        let arc_length = point_a.great_circle_distance(point_b, &options);

        self.great_circle_distance(point_a, &options) < arc_length
            && self.great_circle_distance(point_b, &options) < arc_length
    }
}

/// Point on the unit sphere at a geocentric latitude and a longitude, in radians
fn unit_sphere_point(geocentric_latitude: f64, lng: f64) -> Vector {
    // Projection of the point on the equatorial plane
    let projection = geocentric_latitude.cos();

    Vector::new(
        lng.cos() * projection,
        lng.sin() * projection,
        geocentric_latitude.sin(),
    )
}

impl Deref for GeoVector<'_> {
    type Target = Vector;

    fn deref(&self) -> &Vector {
        &self.vector
    }
}

impl PartialEq for GeoVector<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.vector == other.vector
    }
}

impl From<GeoVector<'_>> for Vector {
    fn from(geo: GeoVector<'_>) -> Self {
        geo.vector
    }
}

impl fmt::Display for GeoVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.vector, f)
    }
}

/// Factories for geographic vectors bound to the Earth spheroid
pub struct EarthVector;

impl EarthVector {
    /// Creates an Earth-bound vector from cartesian components in kilometers
    pub fn new(x: f64, y: f64, z: f64) -> GeoVector<'static> {
        GeoVector::new(x, y, z, Some(catalog::earth()))
    }

    /// Creates an Earth-bound vector for a geographic position
    pub fn from_geographic(lat: f64, lng: f64, options: &GeoOptions) -> GeoVector<'static> {
        GeoVector::from_geographic_on(lat, lng, catalog::earth(), options)
    }

    /// Great-circle intersection scaled to Earth's mean radius
    pub fn from_great_circle_intersection(
        v1: &Vector,
        v2: &Vector,
        v3: &Vector,
        v4: &Vector,
    ) -> GeoVector<'static> {
        GeoVector::from_great_circle_intersection(v1, v2, v3, v4, Some(catalog::earth()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{deg_to_rad, haversine_distance};
    use crate::spheroid::Sphere;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn unit(lat: f64, lng: f64) -> GeoVector<'static> {
        let options = GeoOptions::default().with_unit_vector(true);
        GeoVector::from_geographic(lat, lng, None, &options).expect("unit vectors need no spheroid")
    }

    #[test]
    fn test_great_circle_intersection() {
        let p1 = unit(0.0, 0.0);
        let p2 = unit(0.0, 10.0);
        let p3 = unit(20.0, 10.0);
        let p4 = unit(-20.0, 10.0);

        let intersection = GeoVector::from_great_circle_intersection(&p1, &p2, &p3, &p4, None);
        let (lat, lng) = intersection.to_geographic(AngleUnit::Degrees);
        assert_abs_diff_eq!(lat, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lng, -170.0, epsilon = 1e-3);
        assert_abs_diff_eq!(intersection.magnitude(), 1.0, epsilon = 1e-15);

        let (lat, lng) = intersection.antipode().to_geographic(AngleUnit::Degrees);
        assert_abs_diff_eq!(lat, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(lng, 10.0, epsilon = 1e-3);
    }

    #[test]
    fn test_intersection_scaled_by_mean_radius() {
        let earth = catalog::earth();
        let p1 = unit(0.0, 0.0);
        let p2 = unit(0.0, 10.0);
        let p3 = unit(20.0, 10.0);
        let p4 = unit(-20.0, 10.0);

        let intersection = EarthVector::from_great_circle_intersection(&p1, &p2, &p3, &p4);
        assert_abs_diff_eq!(intersection.magnitude(), earth.mean_radius(), epsilon = 1e-9);
        assert!(std::ptr::eq(intersection.spheroid().expect("bound"), earth));
    }

    #[test]
    fn test_intersection_order_picks_the_other_point() {
        let p1 = unit(0.0, 0.0);
        let p2 = unit(0.0, 10.0);
        let p3 = unit(20.0, 10.0);
        let p4 = unit(-20.0, 10.0);

        let forward = GeoVector::from_great_circle_intersection(&p1, &p2, &p3, &p4, None);
        let swapped = GeoVector::from_great_circle_intersection(&p3, &p4, &p1, &p2, None);
        assert_eq!(swapped, forward.antipode());
    }

    #[test]
    fn test_missing_spheroid() {
        let result = GeoVector::from_geographic(10.0, 10.0, None, &GeoOptions::default());
        assert_eq!(result, Err(GeodesyError::MissingSpheroid));

        assert_eq!(unit(10.0, 10.0).geodetic_radius(), Err(GeodesyError::MissingSpheroid));
    }

    #[test]
    fn test_scaled_vector_sits_on_spheroid_surface() {
        let earth = catalog::earth();
        let options = GeoOptions::default();

        let equator = GeoVector::from_geographic(0.0, 45.0, Some(earth), &options).expect("bound");
        assert_abs_diff_eq!(equator.magnitude(), earth.equatorial_radius(), epsilon = 1e-9);

        let pole = GeoVector::from_geographic(90.0, 0.0, Some(earth), &options).expect("bound");
        assert_abs_diff_eq!(pole.magnitude(), earth.polar_radius(), epsilon = 1e-9);
        assert_abs_diff_eq!(pole.z, earth.polar_radius(), epsilon = 1e-9);

        let mid = GeoVector::from_geographic(45.0, 0.0, Some(earth), &options).expect("bound");
        assert_abs_diff_eq!(
            mid.magnitude(),
            earth.radius_at_geodetic_latitude(deg_to_rad(45.0)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_geodetic_latitude_is_converted_to_geocentric() {
        let earth = catalog::earth();
        let geodetic = GeoOptions::default().with_unit_vector(true);
        let geocentric = geodetic.with_geocentric(true);

        let converted = GeoVector::from_geographic(45.0, 0.0, Some(earth), &geodetic).expect("unit");
        let as_is = GeoVector::from_geographic(45.0, 0.0, Some(earth), &geocentric).expect("unit");

        assert_abs_diff_eq!(as_is.z, deg_to_rad(45.0).sin(), epsilon = 1e-15);
        assert_abs_diff_eq!(
            converted.latitude(),
            earth.geodetic_to_geocentric_latitude(deg_to_rad(45.0)),
            epsilon = 1e-15
        );
        assert!(converted.latitude() < as_is.latitude());
    }

    #[test]
    fn test_radian_inputs() {
        let options = GeoOptions::default()
            .with_unit(AngleUnit::Radians)
            .with_unit_vector(true);
        let v = GeoVector::from_geographic(0.0, PI / 2.0, None, &options).expect("unit");

        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-15);
        assert_eq!(v.z, 0.0);
    }

    #[rstest]
    #[case(0.0)]
    #[case(12.5)]
    #[case(-33.9)]
    #[case(51.454007)]
    #[case(89.5)]
    #[case(-89.5)]
    fn test_latitude_round_trip_on_prime_meridian(#[case] lat: f64) {
        let v = unit(lat, 0.0);
        assert_abs_diff_eq!(v.latitude_in(AngleUnit::Degrees), lat, epsilon = 1e-9);
        assert_abs_diff_eq!(v.longitude_in(AngleUnit::Degrees), 0.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(10.0, -4.251709)]
    #[case(-45.0, 120.0)]
    #[case(60.0, -179.0)]
    #[case(-75.0, 179.5)]
    fn test_longitude_round_trip(#[case] lat: f64, #[case] lng: f64) {
        assert_abs_diff_eq!(unit(lat, lng).longitude_in(AngleUnit::Degrees), lng, epsilon = 1e-9);
    }

    #[test]
    fn test_latitude_measures_the_xz_plane() {
        // Away from the prime meridian the x/z-plane angle is not the latitude
        let v = unit(30.0, 90.0);
        assert_abs_diff_eq!(v.latitude_in(AngleUnit::Degrees), 90.0, epsilon = 1e-6);
    }

    #[test]
    fn test_latitude_folds_past_the_pole() {
        let v = GeoVector::new(-1.0, 0.0, 1.0, None);
        assert_abs_diff_eq!(v.latitude(), PI / 4.0, epsilon = 1e-15);
    }

    #[test]
    fn test_latitude_negative_zero_is_reported_positive() {
        let v = GeoVector::new(1.0, 0.0, -0.0, None);
        assert_eq!(v.latitude(), 0.0);
        assert!(v.latitude().is_sign_positive());
    }

    #[test]
    fn test_coordinates_are_cached() {
        let v = unit(20.0, 30.0);
        let lat = v.latitude();
        let lng = v.longitude();

        assert_eq!(v.latitude(), lat);
        assert_eq!(v.longitude(), lng);

        let copy = v.clone();
        assert_eq!(copy.latitude(), lat);
    }

    #[test]
    fn test_geodetic_radius() {
        let earth = catalog::earth();
        let v = EarthVector::from_geographic(0.0, 0.0, &GeoOptions::default());

        assert_abs_diff_eq!(
            v.geodetic_radius().expect("bound"),
            earth.equatorial_radius(),
            epsilon = 1e-9
        );
        assert_eq!(v.geodetic_radius(), v.geodetic_radius());
    }

    #[test]
    fn test_antipode_keeps_binding() {
        let v = EarthVector::new(1.0, -2.0, 3.0);
        let a = v.antipode();
        assert_eq!(*a.as_vector(), Vector::new(-1.0, 2.0, -3.0));
        assert!(a.spheroid().is_some());
        assert_eq!(a.antipode(), v);
    }

    #[test]
    fn test_great_circle_distance_matches_haversine_on_equator() {
        let options = GeoOptions::default();
        let p1 = EarthVector::from_geographic(0.0, 0.0, &options);
        let p2 = EarthVector::from_geographic(0.0, 10.0, &options);

        let vector_estimate = p1.great_circle_distance(&p2, &options);
        let haversine_estimate = haversine_distance(
            (0.0, 0.0),
            (0.0, 10.0),
            catalog::earth().mean_radius(),
            AngleUnit::Degrees,
        );

        assert_abs_diff_eq!(vector_estimate, haversine_estimate, epsilon = 1e-3);
    }

    #[test]
    fn test_great_circle_distance_unscaled_cases() {
        let options = GeoOptions::default();
        let p1 = EarthVector::from_geographic(0.0, 0.0, &options);
        let p2 = EarthVector::from_geographic(0.0, 90.0, &options);

        let angle = p1.great_circle_distance(&p2, &options.with_unit_vector(true));
        assert_abs_diff_eq!(angle, PI / 2.0, epsilon = 1e-12);

        assert_abs_diff_eq!(
            unit(0.0, 0.0).great_circle_distance(&unit(0.0, 90.0), &options),
            PI / 2.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_great_circle_distance_mean_geodetic_radius() {
        let earth = catalog::earth();
        let options = GeoOptions::default();
        let p1 = EarthVector::from_geographic(0.0, 0.0, &options);
        let p2 = EarthVector::from_geographic(0.0, 10.0, &options);

        // On the equator both geodetic radii are the equatorial radius
        let d = p1.great_circle_distance(&p2, &options.with_mean_geodetic_radius(true));
        assert_abs_diff_eq!(
            d,
            deg_to_rad(10.0) * earth.equatorial_radius(),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            p1.mean_geodetic_radius(&p2).expect("bound"),
            earth.equatorial_radius(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_distance_from_great_circle() {
        let p = unit(10.0, 5.0);
        let d = p.great_circle_distance_from_great_circle(&unit(0.0, 0.0), &unit(0.0, 10.0));
        assert_abs_diff_eq!(d, deg_to_rad(10.0), epsilon = 1e-12);

        // The great circle is unbounded, so longitude beyond the points does not matter
        let far = unit(10.0, 120.0);
        let d = far.great_circle_distance_from_great_circle(&unit(0.0, 0.0), &unit(0.0, 10.0));
        assert_abs_diff_eq!(d, deg_to_rad(10.0), epsilon = 1e-12);
    }

    #[test]
    fn test_distance_from_arc_inside_and_outside() {
        let a = unit(0.0, 0.0);
        let b = unit(0.0, 10.0);
        let options = GeoOptions::default();

        let inside = unit(10.0, 5.0);
        assert_abs_diff_eq!(
            inside.great_circle_distance_from_arc(&a, &b, &options),
            inside.great_circle_distance_from_great_circle(&a, &b),
            epsilon = 1e-12
        );

        let outside = unit(10.0, 20.0);
        let expected = outside.great_circle_distance(&b, &options);
        assert_abs_diff_eq!(
            outside.great_circle_distance_from_arc(&a, &b, &options),
            expected,
            epsilon = 1e-15
        );
        assert!(expected > outside.great_circle_distance_from_great_circle(&a, &b));

        let before = unit(-10.0, -20.0);
        assert_abs_diff_eq!(
            before.great_circle_distance_from_arc(&a, &b, &options),
            before.great_circle_distance(&a, &options),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_long_arc_falls_back_to_the_antipodal_foot() {
        // The foot near p lies beyond b, its antipode lies on the arc
        let a = unit(0.0, 0.0);
        let b = unit(0.0, 170.0);
        let p = unit(10.0, -175.0);
        let options = GeoOptions::default();

        let d = p.great_circle_distance_from_arc(&a, &b, &options);
        assert_abs_diff_eq!(d, deg_to_rad(170.0), epsilon = 1e-9);
        assert!(d > p.great_circle_distance(&b, &options));
    }

    #[test]
    fn test_long_arc_accepts_a_foot_past_the_end() {
        // Both feet are within the arc length of each end point
        let a = unit(0.0, 0.0);
        let b = unit(0.0, 150.0);
        let p = unit(10.0, -105.0);
        let options = GeoOptions::default();

        let d = p.great_circle_distance_from_arc(&a, &b, &options);
        assert_abs_diff_eq!(d, deg_to_rad(10.0), epsilon = 1e-9);
        assert!(d < p.great_circle_distance(&a, &options));
    }

    #[test]
    fn test_distance_from_arc_on_a_sphere() {
        let moon = Sphere::new(1737.4, "km");
        let options = GeoOptions::default();
        let at = |lat, lng| {
            GeoVector::from_geographic(lat, lng, Some(moon.as_spheroid()), &options).expect("bound")
        };

        let d = at(10.0, 5.0).great_circle_distance_from_arc(&at(0.0, 0.0), &at(0.0, 10.0), &options);
        assert_abs_diff_eq!(d, deg_to_rad(10.0) * 1737.4, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_from_geographic_polyline() {
        let options = GeoOptions::default().with_unit_vector(true);
        let vertices = [(0.0, 0.0), (0.0, 10.0), (0.0, 10.0), (10.0, 10.0)];
        let p = unit(5.0, 15.0);

        let expected = p
            .great_circle_distance_from_arc(&unit(0.0, 0.0), &unit(0.0, 10.0), &options)
            .min(p.great_circle_distance_from_arc(&unit(0.0, 10.0), &unit(10.0, 10.0), &options));

        let d = p
            .great_circle_distance_from_polyline(Polyline::Geographic(&vertices), &options)
            .expect("unit vectors need no spheroid");
        assert_eq!(d, expected);
        assert!(d < deg_to_rad(5.0));
    }

    #[test]
    fn test_distance_from_cartesian_polyline() {
        let options = GeoOptions::default();
        let a = unit(0.0, 0.0);
        let b = unit(0.0, 10.0);
        let vertices = [[a.x, a.y, a.z], [b.x, b.y, b.z]];
        let p = unit(10.0, 5.0);

        let d = p
            .great_circle_distance_from_polyline(Polyline::Cartesian(&vertices), &options)
            .expect("cartesian vertices need no conversion");
        assert_eq!(d, p.great_circle_distance_from_arc(&a, &b, &options));
    }

    #[test]
    fn test_degenerate_polylines_return_sentinel() {
        let options = GeoOptions::default().with_unit_vector(true);
        let p = unit(5.0, 5.0);

        let empty: [(f64, f64); 0] = [];
        assert_eq!(
            p.great_circle_distance_from_polyline(Polyline::Geographic(&empty), &options),
            Ok(NO_SEGMENT_DISTANCE)
        );
        assert_eq!(
            p.great_circle_distance_from_polyline(
                Polyline::Geographic(&[(1.0, 1.0), (1.0, 1.0)]),
                &options
            ),
            Ok(NO_SEGMENT_DISTANCE)
        );
    }

    #[test]
    fn test_polyline_conversion_needs_a_spheroid_when_scaled() {
        let p = unit(5.0, 5.0);
        let result = p.great_circle_distance_from_polyline(
            Polyline::Geographic(&[(0.0, 0.0), (0.0, 10.0)]),
            &GeoOptions::default(),
        );
        assert_eq!(result, Err(GeodesyError::MissingSpheroid));
    }

    #[test]
    fn test_within_both_radii() {
        let a = unit(0.0, 0.0);
        let b = unit(0.0, 10.0);

        assert!(unit(1.0, 5.0).within_both_radii(&a, &b));
        assert!(!unit(0.0, 15.0).within_both_radii(&a, &b));
    }

    #[test]
    fn test_earth_vector_accepts_radians() {
        let deg = EarthVector::from_geographic(30.0, 60.0, &GeoOptions::default());
        let rad = EarthVector::from_geographic(
            deg_to_rad(30.0),
            deg_to_rad(60.0),
            &GeoOptions::default().with_unit(AngleUnit::Radians),
        );
        assert_abs_diff_eq!(deg.x, rad.x, epsilon = 1e-9);
        assert_abs_diff_eq!(deg.y, rad.y, epsilon = 1e-9);
        assert_abs_diff_eq!(deg.z, rad.z, epsilon = 1e-9);
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: GeoOptions =
            serde_json::from_str(r#"{"unit": "radians", "unit_vector": true}"#).expect("valid json");
        assert_eq!(
            options,
            GeoOptions::default()
                .with_unit(AngleUnit::Radians)
                .with_unit_vector(true)
        );
    }
}
