//! Reference spheroids for the major solar system bodies
//!
//! The catalog is built once on first access and is read-only afterwards.
//! Radii are in kilometers.

use super::Spheroid;
use crate::constants::{EARTH_EQUATORIAL_RADIUS_KM, EARTH_POLAR_RADIUS_KM};
use crate::errors::{GeodesyError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// (body, equatorial radius, polar radius) in kilometers
const BODY_RADII: [(Body, f64, f64); 10] = [
    (Body::Mercury, 2439.7, 2439.7),
    (Body::Venus, 6051.8, 6051.8),
    (Body::Earth, EARTH_EQUATORIAL_RADIUS_KM, EARTH_POLAR_RADIUS_KM),
    (Body::Moon, 1738.1, 1736.0),
    (Body::Mars, 3396.2, 3376.2),
    (Body::Jupiter, 71492.0, 66854.0),
    (Body::Saturn, 60268.0, 54364.0),
    (Body::Uranus, 25559.0, 24973.0),
    (Body::Neptune, 24764.0, 24341.0),
    (Body::Pluto, 1195.0, 1195.0),
];

lazy_static! {
    /// Spheroids indexed by `Body` discriminant
    static ref SPHEROIDS: Vec<Spheroid> = BODY_RADII
        .iter()
        .map(|&(_, equatorial, polar)| Spheroid::new(equatorial, polar, "km"))
        .collect();

    /// Map from lowercase body names to bodies
    static ref BODY_NAMES: HashMap<String, Body> = {
        let mut m = HashMap::new();
        for &(body, _, _) in BODY_RADII.iter() {
            m.insert(body.name().to_lowercase(), body);
        }
        m
    };
}

/// Solar system bodies with a reference spheroid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Mercury,
    Venus,
    Earth,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Every cataloged body, in catalog order
    pub const ALL: [Body; 10] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Moon,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }

    /// The body's reference spheroid
    pub fn spheroid(&self) -> &'static Spheroid {
        &SPHEROIDS[*self as usize]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = GeodesyError;

    fn from_str(s: &str) -> Result<Self> {
        BODY_NAMES
            .get(&s.trim().to_lowercase())
            .copied()
            .ok_or_else(|| GeodesyError::UnknownBody(s.to_string()))
    }
}

/// Get a body's spheroid by name, case-insensitively
pub fn lookup(name: &str) -> Result<&'static Spheroid> {
    name.parse::<Body>().map(|body| body.spheroid())
}

/// Earth's reference spheroid
pub fn earth() -> &'static Spheroid {
    Body::Earth.spheroid()
}
