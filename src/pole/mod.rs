//! Euler poles
//!
//! An [`EulerPole`] is a rotation axis through the earth's centre, given by
//! the geographic position where it pierces the surface, together with a
//! signed rotation rate.
//!
//! # Sign convention
//!
//! The constructor takes a counterclockwise-positive rate (as seen from
//! outside the sphere, looking down on the pole) and stores its negation as
//! `rot_velocity`. Every derived quantity uses the stored value:
//!
//! - [`EulerPole::omega`] points along the pole scaled by `rot_velocity` in
//!   radians, i.e. it is antiparallel to the pole for a positive rate.
//! - [`EulerPole::move_features`] rotates by `time × rot_velocity`, so a
//!   positive `time` carries features *back* in time and a negative `time`
//!   projects them forward.
//! - [`EulerPole::velocity`] is `omega × r` and is therefore the rate of
//!   change of position under `move_features` per unit of `time`.
//!
//! [`fmt::Display`] prints the constructor rate, so the printed form
//! rebuilds an identical pole through [`FromStr`].
//!
//! # Units
//!
//! Angles are in degrees. With the rate in degrees per million years and the
//! earth radius in kilometres, velocities come out in km/Myr, which is the
//! same number as mm/yr. No unit conversion happens internally; the caller
//! picks the time unit through the rate.

mod frame;
mod velocity;

pub use velocity::PlateVelocity;

use crate::constants::{DEG2RAD, EARTH_RADIUS_KM, RAD2DEG};
use crate::coordinates::spherical::{cart2sph, sph2cart};
use crate::{EulerPoleError, Result};
use lazy_static::lazy_static;
use log::debug;
use nalgebra::Vector3;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref POLE_REPR: Regex = Regex::new(
        r"^\s*EulerPole\(\s*lat\s*=\s*([^,\s]+)\s*,\s*lon\s*=\s*([^,\s]+)\s*,\s*rot_velocity\s*=\s*([^)\s]+)\s*\)\s*$"
    )
    .expect("pole representation pattern is valid");
}

fn default_earth_radius() -> f64 {
    EARTH_RADIUS_KM
}

/// A rotation pole with a signed rotation rate
///
/// Immutable once built; pole arithmetic returns new values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EulerPole {
    /// Pole latitude in degrees
    lat: f64,
    /// Pole longitude in degrees
    lon: f64,
    /// Negated constructor rate, in degrees per time unit
    rot_velocity: f64,
    /// Sphere radius used for surface velocities, in kilometres
    #[serde(default = "default_earth_radius")]
    earth_radius: f64,
}

impl EulerPole {
    /// Create a pole at (`lat`, `lon`) degrees rotating at `rate` degrees
    /// per time unit, counterclockwise-positive
    ///
    /// Neither the latitude range nor the rate is validated.
    ///
    /// ```rust
    /// use euler_pole::EulerPole;
    ///
    /// let pole = EulerPole::new(60.0, -40.0, 0.5);
    /// assert_eq!(pole.rot_velocity(), -0.5);
    /// assert_eq!(pole.rate(), 0.5);
    /// ```
    pub fn new(lat: f64, lon: f64, rate: f64) -> Self {
        EulerPole {
            lat,
            lon,
            rot_velocity: -rate,
            earth_radius: EARTH_RADIUS_KM,
        }
    }

    /// Use a different sphere radius (km) for velocity calculations
    pub fn with_earth_radius(mut self, earth_radius: f64) -> Self {
        self.earth_radius = earth_radius;
        self
    }

    /// Rebuild a pole from an angular velocity vector (radians per time unit)
    ///
    /// This is the inverse of [`EulerPole::omega`]: the result's `omega()`
    /// reproduces `omega` up to rounding. The pole is placed along `omega`
    /// with a rate of `-|omega|` in degrees, so rebuilt poles never carry a
    /// positive rate.
    ///
    /// # Errors
    ///
    /// [`EulerPoleError::DegenerateVector`] for a zero vector, which has no
    /// pole position.
    pub fn from_omega(omega: Vector3<f64>) -> Result<Self> {
        let (lat, lon, magnitude) = cart2sph(omega.x, omega.y, omega.z)?;
        debug!(
            "pole from omega ({}, {}, {}): lat={}, lon={}, |omega|={} rad",
            omega.x, omega.y, omega.z, lat, lon, magnitude
        );
        // omega() scales by the stored (negated) rate, so hand the
        // constructor the negated magnitude
        Ok(EulerPole::new(lat, lon, -magnitude * RAD2DEG))
    }

    /// Pole latitude in degrees
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Pole longitude in degrees
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Stored rotation rate: the negation of the constructor rate
    pub fn rot_velocity(&self) -> f64 {
        self.rot_velocity
    }

    /// The counterclockwise-positive rate this pole was constructed with
    pub fn rate(&self) -> f64 {
        -self.rot_velocity
    }

    /// Sphere radius for velocities, in kilometres
    pub fn earth_radius(&self) -> f64 {
        self.earth_radius
    }

    /// The Euler vector in geocentric Cartesian coordinates, in radians per
    /// time unit
    pub fn omega(&self) -> Vector3<f64> {
        sph2cart(self.lat, self.lon, self.rot_velocity * DEG2RAD).to_vector3()
    }

    /// Pole whose angular velocity is `self.omega() + other.omega()`
    ///
    /// The result keeps `self`'s earth radius.
    ///
    /// # Errors
    ///
    /// [`EulerPoleError::DegenerateVector`] when the angular velocities cancel.
    pub fn add(&self, other: &EulerPole) -> Result<EulerPole> {
        self.rebuild(self.omega() + other.omega())
    }

    /// Pole whose angular velocity is `self.omega() - other.omega()`
    ///
    /// Gives the motion of `self`'s plate relative to `other`'s. Fails like
    /// [`EulerPole::add`] when the two poles are identical.
    pub fn subtract(&self, other: &EulerPole) -> Result<EulerPole> {
        self.rebuild(self.omega() - other.omega())
    }

    /// Pole whose angular velocity is `-self.omega()`
    ///
    /// For a positive-rate pole this is the same position with the rate's
    /// sign flipped. A pole with a zero rate has no direction and fails with
    /// [`EulerPoleError::DegenerateVector`].
    pub fn negate(&self) -> Result<EulerPole> {
        self.rebuild(-self.omega())
    }

    fn rebuild(&self, omega: Vector3<f64>) -> Result<EulerPole> {
        Ok(EulerPole::from_omega(omega)?.with_earth_radius(self.earth_radius))
    }
}

impl std::ops::Add for EulerPole {
    type Output = Result<EulerPole>;

    fn add(self, other: EulerPole) -> Result<EulerPole> {
        EulerPole::add(&self, &other)
    }
}

impl std::ops::Sub for EulerPole {
    type Output = Result<EulerPole>;

    fn sub(self, other: EulerPole) -> Result<EulerPole> {
        self.subtract(&other)
    }
}

impl std::ops::Neg for EulerPole {
    type Output = Result<EulerPole>;

    fn neg(self) -> Result<EulerPole> {
        self.negate()
    }
}

impl fmt::Display for EulerPole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EulerPole(lat={}, lon={}, rot_velocity={})",
            self.lat,
            self.lon,
            self.rate()
        )
    }
}

impl FromStr for EulerPole {
    type Err = EulerPoleError;

    /// Parse the [`fmt::Display`] form back into a pole
    ///
    /// The printed `rot_velocity` is the constructor rate. The earth radius
    /// is not part of the printed form and comes back as the default.
    fn from_str(s: &str) -> Result<Self> {
        let caps = POLE_REPR
            .captures(s)
            .ok_or_else(|| EulerPoleError::ParseError(format!("not an EulerPole: {:?}", s)))?;

        let field = |i: usize, name: &str| -> Result<f64> {
            caps[i].parse::<f64>().map_err(|e| {
                EulerPoleError::ParseError(format!("invalid {} {:?}: {}", name, &caps[i], e))
            })
        };

        Ok(EulerPole::new(
            field(1, "lat")?,
            field(2, "lon")?,
            field(3, "rot_velocity")?,
        ))
    }
}
