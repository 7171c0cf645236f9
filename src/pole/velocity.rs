//! Surface velocities from the pole's angular velocity

use super::EulerPole;
use crate::check_shape;
use crate::coordinates::local::{azimuth, local_coords, LocalVector};
use crate::coordinates::spherical::sph2cart;
use crate::Result;
use log::trace;
use serde::{Deserialize, Serialize};

/// Direction and speed of plate motion at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateVelocity {
    /// Degrees clockwise from north, in (0°, 360°]
    pub azimuth: f64,
    /// Speed in km per time unit of the rate (mm/yr for a deg/Myr rate)
    pub rate: f64,
}

impl From<LocalVector> for PlateVelocity {
    fn from(v: LocalVector) -> Self {
        PlateVelocity {
            azimuth: azimuth(v.east, v.north),
            rate: v.magnitude(),
        }
    }
}

impl EulerPole {
    /// East, north and down velocity components at (`lat`, `lon`)
    ///
    /// The surface point is `sph2cart(lat, lon, earth_radius)` and its
    /// velocity is `omega × r`, projected onto the local frame. Because that
    /// velocity is tangent to the sphere, `down` is zero up to rounding.
    pub fn velocity_components_at(&self, lat: f64, lon: f64) -> LocalVector {
        let r = sph2cart(lat, lon, self.earth_radius).to_vector3();
        let v = self.omega().cross(&r);
        local_coords(lat, lon, v.x, v.y, v.z)
    }

    /// [`EulerPole::velocity_components_at`] over paired slices
    ///
    /// # Errors
    ///
    /// [`crate::EulerPoleError::ShapeMismatch`] when the slices differ in length.
    pub fn velocity_components(&self, lats: &[f64], lons: &[f64]) -> Result<Vec<LocalVector>> {
        check_shape(lats, lons)?;
        trace!("velocity components at {} points for {}", lats.len(), self);
        Ok(lats
            .iter()
            .zip(lons)
            .map(|(&lat, &lon)| self.velocity_components_at(lat, lon))
            .collect())
    }

    /// Azimuth and speed of plate motion at (`lat`, `lon`)
    ///
    /// With the rate in degrees per million years this reports mm/yr.
    ///
    /// ```rust
    /// use euler_pole::EulerPole;
    ///
    /// let pole = EulerPole::new(0.0, 0.0, 1.0);
    /// let v = pole.velocity_at(0.0, 90.0);
    /// assert!((v.azimuth - 180.0).abs() < 1e-9);
    /// assert!((v.rate - 111.195).abs() < 1e-3);
    /// ```
    pub fn velocity_at(&self, lat: f64, lon: f64) -> PlateVelocity {
        self.velocity_components_at(lat, lon).into()
    }

    /// [`EulerPole::velocity_at`] over paired slices
    pub fn velocity(&self, lats: &[f64], lons: &[f64]) -> Result<Vec<PlateVelocity>> {
        Ok(self
            .velocity_components(lats, lons)?
            .into_iter()
            .map(PlateVelocity::from)
            .collect())
    }
}
