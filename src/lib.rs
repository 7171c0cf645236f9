//! Euler pole: rigid-body rotations on a sphere for plate-tectonic kinematics
//!
//! This crate moves point features about an Euler pole through time and
//! derives instantaneous surface velocities (azimuth and rate) from the
//! pole's angular velocity.
//!
//! The crate is split in two layers:
//!
//! - [`coordinates`]: stateless conversions between geographic and geocentric
//!   Cartesian coordinates, local east/north/down projection and azimuths.
//! - [`pole`]: the [`EulerPole`] value type, its pole-centred reference frame,
//!   rotations, pole arithmetic and velocity queries.
//!
//! ```rust
//! use euler_pole::EulerPole;
//!
//! // Pacific plate relative to North America (approximate)
//! let pole = EulerPole::new(48.7, -78.2, 0.75);
//! let v = pole.velocity_at(35.0, -120.0);
//! assert!(v.azimuth > 0.0 && v.azimuth <= 360.0);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod pole;

// Re-export commonly used types
pub use coordinates::{
    azimuth, cart2sph, local_coords, positive_longitude, sph2cart, Cartesian3, GeographicPoint,
    LocalVector,
};
pub use pole::{EulerPole, PlateVelocity};

/// Main error type for the euler-pole library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EulerPoleError {
    /// The pole lies on the earth's spin axis, so `pole × ẑ` vanishes
    #[error("Singular pole frame: pole at lat={lat}, lon={lon} is parallel to the spin axis")]
    SingularFrame { lat: f64, lon: f64 },

    /// A zero-length vector has no spherical direction
    #[error("Degenerate vector: ({x}, {y}, {z}) has zero length")]
    DegenerateVector { x: f64, y: f64, z: f64 },

    #[error("Shape mismatch: {lats} latitudes but {lons} longitudes")]
    ShapeMismatch { lats: usize, lons: usize },

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for euler-pole operations
pub type Result<T> = std::result::Result<T, EulerPoleError>;

/// Fail fast when paired latitude/longitude slices differ in length
pub(crate) fn check_shape(lats: &[f64], lons: &[f64]) -> Result<()> {
    if lats.len() != lons.len() {
        return Err(EulerPoleError::ShapeMismatch {
            lats: lats.len(),
            lons: lons.len(),
        });
    }
    Ok(())
}
