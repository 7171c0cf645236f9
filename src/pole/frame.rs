//! Pole-centred reference frame and rotations about the pole

use super::EulerPole;
use crate::constants::SINGULAR_FRAME_TOLERANCE;
use crate::coordinates::spherical::{cart2sph, sph2cart};
use crate::{check_shape, EulerPoleError, Result};
use log::{trace, warn};
use nalgebra::{Matrix3, Vector3};

/// Forward and inverse transforms for one pole, computed once per batch
struct PoleFrame {
    to_pole: Matrix3<f64>,
    from_pole: Matrix3<f64>,
}

impl PoleFrame {
    fn new(pole: &EulerPole) -> Result<Self> {
        Ok(PoleFrame {
            to_pole: pole.pole_transform()?,
            from_pole: pole.inv_pole_transform()?,
        })
    }

    /// Rotate one unit-sphere position by `angle` degrees about the pole
    fn rotate(&self, lat: f64, lon: f64, angle: f64) -> Result<(f64, f64)> {
        let xyz = sph2cart(lat, lon, 1.0).to_vector3();
        let c = self.to_pole * xyz;

        // c[0] lies along the pole, so it is the polar axis in this frame and
        // a rotation about the pole is a pure longitude shift
        let (lat_p, lon_p, r_p) = cart2sph(c[1], c[2], c[0])?;
        let shifted = sph2cart(lat_p, lon_p + angle, r_p);

        let xyz = self.from_pole * Vector3::new(shifted.z, shifted.x, shifted.y);
        let (new_lat, new_lon, _) = cart2sph(xyz.x, xyz.y, xyz.z)?;
        Ok((new_lat, new_lon))
    }
}

impl EulerPole {
    /// Basis of the pole's reference frame, one vector per column
    ///
    /// - column 0: the pole's unit vector `p`
    /// - column 1: `p × ẑ`, normalized (ẑ is the spin axis)
    /// - column 2: `p × column 1`
    ///
    /// The three columns form a right-handed orthonormal set with the pole
    /// as the polar axis, `column 1` as longitude 0 and `column 2` as
    /// longitude 90° in pole coordinates.
    ///
    /// # Errors
    ///
    /// [`EulerPoleError::SingularFrame`] when the pole sits on the spin axis
    /// (latitude ±90°) and `p × ẑ` vanishes.
    pub fn coord_basis(&self) -> Result<Matrix3<f64>> {
        let pole = sph2cart(self.lat, self.lon, 1.0).to_vector3();
        let vec1 = pole.cross(&Vector3::z());

        let norm = vec1.norm();
        if norm < SINGULAR_FRAME_TOLERANCE {
            warn!(
                "pole at lat={}, lon={} is on the spin axis; frame is singular (|p × z| = {:e})",
                self.lat, self.lon, norm
            );
            return Err(self.singular_frame());
        }

        let vec1 = vec1 / norm;
        let vec2 = pole.cross(&vec1).normalize();
        Ok(Matrix3::from_columns(&[pole, vec1, vec2]))
    }

    /// Transformation from geocentric coordinates into pole coordinates
    /// (the inverse of [`EulerPole::coord_basis`])
    pub fn pole_transform(&self) -> Result<Matrix3<f64>> {
        self.coord_basis()?
            .try_inverse()
            .ok_or_else(|| self.singular_frame())
    }

    /// Transformation from pole coordinates back into geocentric coordinates
    /// (the basis itself)
    pub fn inv_pole_transform(&self) -> Result<Matrix3<f64>> {
        self.coord_basis()
    }

    fn singular_frame(&self) -> EulerPoleError {
        EulerPoleError::SingularFrame {
            lat: self.lat,
            lon: self.lon,
        }
    }

    /// Rotate features about the pole by `angle` degrees
    ///
    /// Positive angles turn counterclockwise as seen from outside the sphere
    /// above the pole. `lats` and `lons` pair up elementwise; the returned
    /// vectors have the same length. Latitudes come back in [-90°, 90°] and
    /// longitudes in (-180°, 180°].
    ///
    /// # Errors
    ///
    /// - [`EulerPoleError::ShapeMismatch`] when the slices differ in length
    /// - [`EulerPoleError::SingularFrame`] for a pole on the spin axis
    ///
    /// Either way no points are returned.
    ///
    /// ```rust
    /// use euler_pole::EulerPole;
    ///
    /// let pole = EulerPole::new(0.0, 0.0, 1.0);
    /// let (lats, lons) = pole.rotate(&[0.0], &[90.0], 90.0).unwrap();
    /// assert!((lats[0] - 90.0).abs() < 1e-9);
    /// ```
    pub fn rotate(&self, lats: &[f64], lons: &[f64], angle: f64) -> Result<(Vec<f64>, Vec<f64>)> {
        check_shape(lats, lons)?;
        let frame = PoleFrame::new(self)?;
        trace!("rotating {} points by {}° about {}", lats.len(), angle, self);

        let mut new_lats = Vec::with_capacity(lats.len());
        let mut new_lons = Vec::with_capacity(lons.len());
        for (&lat, &lon) in lats.iter().zip(lons) {
            let (lat, lon) = frame.rotate(lat, lon, angle)?;
            new_lats.push(lat);
            new_lons.push(lon);
        }
        Ok((new_lats, new_lons))
    }

    /// Rotate a single point about the pole by `angle` degrees
    pub fn rotate_point(&self, lat: f64, lon: f64, angle: f64) -> Result<(f64, f64)> {
        PoleFrame::new(self)?.rotate(lat, lon, angle)
    }

    /// Move features *back* in time by `time` units of the rate
    ///
    /// The rotation angle is `time × rot_velocity`. Use a negative `time` to
    /// move features into the future. Errors as in [`EulerPole::rotate`].
    pub fn move_features(
        &self,
        lats: &[f64],
        lons: &[f64],
        time: f64,
    ) -> Result<(Vec<f64>, Vec<f64>)> {
        self.rotate(lats, lons, time * self.rot_velocity)
    }

    /// Single-point form of [`EulerPole::move_features`]
    pub fn move_feature(&self, lat: f64, lon: f64, time: f64) -> Result<(f64, f64)> {
        self.rotate_point(lat, lon, time * self.rot_velocity)
    }
}
