//! Spherical ↔ geocentric Cartesian conversions
//!
//! Latitude is measured from the equator (not co-latitude) and longitude
//! eastward from the prime meridian. All angles on the public surface are in
//! degrees; trigonometry happens in radians internally.

use super::cartesian::Cartesian3;
use crate::constants::{DEG2RAD, DEG360, RAD2DEG};
use crate::{check_shape, EulerPoleError, Result};

/// Convert spherical coordinates to geocentric Cartesian coordinates
///
/// `r` is carried through unchanged, so a unit radius yields a direction on
/// the unit sphere and an earth radius yields a surface point in the same
/// units as `r`. Latitude is not range checked.
///
/// - `x = r·cos(lat)·cos(lon)`
/// - `y = r·cos(lat)·sin(lon)`
/// - `z = r·sin(lat)`
///
/// # Examples
///
/// ```rust
/// use euler_pole::sph2cart;
///
/// let v = sph2cart(0.0, 90.0, 1.0);
/// assert!(v.x.abs() < 1e-15);
/// assert!((v.y - 1.0).abs() < 1e-15);
/// assert_eq!(v.z, 0.0);
/// ```
pub fn sph2cart(lat: f64, lon: f64, r: f64) -> Cartesian3 {
    let (lat, lon) = (lat * DEG2RAD, lon * DEG2RAD);
    let cos_lat = lat.cos();
    Cartesian3 {
        x: r * cos_lat * lon.cos(),
        y: r * cos_lat * lon.sin(),
        z: r * lat.sin(),
    }
}

/// Convert geocentric Cartesian coordinates to `(lat°, lon°, r)`
///
/// `lat = asin(z / r)` and `lon = atan2(y, x)`; latitude is evaluated as
/// `atan2(z, hypot(x, y))` to keep precision near the poles.
///
/// The radius is returned in whatever units the input carries. Longitude comes
/// straight from `atan2` and lies in (-180°, 180°]; use
/// [`positive_longitude`] when a [0°, 360°) range is needed.
///
/// # Errors
///
/// [`EulerPoleError::DegenerateVector`] for the zero vector, whose latitude
/// is undefined.
///
/// # Examples
///
/// ```rust
/// use euler_pole::cart2sph;
///
/// let (lat, lon, r) = cart2sph(0.0, 0.0, 1.0).unwrap();
/// assert_eq!((lat, lon, r), (90.0, 0.0, 1.0));
///
/// assert!(cart2sph(0.0, 0.0, 0.0).is_err());
/// ```
pub fn cart2sph(x: f64, y: f64, z: f64) -> Result<(f64, f64, f64)> {
    // hypot avoids squaring, which overflows above ~1e154 and underflows
    // below ~1e-154
    let horizontal = x.hypot(y);
    let r = horizontal.hypot(z);
    if r == 0.0 {
        return Err(EulerPoleError::DegenerateVector { x, y, z });
    }

    // Same angle as asin(z / r), but stays accurate next to the poles
    let lat = z.atan2(horizontal);
    let lon = y.atan2(x);
    Ok((lat * RAD2DEG, lon * RAD2DEG, r))
}

/// Wrap a longitude into [0°, 360°)
pub fn positive_longitude(lon: f64) -> f64 {
    let wrapped = lon.rem_euclid(DEG360);
    // rem_euclid can return exactly 360.0 for tiny negative inputs
    if wrapped >= DEG360 {
        0.0
    } else {
        wrapped
    }
}

/// Elementwise [`sph2cart`] over paired latitude/longitude slices
pub fn sph2cart_many(lats: &[f64], lons: &[f64], r: f64) -> Result<Vec<Cartesian3>> {
    check_shape(lats, lons)?;
    Ok(lats
        .iter()
        .zip(lons)
        .map(|(&lat, &lon)| sph2cart(lat, lon, r))
        .collect())
}

/// Elementwise [`cart2sph`]; fails on the first degenerate vector without
/// producing partial output
pub fn cart2sph_many(vectors: &[Cartesian3]) -> Result<Vec<(f64, f64, f64)>> {
    vectors.iter().map(|v| cart2sph(v.x, v.y, v.z)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;
    use rstest::rstest;

    /// Compare two (lat, lon, r) triples with longitude-wrap equivalence
    fn assert_sph_eq(actual: (f64, f64, f64), expected: (f64, f64, f64), epsilon: f64) {
        assert_relative_eq!(actual.0, expected.0, epsilon = epsilon);
        assert_relative_eq!(
            positive_longitude(actual.1),
            positive_longitude(expected.1),
            epsilon = epsilon
        );
        assert_relative_eq!(actual.2, expected.2, epsilon = epsilon);
    }

    #[rstest]
    #[case((0.0, 0.0, 1.0), (90.0, 0.0, 1.0))]
    #[case((0.0, 1.0, 0.0), (0.0, 90.0, 1.0))]
    #[case((1.0, 0.0, 0.0), (0.0, 0.0, 1.0))]
    #[case((0.0, 0.0, -1.0), (-90.0, 0.0, 1.0))]
    #[case((0.0, -1.0, 0.0), (0.0, -90.0, 1.0))]
    #[case((0.0, -1.0, 0.0), (0.0, 270.0, 1.0))]
    #[case((-1.0, 0.0, 0.0), (0.0, 180.0, 1.0))]
    #[case((-1.0, 0.0, 0.0), (0.0, -180.0, 1.0))]
    #[case((1.0, 0.0, 0.0), (0.0, 360.0, 1.0))]
    fn test_fixture_table(#[case] cart: (f64, f64, f64), #[case] sph: (f64, f64, f64)) {
        let converted = cart2sph(cart.0, cart.1, cart.2).unwrap();
        assert_sph_eq(converted, sph, 1e-12);

        let v = sph2cart(sph.0, sph.1, sph.2);
        assert_relative_eq!(v.x, cart.0, epsilon = 1e-12);
        assert_relative_eq!(v.y, cart.1, epsilon = 1e-12);
        assert_relative_eq!(v.z, cart.2, epsilon = 1e-12);

        // Chained both ways
        let back = converted;
        let v2 = sph2cart(back.0, back.1, back.2);
        assert_relative_eq!(v2.x, cart.0, epsilon = 1e-12);
        assert_relative_eq!(v2.y, cart.1, epsilon = 1e-12);
        assert_relative_eq!(v2.z, cart.2, epsilon = 1e-12);

        let sph_back = cart2sph(v.x, v.y, v.z).unwrap();
        assert_sph_eq(sph_back, sph, 1e-12);
    }

    #[test]
    fn test_exact_axis_values() {
        assert_eq!(cart2sph(0.0, 0.0, 1.0).unwrap(), (90.0, 0.0, 1.0));
        assert_eq!(cart2sph(0.0, 1.0, 0.0).unwrap(), (0.0, 90.0, 1.0));
        assert_eq!(cart2sph(1.0, 0.0, 0.0).unwrap(), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_three_four_five() {
        let (lat, lon, r) = cart2sph(3.0, 4.0, 0.0).unwrap();
        assert_eq!(lat, 0.0);
        assert_relative_eq!(lon, 53.13, epsilon = 1e-2);
        assert_relative_eq!(r, 5.0, epsilon = 1e-15);
    }

    #[test]
    fn test_longitude_is_not_normalized() {
        let (_, lon, _) = cart2sph(0.0, -1.0, 0.0).unwrap();
        assert_relative_eq!(lon, -90.0, epsilon = 1e-12);

        let (_, lon, _) = cart2sph(-1.0, 0.0, 0.0).unwrap();
        assert_relative_eq!(lon, 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_is_rejected() {
        let err = cart2sph(0.0, 0.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            EulerPoleError::DegenerateVector {
                x: 0.0,
                y: 0.0,
                z: 0.0
            }
        );
    }

    #[rstest]
    #[case(1e-170, 0.0, 0.0)]
    #[case(0.0, -3e-200, 4e-200)]
    #[case(1e200, 0.0, 0.0)]
    #[case(-2e300, 1e300, -5e299)]
    #[case(f64::MIN_POSITIVE, f64::MIN_POSITIVE, 0.0)]
    fn test_extreme_magnitudes_roundtrip(#[case] x: f64, #[case] y: f64, #[case] z: f64) {
        let (lat, lon, r) = cart2sph(x, y, z).unwrap();
        assert!(r.is_finite() && r > 0.0);
        assert_relative_eq!(r, Cartesian3::new(x, y, z).magnitude(), max_relative = 1e-15);

        let v = sph2cart(lat, lon, r);
        let scale = r * 1e-12;
        assert_relative_eq!(v.x, x, epsilon = scale);
        assert_relative_eq!(v.y, y, epsilon = scale);
        assert_relative_eq!(v.z, z, epsilon = scale);
    }

    #[test]
    fn test_extreme_magnitudes_exact() {
        assert_eq!(cart2sph(1e-170, 0.0, 0.0).unwrap(), (0.0, 0.0, 1e-170));
        assert_eq!(cart2sph(1e200, 0.0, 0.0).unwrap(), (0.0, 0.0, 1e200));
        assert_eq!(cart2sph(0.0, 0.0, -1e-300).unwrap(), (-90.0, 0.0, 1e-300));
    }

    #[test]
    fn test_unit_magnitude() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..200 {
            let lat = rng.gen::<f64>() * 180.0 - 90.0;
            let lon = rng.gen::<f64>() * 720.0 - 360.0;
            let v = sph2cart(lat, lon, 1.0);
            assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_cartesian_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1337);
        for _ in 0..200 {
            let x = rng.gen::<f64>() * 20.0 - 10.0;
            let y = rng.gen::<f64>() * 20.0 - 10.0;
            let z = rng.gen::<f64>() * 20.0 - 10.0;

            let (lat, lon, r) = cart2sph(x, y, z).unwrap();
            let v = sph2cart(lat, lon, r);
            assert_relative_eq!(v.x, x, epsilon = 1e-10);
            assert_relative_eq!(v.y, y, epsilon = 1e-10);
            assert_relative_eq!(v.z, z, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_spherical_roundtrip() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            // Stay off the exact poles where longitude is undefined
            let lat = (rng.gen::<f64>() * 180.0 - 90.0) * 0.99;
            let lon = rng.gen::<f64>() * 1080.0 - 540.0;
            let r = rng.gen::<f64>() * 7000.0 + 0.1;

            let v = sph2cart(lat, lon, r);
            let round_trip = cart2sph(v.x, v.y, v.z).unwrap();
            assert_relative_eq!(round_trip.0, lat, epsilon = 1e-9);
            assert_relative_eq!(
                positive_longitude(round_trip.1),
                positive_longitude(lon),
                epsilon = 1e-8
            );
            assert_relative_eq!(round_trip.2, r, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_latitude_resolved_near_pole() {
        // 1e-9 rad off the north pole; asin(z / r) would round this to 90°
        let (lat, lon, _) = cart2sph(1e-9, 0.0, 1.0).unwrap();
        assert_relative_eq!(lat, 90.0 - 1e-9 * RAD2DEG, epsilon = 1e-13);
        assert_eq!(lon, 0.0);
        assert!(lat < 90.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(-90.0, 270.0)]
    #[case(-180.0, 180.0)]
    #[case(360.0, 0.0)]
    #[case(725.0, 5.0)]
    #[case(-1e-20, 0.0)]
    fn test_positive_longitude(#[case] lon: f64, #[case] expected: f64) {
        let wrapped = positive_longitude(lon);
        assert!((0.0..360.0).contains(&wrapped));
        assert_relative_eq!(wrapped, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_batch_conversions() {
        let lats = [0.0, 90.0, -45.0];
        let lons = [0.0, 0.0, 135.0];
        let vectors = sph2cart_many(&lats, &lons, 2.0).unwrap();
        assert_eq!(vectors.len(), 3);
        assert_relative_eq!(vectors[0].x, 2.0, epsilon = 1e-15);
        assert_relative_eq!(vectors[1].z, 2.0, epsilon = 1e-15);

        let spherical = cart2sph_many(&vectors).unwrap();
        for (i, (lat, _, r)) in spherical.iter().enumerate() {
            assert_relative_eq!(*lat, lats[i], epsilon = 1e-12);
            assert_relative_eq!(*r, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_batch_failures() {
        assert_eq!(
            sph2cart_many(&[1.0, 2.0], &[3.0], 1.0).unwrap_err(),
            EulerPoleError::ShapeMismatch { lats: 2, lons: 1 }
        );

        let vectors = [Cartesian3::new(1.0, 0.0, 0.0), Cartesian3::new(0.0, 0.0, 0.0)];
        assert!(matches!(
            cart2sph_many(&vectors),
            Err(EulerPoleError::DegenerateVector { .. })
        ));
    }
}
