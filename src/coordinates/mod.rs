//! Coordinate kernel
//!
//! Stateless conversions between geographic and geocentric Cartesian
//! coordinates, local east/north/down projection and azimuths. Every function
//! is a pure numeric transform; the `_many` variants apply the scalar form
//! elementwise over paired slices.

pub mod cartesian;
pub mod geographic;
pub mod local;
pub mod spherical;

pub use cartesian::Cartesian3;
pub use geographic::GeographicPoint;
pub use local::{azimuth, local_coords, LocalVector};
pub use spherical::{cart2sph, cart2sph_many, positive_longitude, sph2cart, sph2cart_many};
