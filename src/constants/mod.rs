//! Constants module for plate kinematics calculations

use std::f64::consts::PI;

// Earth constants
/// Mean Earth radius in kilometers (IUGG)
pub const EARTH_RADIUS_KM: f64 = 6_371.009;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees in a complete circle
pub const DEG360: f64 = 360.0;

// Numerical limits
/// Smallest `|pole × ẑ|` for which a pole frame is still considered well defined
pub const SINGULAR_FRAME_TOLERANCE: f64 = 1e-12;
