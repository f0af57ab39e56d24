use crate::Num;

#[cfg(feature = "f32")]
pub use std::f32::consts::PI;
#[cfg(feature = "f64")]
pub use std::f64::consts::PI;

pub const TWO_PI: Num = 2.0 * PI;

/// Mean Earth radius in km
pub const EARTH_RADIUS_KM: Num = 6371.0;

/// Number of leading series terms summed by the `sin`/`cos`/`atan`
/// shorthands and by the haversine distance.
pub const DEFAULT_TERMS: usize = 10;

/// Side length of the grid rendered by the ASCII map when the caller
/// has no particular preference.
pub const DEFAULT_GRID_SIZE: usize = 10;

/// Largest residual |guess² - x| accepted by the default square root.
///
/// The bound is absolute, so it must stay above one ulp of guess² for
/// the magnitudes the crate works with; f32 needs a much looser one.
#[cfg(feature = "f32")]
pub const DEFAULT_SQRT_TOLERANCE: Num = 1e-3;
#[cfg(feature = "f64")]
pub const DEFAULT_SQRT_TOLERANCE: Num = 1e-10;
