//! Great-circle distances computed from first principles: a Newton
//! square root, truncated Taylor/Leibniz series for sin, cos and
//! arctan, and a haversine distance built on top of them, plus small
//! helpers for bounding boxes and coarse ASCII maps of point sets.
//!
//! Everything is a pure function of its inputs; precision is selected
//! with the `f32`/`f64` cargo features (`f64` is the default).

pub mod constants;
pub mod error;
pub mod geo;
pub mod grid;
pub mod math;
pub mod series;

#[cfg(feature = "f32")]
pub type Num = f32;
#[cfg(feature = "f64")]
pub type Num = f64;

pub use constants::{EARTH_RADIUS_KM, PI, TWO_PI};
pub use error::{Error, Result};
pub use geo::{deg_to_rad, haversine, GeoPoint};
pub use grid::{ascii_map, bounding_box, print_ascii_map, BoundingBox};
pub use math::{factorial, newton_sqrt, sqrt};
pub use series::{arctan, atan, cos, cosine, sin, sine};
