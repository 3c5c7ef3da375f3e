//! Convert between geographic coordinate representations.
//!
//! Positions move between four forms:
//!
//! - [`Lla`]: latitude, longitude and altitude on a reference ellipsoid
//! - [`Xyz`]: earth-centered cartesian coordinates
//! - [`Enu`]: east, north, up offsets in the tangent plane at a reference
//! - [`Aer`]: azimuth, elevation and range as seen from a reference
//!
//! The absolute/relative conversions go through a [`CoordinateSystem`], of
//! which [`Wgs84`] is the one GPS uses. [`haversine_distance`] gives the
//! great-circle distance between two surface points on a spherical Earth.
//!
//! # Design principles
//!
//! - **Unit-tagged**: lengths and angles are distinct types; crossing units
//!   is always an explicit call
//! - **Pure**: every operation is a synchronous function of its inputs and
//!   fixed constants, safe to call from any thread
//! - **Unguarded singularities**: poles and zero-length vectors yield
//!   whatever the formulas produce; only haversine input is validated
//!
//! # Example
//!
//! ```
//! use geodetic::{CoordinateSystem, Degrees, Lla, Meters, wgs84};
//!
//! let system = wgs84();
//! let observer = Lla::new(Degrees(38.897_957), Degrees(-77.036_560), Meters(30.0));
//! let target = Lla::new(Degrees(38.870_945_5), Degrees(-77.055_255_1), Meters(100.0));
//!
//! let aer = system.lla_to_aer(observer, target);
//! let located = system.aer_to_lla(observer, aer);
//! assert!((located.altitude.value() - 100.0).abs() < 1e-4);
//! ```

pub mod coords;
mod error;
pub mod haversine;
pub mod system;
pub mod units;
pub mod wgs84;

pub use coords::{Aer, Enu, Lla, Xyz};
pub use error::{Error, Result};
pub use haversine::{EARTH_RADIUS, haversine_distance};
pub use system::CoordinateSystem;
pub use units::{Degrees, Meters, Radians};
pub use wgs84::{Wgs84, wgs84};
