//! Great-circle distance on a spherical Earth.

use crate::coords::Lla;
use crate::error::{Error, Result};
use crate::units::Meters;

/// Mean radius of the spherical Earth the haversine formula assumes.
pub const EARTH_RADIUS: Meters = Meters(6_371_000.0);

/// Great-circle distance between two points, traveling along the surface.
///
/// The formula treats the Earth as a sphere of [`EARTH_RADIUS`], so it only
/// makes sense for points on that surface. Rather than quietly ignoring a
/// height difference, both points must have an altitude of exactly zero.
///
/// # Errors
///
/// Returns [`Error::InvalidAltitude`] if either point has a non-zero
/// altitude. The origin is checked first.
pub fn haversine_distance(origin: Lla, position: Lla) -> Result<Meters> {
    for altitude in [origin.altitude, position.altitude] {
        if altitude != Meters(0.0) {
            tracing::debug!(%altitude, "rejecting haversine input off the surface");
            return Err(Error::InvalidAltitude { altitude });
        }
    }

    let origin_lat = origin.latitude.to_radians().value();
    let position_lat = position.latitude.to_radians().value();

    // Absolute differences make the result bit-identical under argument swap.
    let delta_lat = (origin_lat - position_lat).abs();
    let delta_lon =
        (origin.longitude.to_radians().value() - position.longitude.to_radians().value()).abs();

    let a = (delta_lat / 2.0).sin().powi(2)
        + origin_lat.cos() * position_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push the term just past 1 for antipodal points.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Ok(EARTH_RADIUS * c)
}
