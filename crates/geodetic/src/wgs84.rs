//! The WGS84 reference ellipsoid.
//!
//! WGS84 is the coordinate system maintained by the NGA and the one GPS
//! reports positions in.

use glam::{DMat3, DVec3};

use crate::coords::{Enu, Lla, Xyz};
use crate::system::CoordinateSystem;
use crate::units::{Meters, Radians};

/// Semi-major (equatorial) axis, in meters.
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// Semi-minor (polar) axis, in meters.
pub const SEMI_MINOR_AXIS: f64 = 6_356_752.314_245;

/// Ellipsoid flattening, `(a - b) / a`.
pub const FLATTENING: f64 = (SEMI_MAJOR_AXIS - SEMI_MINOR_AXIS) / SEMI_MAJOR_AXIS;

/// Reciprocal of [`FLATTENING`].
pub const INVERSE_FLATTENING: f64 = 1.0 / FLATTENING;

/// First eccentricity squared, `f * (2 - f)`.
pub const ECCENTRICITY_SQUARED: f64 = FLATTENING * (2.0 - FLATTENING);

/// Second eccentricity squared, `e² / (1 - e²)`.
const SECOND_ECCENTRICITY_SQUARED: f64 = ECCENTRICITY_SQUARED / (1.0 - ECCENTRICITY_SQUARED);

/// The WGS84 coordinate system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wgs84;

/// The WGS84 coordinate system.
#[must_use]
pub const fn wgs84() -> Wgs84 {
    Wgs84
}

/// Prime vertical radius of curvature for a latitude with the given sine.
fn prime_vertical_radius(sin_lat: f64) -> f64 {
    SEMI_MAJOR_AXIS / (1.0 - ECCENTRICITY_SQUARED * sin_lat * sin_lat).sqrt()
}

/// Rotation taking tangent-plane offsets at `reference` to earth-centered
/// offsets.
///
/// The columns are the east, north and up unit vectors at `reference`. The
/// matrix is orthonormal, so its transpose is the inverse rotation.
fn ecef_from_enu(reference: Lla) -> DMat3 {
    let (sin_lat, cos_lat) = reference.latitude.to_radians().sin_cos();
    let (sin_lon, cos_lon) = reference.longitude.to_radians().sin_cos();

    DMat3::from_cols(
        DVec3::new(-sin_lon, cos_lon, 0.0),
        DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
        DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
    )
}

impl CoordinateSystem for Wgs84 {
    fn lla_to_xyz(&self, lla: Lla) -> Xyz {
        let (sin_lat, cos_lat) = lla.latitude.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lla.longitude.to_radians().sin_cos();
        let altitude = lla.altitude.value();

        let n = prime_vertical_radius(sin_lat);

        Xyz::new(
            Meters((altitude + n) * cos_lat * cos_lon),
            Meters((altitude + n) * cos_lat * sin_lon),
            Meters((altitude + (1.0 - ECCENTRICITY_SQUARED) * n) * sin_lat),
        )
    }

    /// Closed-form inverse (Bowring's parametric-latitude method).
    ///
    /// Not guarded at the poles: on the polar axis `cos(lat)` is zero and the
    /// altitude comes out non-finite.
    fn xyz_to_lla(&self, xyz: Xyz) -> Lla {
        let (x, y, z) = (xyz.x.value(), xyz.y.value(), xyz.z.value());
        let p = x.hypot(y);

        if p < f64::EPSILON {
            tracing::trace!(z, "point lies on the polar axis, altitude is undefined");
        }

        let q = (z * SEMI_MAJOR_AXIS).atan2(p * SEMI_MINOR_AXIS);
        let (sin_q, cos_q) = q.sin_cos();

        let latitude = (z + SECOND_ECCENTRICITY_SQUARED * SEMI_MINOR_AXIS * sin_q.powi(3))
            .atan2(p - ECCENTRICITY_SQUARED * SEMI_MAJOR_AXIS * cos_q.powi(3));
        let longitude = y.atan2(x);

        let n = prime_vertical_radius(latitude.sin());
        let altitude = p / latitude.cos() - n;

        Lla::new(
            Radians(latitude).to_degrees(),
            Radians(longitude).to_degrees(),
            Meters(altitude),
        )
    }

    fn xyz_to_enu(&self, reference: Lla, xyz: Xyz) -> Enu {
        let origin = DVec3::from(self.lla_to_xyz(reference));
        let offset = DVec3::from(xyz) - origin;

        Enu::from(ecef_from_enu(reference).transpose() * offset)
    }

    fn enu_to_xyz(&self, reference: Lla, enu: Enu) -> Xyz {
        let origin = DVec3::from(self.lla_to_xyz(reference));

        Xyz::from(ecef_from_enu(reference) * DVec3::from(enu) + origin)
    }
}
