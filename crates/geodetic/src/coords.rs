//! Coordinate value types.
//!
//! Two of these are absolute positions ([`Lla`] and [`Xyz`]); the other two
//! ([`Enu`] and [`Aer`]) are relative to some reference point and only mean
//! something together with it. Converting between absolute and relative
//! forms needs an ellipsoid, see [`crate::CoordinateSystem`]. Converting
//! between the two relative forms does not, and lives here.

use glam::DVec3;

use crate::units::{Degrees, Meters, Radians};

/// Latitude, longitude and altitude above the reference ellipsoid.
///
/// Absolute and angular.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lla {
    pub latitude: Degrees,
    pub longitude: Degrees,
    pub altitude: Meters,
}

/// Earth-centered cartesian position, origin at the ellipsoid center.
///
/// Absolute and cartesian.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    pub x: Meters,
    pub y: Meters,
    pub z: Meters,
}

/// East, north, up offset in the plane tangent to a reference point.
///
/// Relative and cartesian. "Up" is along the ellipsoid normal at the
/// reference, so moving far enough north eventually gains "up" as well.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enu {
    pub east: Meters,
    pub north: Meters,
    pub up: Meters,
}

/// Azimuth, elevation and range as seen by an observer (e.g. a radar).
///
/// Relative and angular. Azimuth is measured clockwise from north, elevation
/// upwards from the tangent plane.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aer {
    pub azimuth: Degrees,
    pub elevation: Degrees,
    pub range: Meters,
}

impl Lla {
    #[must_use]
    pub const fn new(latitude: Degrees, longitude: Degrees, altitude: Meters) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}

impl Xyz {
    #[must_use]
    pub const fn new(x: Meters, y: Meters, z: Meters) -> Self {
        Self { x, y, z }
    }
}

impl Enu {
    #[must_use]
    pub const fn new(east: Meters, north: Meters, up: Meters) -> Self {
        Self { east, north, up }
    }

    /// Straight-line distance from the reference point.
    #[must_use]
    pub fn norm(self) -> Meters {
        Meters(DVec3::from(self).length())
    }

    /// Express this offset as azimuth, elevation and range.
    ///
    /// A zero vector has no direction; it maps to azimuth and elevation of
    /// zero with zero range.
    #[must_use]
    pub fn to_aer(self) -> Aer {
        let (east, north, up) = (self.east.value(), self.north.value(), self.up.value());
        let horizontal = east.hypot(north);

        Aer {
            azimuth: Radians(east.atan2(north)).to_degrees(),
            elevation: Radians(up.atan2(horizontal)).to_degrees(),
            range: Meters(horizontal.hypot(up)),
        }
    }
}

impl Aer {
    #[must_use]
    pub const fn new(azimuth: Degrees, elevation: Degrees, range: Meters) -> Self {
        Self {
            azimuth,
            elevation,
            range,
        }
    }

    /// Project this sighting into the observer's tangent plane.
    #[must_use]
    pub fn to_enu(self) -> Enu {
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();

        Enu {
            east: self.range * (sin_az * cos_el),
            north: self.range * (cos_az * cos_el),
            up: self.range * sin_el,
        }
    }
}

impl From<Xyz> for DVec3 {
    fn from(xyz: Xyz) -> Self {
        DVec3::new(xyz.x.value(), xyz.y.value(), xyz.z.value())
    }
}

impl From<DVec3> for Xyz {
    fn from(v: DVec3) -> Self {
        Xyz::new(Meters(v.x), Meters(v.y), Meters(v.z))
    }
}

impl From<Enu> for DVec3 {
    fn from(enu: Enu) -> Self {
        DVec3::new(enu.east.value(), enu.north.value(), enu.up.value())
    }
}

impl From<DVec3> for Enu {
    fn from(v: DVec3) -> Self {
        Enu::new(Meters(v.x), Meters(v.y), Meters(v.z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enu(east: f64, north: f64, up: f64) -> Enu {
        Enu::new(Meters(east), Meters(north), Meters(up))
    }

    #[test]
    fn test_enu_aer_round_trip() {
        let original = enu(10.0, 20.0, 30.0);
        let back = original.to_aer().to_enu();

        assert!((back.east.value() - 10.0).abs() / 10.0 < 1e-6);
        assert!((back.north.value() - 20.0).abs() / 20.0 < 1e-6);
        assert!((back.up.value() - 30.0).abs() / 30.0 < 1e-6);
    }

    #[test]
    fn test_to_aer_cardinal_directions() {
        // Due north on the horizon.
        let aer = enu(0.0, 100.0, 0.0).to_aer();
        assert!(aer.azimuth.value().abs() < 1e-12);
        assert!(aer.elevation.value().abs() < 1e-12);
        assert!((aer.range.value() - 100.0).abs() < 1e-9);

        // Due east, 45 degrees up.
        let aer = enu(100.0, 0.0, 100.0).to_aer();
        assert!((aer.azimuth.value() - 90.0).abs() < 1e-9);
        assert!((aer.elevation.value() - 45.0).abs() < 1e-9);
        assert!((aer.range.value() - 100.0 * 2f64.sqrt()).abs() < 1e-9);

        // Due west is reported as -90, not 270.
        let aer = enu(-5.0, 0.0, 0.0).to_aer();
        assert!((aer.azimuth.value() + 90.0).abs() < 1e-9);

        // Straight down.
        let aer = enu(0.0, 0.0, -7.0).to_aer();
        assert!((aer.elevation.value() + 90.0).abs() < 1e-9);
        assert!((aer.range.value() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_to_enu_zenith() {
        let up = Aer::new(Degrees(123.0), Degrees(90.0), Meters(50.0)).to_enu();
        assert!(up.east.value().abs() < 1e-9);
        assert!(up.north.value().abs() < 1e-9);
        assert!((up.up.value() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_range_is_degenerate_not_nan() {
        let aer = Enu::default().to_aer();
        assert_eq!(aer.azimuth, Degrees(0.0));
        assert_eq!(aer.elevation, Degrees(0.0));
        assert_eq!(aer.range, Meters(0.0));

        let back = aer.to_enu();
        assert_eq!(back, Enu::default());
    }

    #[test]
    fn test_norm_matches_range() {
        let v = enu(3.0, 4.0, 12.0);
        assert!((v.norm().value() - 13.0).abs() < 1e-12);
        assert!((v.norm().value() - v.to_aer().range.value()).abs() < 1e-12);
    }

    #[test]
    fn test_dvec3_conversions() {
        let xyz = Xyz::new(Meters(1.0), Meters(-2.0), Meters(3.5));
        let v = DVec3::from(xyz);
        assert_eq!(v, DVec3::new(1.0, -2.0, 3.5));
        assert_eq!(Xyz::from(v), xyz);

        let e = enu(4.0, 5.0, 6.0);
        assert_eq!(Enu::from(DVec3::from(e)), e);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_units_are_plain_numbers() {
        let lla = Lla::new(Degrees(1.5), Degrees(-2.0), Meters(3.0));
        let json = serde_json::to_value(lla).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "latitude": 1.5, "longitude": -2.0, "altitude": 3.0 })
        );

        let back: Lla = serde_json::from_value(json).unwrap();
        assert_eq!(back, lla);
    }
}
