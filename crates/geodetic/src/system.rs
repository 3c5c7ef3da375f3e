//! The coordinate system abstraction.

use crate::coords::{Aer, Enu, Lla, Xyz};

/// Maps angular positions (usually [`Lla`]) to absolute points in space and
/// back.
///
/// Different systems model the Earth's surface differently, and a latitude
/// and longitude must be understood within its system or significant errors
/// creep in. Implementations are stateless; every method is a pure function
/// of its arguments and the system's constants.
pub trait CoordinateSystem {
    /// Absolute cartesian position of `lla`.
    fn lla_to_xyz(&self, lla: Lla) -> Xyz;

    /// Angular position of an absolute cartesian point.
    fn xyz_to_lla(&self, xyz: Xyz) -> Lla;

    /// Offset of `xyz` in the tangent plane at `reference`.
    fn xyz_to_enu(&self, reference: Lla, xyz: Xyz) -> Enu;

    /// Absolute position of an offset in the tangent plane at `reference`.
    fn enu_to_xyz(&self, reference: Lla, enu: Enu) -> Xyz;

    /// Offset of `lla` in the tangent plane at `reference`.
    fn lla_to_enu(&self, reference: Lla, lla: Lla) -> Enu {
        self.xyz_to_enu(reference, self.lla_to_xyz(lla))
    }

    /// Angular position of an offset in the tangent plane at `reference`.
    fn enu_to_lla(&self, reference: Lla, enu: Enu) -> Lla {
        self.xyz_to_lla(self.enu_to_xyz(reference, enu))
    }

    /// Where `lla` appears to an observer standing at `reference`.
    fn lla_to_aer(&self, reference: Lla, lla: Lla) -> Aer {
        self.lla_to_enu(reference, lla).to_aer()
    }

    /// Locate a sighting taken by an observer standing at `reference`.
    fn aer_to_lla(&self, reference: Lla, aer: Aer) -> Lla {
        self.enu_to_lla(reference, aer.to_enu())
    }
}
