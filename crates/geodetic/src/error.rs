//! Error types for geodetic operations.

use std::fmt;

use crate::units::Meters;

/// Result type for geodetic operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in geodetic operations.
///
/// Coordinate conversions are total and never fail; only operations built on
/// a simplifying assumption reject inputs that violate it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A spherical-surface computation was given a point off the surface.
    InvalidAltitude {
        /// The offending altitude.
        altitude: Meters,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAltitude { altitude } => {
                write!(f, "haversine distance requires zero altitude, got {altitude}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidAltitude {
            altitude: Meters(10.0),
        };
        assert_eq!(
            err.to_string(),
            "haversine distance requires zero altitude, got 10 m"
        );
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidAltitude {
            altitude: Meters(-1.5),
        });
        assert!(err.source().is_none());
        assert!(err.to_string().contains("-1.5 m"));
    }
}
