//! Error types for coordinate validation.
//!
//! Recognition itself never fails loudly: a matcher that cannot convert or
//! range-check a candidate reports no match. [`CoordinateError`] exists for
//! callers that want the reason a standalone coordinate was rejected.

use thiserror::Error;

/// Why a [`DecimalCoordinate`](crate::DecimalCoordinate) failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    /// The coordinate is the unparsed sentinel.
    #[error("Invalid coordinate format")]
    Unparsed,

    /// Latitude outside `[-90, 90]`.
    #[error("Latitude out of range [-90, 90]: {0:.6}")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]`.
    #[error("Longitude out of range [-180, 180]: {0:.6}")]
    LongitudeOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsed_message() {
        assert_eq!(
            CoordinateError::Unparsed.to_string(),
            "Invalid coordinate format"
        );
    }

    #[test]
    fn latitude_message_has_six_decimals() {
        let err = CoordinateError::LatitudeOutOfRange(200.5);
        assert_eq!(
            err.to_string(),
            "Latitude out of range [-90, 90]: 200.500000"
        );
    }

    #[test]
    fn longitude_message() {
        let err = CoordinateError::LongitudeOutOfRange(-181.0);
        assert_eq!(
            err.to_string(),
            "Longitude out of range [-180, 180]: -181.000000"
        );
    }
}
