//! Range checks for decimal coordinates.

use crate::coordinate::DecimalCoordinate;
use crate::error::CoordinateError;

/// `true` if `lat` lies in `[-90, 90]`. NaN is rejected.
pub fn is_valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// `true` if `lon` lies in `[-180, 180]`. NaN is rejected.
pub fn is_valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// `true` if the coordinate was parsed and both components are in range.
pub fn validate_coordinate(coord: &DecimalCoordinate) -> bool {
    check_coordinate(coord).is_ok()
}

/// Like [`validate_coordinate`], but reports the first violated condition.
///
/// The unparsed sentinel is reported before latitude, latitude before longitude.
pub fn check_coordinate(coord: &DecimalCoordinate) -> Result<(), CoordinateError> {
    if !coord.valid {
        return Err(CoordinateError::Unparsed);
    }
    if !is_valid_latitude(coord.latitude) {
        return Err(CoordinateError::LatitudeOutOfRange(coord.latitude));
    }
    if !is_valid_longitude(coord.longitude) {
        return Err(CoordinateError::LongitudeOutOfRange(coord.longitude));
    }
    Ok(())
}
