//! coordex-core: coordinate recognition and geometry classification.
//!
//! This crate finds latitude/longitude pairs written in free text, converts
//! them to decimal degrees, and infers whether the resulting set describes
//! isolated points, a line, or a closed polygon. It has no I/O and keeps no
//! state between calls.
//!
//! ```
//! use coordex_core::{ExtractOptions, GeometryType, classify, extract_coordinates};
//!
//! let text = "55.7558, 37.6176 55.7600, 37.6200 55.7558, 37.6176";
//! let coords = extract_coordinates(text, &ExtractOptions::default());
//! assert_eq!(coords.len(), 3);
//! assert_eq!(classify(&coords), GeometryType::Polygon);
//! ```

pub mod angle;
pub mod coordinate;
pub mod error;
pub mod extractor;
pub mod formats;
pub mod geometry;
pub mod spans;
pub mod validation;

pub use angle::{dms_to_decimal, is_negative_hemisphere, parse_decimal};
pub use coordinate::{DecimalCoordinate, ExtractedCoordinate, ExtractionResult, GeometryType};
pub use error::CoordinateError;
pub use extractor::{ExtractOptions, context_around, extract_coordinates, label_before};
pub use formats::{CoordinateFormat, FormatMatch};
pub use geometry::classify;
pub use spans::ClaimedSpans;
pub use validation::{check_coordinate, is_valid_latitude, is_valid_longitude, validate_coordinate};
