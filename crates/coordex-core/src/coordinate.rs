//! Coordinate data types shared by the matchers, extractor, and geometry analyzer.

use std::fmt;
use std::ops::Range;

/// A latitude/longitude pair in decimal degrees.
///
/// `valid == false` marks a coordinate that has not been parsed; such a value
/// is never meaningful even if its fields happen to be in range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecimalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
    pub valid: bool,
}

impl DecimalCoordinate {
    /// Create a parsed coordinate. Range checks are the validator's job.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            valid: true,
        }
    }

    /// The "not yet parsed" sentinel.
    pub fn unparsed() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            valid: false,
        }
    }

    /// Planar distance in degrees. Good enough for closure and collinearity
    /// heuristics; not a geodesic distance.
    pub fn distance(&self, other: &DecimalCoordinate) -> f64 {
        let dlat = self.latitude - other.latitude;
        let dlon = self.longitude - other.longitude;
        (dlat * dlat + dlon * dlon).sqrt()
    }
}

impl Default for DecimalCoordinate {
    fn default() -> Self {
        Self::unparsed()
    }
}

/// A coordinate recognized in source text, with its location and annotations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractedCoordinate {
    /// The converted coordinate.
    pub coord: DecimalCoordinate,
    /// Byte offset of the match start in the source text (a char boundary).
    pub position: usize,
    /// The matched text, verbatim.
    pub original_format: String,
    /// Sentence-scoped excerpt around the match.
    pub context: String,
    /// Label recovered from the text preceding the match; may be empty.
    pub name: String,
}

impl ExtractedCoordinate {
    /// Byte span `[position, position + original_format.len())` in the source.
    pub fn span(&self) -> Range<usize> {
        self.position..self.position + self.original_format.len()
    }
}

/// Shape inferred from an ordered set of coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum GeometryType {
    /// Isolated or unordered points.
    Points,
    /// An open path.
    Line,
    /// A closed ring.
    Polygon,
    /// Nothing to classify.
    #[default]
    Unknown,
}

impl GeometryType {
    /// Lowercase name as used in responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Points => "points",
            GeometryType::Line => "line",
            GeometryType::Polygon => "polygon",
            GeometryType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything produced for one input text.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractionResult {
    /// Accepted coordinates in ascending `position` order.
    pub coordinates: Vec<ExtractedCoordinate>,
    pub geometry_type: GeometryType,
    pub message: String,
}
