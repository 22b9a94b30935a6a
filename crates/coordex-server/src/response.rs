//! JSON documents returned by the service and by `--input`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use coordex::{ExtractedCoordinate, ExtractionResult, GeometryType, InputError};
use serde::{Deserialize, Serialize, Serializer};

/// One coordinate as reported to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CoordinateEntry {
    #[serde(serialize_with = "six_decimals")]
    pub latitude: f64,
    #[serde(serialize_with = "six_decimals")]
    pub longitude: f64,
    pub original_format: String,
    pub context: String,
    pub name: String,
}

impl From<ExtractedCoordinate> for CoordinateEntry {
    fn from(c: ExtractedCoordinate) -> Self {
        Self {
            latitude: c.coord.latitude,
            longitude: c.coord.longitude,
            original_format: c.original_format,
            context: c.context,
            name: c.name,
        }
    }
}

/// Successful extraction document.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionResponse {
    pub geometry_type: GeometryType,
    pub coordinates_count: usize,
    pub coordinates: Vec<CoordinateEntry>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl From<ExtractionResult> for ExtractionResponse {
    fn from(result: ExtractionResult) -> Self {
        Self {
            geometry_type: result.geometry_type,
            coordinates_count: result.coordinates.len(),
            coordinates: result.coordinates.into_iter().map(Into::into).collect(),
            message: result.message,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Round to 6 decimal places and write a plain JSON number.
///
/// The number is printed in shortest form, so `55.0` stays `55.0` rather than
/// `55.000000`. Both parse to the same value.
fn six_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 1e6).round() / 1e6)
}

/// An error payload with the status it is sent under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        let status = match err {
            InputError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            InputError::Empty | InputError::InvalidUtf8 => StatusCode::BAD_REQUEST,
        };
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
