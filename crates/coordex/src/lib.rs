//! coordex: extract geographic coordinates from free text.
//!
//! This is the public API facade. It re-exports the types of
//! [`coordex_core`] and adds the request pipeline: input checks, extraction,
//! geometry classification and the summary message.
//!
//! # Architecture
//!
//! - **coordex-core**: notations, extraction, geometry classification
//! - **coordex** (this crate): input validation and [`ExtractionResult`] assembly
//! - **coordex-server**: the `coordex` binary (HTTP service and one-shot CLI)
//!
//! ```
//! let result = coordex::extract("Point A: N12.2112 W32.434").unwrap();
//! assert_eq!(result.coordinates.len(), 1);
//! assert_eq!(result.coordinates[0].name, "Point A");
//! assert_eq!(result.message, "Successfully extracted 1 coordinate(s)");
//! ```

pub mod error;

pub use coordex_core;
pub use coordex_core::{
    ClaimedSpans, CoordinateError, CoordinateFormat, DecimalCoordinate, ExtractOptions,
    ExtractedCoordinate, ExtractionResult, GeometryType, classify, extract_coordinates,
    validate_coordinate,
};
pub use error::InputError;

/// Largest accepted input, in bytes.
pub const MAX_INPUT_BYTES: usize = 1_000_000;

/// Message reported when a text contains no coordinates.
pub const NO_COORDINATES_MESSAGE: &str = "No valid coordinates found in text";

/// Check that `text` is non-empty and within [`MAX_INPUT_BYTES`].
pub fn validate_input(text: &str) -> Result<(), InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if text.len() > MAX_INPUT_BYTES {
        return Err(InputError::TooLarge {
            limit: MAX_INPUT_BYTES,
        });
    }
    Ok(())
}

/// Extract and classify with default options.
pub fn extract(text: &str) -> Result<ExtractionResult, InputError> {
    extract_with_options(text, &ExtractOptions::default())
}

/// Validate `text`, extract its coordinates and classify them.
///
/// Finding nothing is not an error: the result is empty, its geometry is
/// [`GeometryType::Unknown`] and the message says so.
pub fn extract_with_options(
    text: &str,
    options: &ExtractOptions,
) -> Result<ExtractionResult, InputError> {
    validate_input(text)?;

    let coordinates = extract_coordinates(text, options);
    let geometry_type = classify(&coordinates);
    let message = result_message(coordinates.len());

    #[cfg(feature = "tracing")]
    tracing::info!(
        bytes = text.len(),
        coordinates = coordinates.len(),
        geometry = %geometry_type,
        "extraction complete"
    );

    Ok(ExtractionResult {
        coordinates,
        geometry_type,
        message,
    })
}

/// Like [`extract_with_options`], for raw bytes that must be UTF-8.
///
/// Size is checked before decoding so oversized bodies are refused without
/// a UTF-8 scan.
pub fn extract_bytes(
    bytes: &[u8],
    options: &ExtractOptions,
) -> Result<ExtractionResult, InputError> {
    if bytes.len() > MAX_INPUT_BYTES {
        return Err(InputError::TooLarge {
            limit: MAX_INPUT_BYTES,
        });
    }
    let text = std::str::from_utf8(bytes).map_err(|_| InputError::InvalidUtf8)?;
    extract_with_options(text, options)
}

/// Summary line for a result with `count` coordinates.
pub fn result_message(count: usize) -> String {
    if count == 0 {
        NO_COORDINATES_MESSAGE.to_string()
    } else {
        format!("Successfully extracted {count} coordinate(s)")
    }
}
