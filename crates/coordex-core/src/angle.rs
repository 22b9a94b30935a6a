//! Angular unit conversion and hemisphere sign rules.

/// Convert degrees, minutes, and seconds to decimal degrees.
///
/// The sign is applied after conversion, so `negative` flips the whole value.
pub fn dms_to_decimal(degrees: f64, minutes: f64, seconds: f64, negative: bool) -> f64 {
    let decimal = degrees + minutes / 60.0 + seconds / 3600.0;
    if negative { -decimal } else { decimal }
}

/// Whether a hemisphere indicator denotes a negative coordinate.
///
/// Only the first letter matters, case-insensitively: `S`/`W` (Latin) and
/// `Ю`/`З` (Cyrillic, south/west) are negative. Everything else, including an
/// empty indicator, is positive.
pub fn is_negative_hemisphere(indicator: &str) -> bool {
    matches!(
        indicator.chars().next(),
        Some('S' | 's' | 'W' | 'w' | 'Ю' | 'ю' | 'З' | 'з')
    )
}

/// Parse a decimal numeral that may use a comma as its fractional mark.
pub fn parse_decimal(token: &str) -> Option<f64> {
    let value = if token.contains(',') {
        token.replace(',', ".").parse::<f64>().ok()?
    } else {
        token.parse::<f64>().ok()?
    };
    value.is_finite().then_some(value)
}

/// Minutes and seconds components must be below 60.
pub(crate) fn is_sexagesimal_part(value: f64) -> bool {
    (0.0..60.0).contains(&value)
}

/// Degrees, minutes, seconds from a run of digits with implied field widths.
///
/// `degree_digits` is 2 for latitude and 3 for longitude. A run of exactly
/// `degree_digits` (or 2 for longitude) is whole degrees; two more digits add
/// minutes; two more again add seconds. Any other length is malformed.
pub(crate) fn split_compact_digits(digits: &str, degree_digits: usize) -> Option<(f64, f64, f64)> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let field = |range: std::ops::Range<usize>| digits[range].parse::<f64>().ok();
    let len = digits.len();
    if len == degree_digits || (degree_digits == 3 && len == 2) {
        return Some((field(0..len)?, 0.0, 0.0));
    }
    if len == degree_digits + 2 {
        return Some((
            field(0..degree_digits)?,
            field(degree_digits..len)?,
            0.0,
        ));
    }
    if len == degree_digits + 4 {
        return Some((
            field(0..degree_digits)?,
            field(degree_digits..degree_digits + 2)?,
            field(degree_digits + 2..len)?,
        ));
    }
    None
}
