//! Recognizers for the supported textual coordinate notations.
//!
//! Each [`CoordinateFormat`] variant owns one or more compiled grammars. A
//! grammar searches forward from an offset and returns the nearest candidate
//! that converts cleanly and passes the range validator. Candidates that fail
//! either step are skipped, never reported as errors.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::angle::{
    dms_to_decimal, is_negative_hemisphere, is_sexagesimal_part, parse_decimal,
    split_compact_digits,
};
use crate::coordinate::DecimalCoordinate;
use crate::validation::validate_coordinate;

/// A recognized coordinate and the byte span `[start, end)` it occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatMatch {
    pub coord: DecimalCoordinate,
    pub start: usize,
    pub end: usize,
}

/// The closed set of supported notations.
///
/// [`CoordinateFormat::ALL`] lists them in priority order, most specific
/// first. Priority only breaks ties between matches that start at the same
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum CoordinateFormat {
    /// `51°12'32.2"S 32°34'23.1"E`
    DmsSeconds,
    /// `51°12.32'S 32°34.43'E`
    DecimalMinutes,
    /// `51°12'32.2" с.ш. 32°34'23.1" в.д.`
    RussianDms,
    /// `51°12.32' ю.ш. 32°34.43' з.д.`
    RussianDecimalMinutes,
    /// `5401N 15531W`, `N405229 E0871820`
    CompactDms,
    /// `34-24N 124-49W`
    DashedMinutes,
    /// `N12.2112 W32.434`
    HemisphereDecimal,
    /// `55,755831°, 37,617673°`
    DegreeDecimal,
    /// `N55.755831°, E37.617673°`
    HemisphereDegreeDecimal,
    /// `12.2112 -32.434`
    SignedDecimal,
}

impl CoordinateFormat {
    /// All formats in priority order.
    pub const ALL: [CoordinateFormat; 10] = [
        CoordinateFormat::DmsSeconds,
        CoordinateFormat::DecimalMinutes,
        CoordinateFormat::RussianDms,
        CoordinateFormat::RussianDecimalMinutes,
        CoordinateFormat::CompactDms,
        CoordinateFormat::DashedMinutes,
        CoordinateFormat::HemisphereDecimal,
        CoordinateFormat::DegreeDecimal,
        CoordinateFormat::HemisphereDegreeDecimal,
        CoordinateFormat::SignedDecimal,
    ];

    /// Short identifier, stable across releases.
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateFormat::DmsSeconds => "dms_seconds",
            CoordinateFormat::DecimalMinutes => "decimal_minutes",
            CoordinateFormat::RussianDms => "russian_dms",
            CoordinateFormat::RussianDecimalMinutes => "russian_decimal_minutes",
            CoordinateFormat::CompactDms => "compact_dms",
            CoordinateFormat::DashedMinutes => "dashed_minutes",
            CoordinateFormat::HemisphereDecimal => "hemisphere_decimal",
            CoordinateFormat::DegreeDecimal => "degree_decimal",
            CoordinateFormat::HemisphereDegreeDecimal => "hemisphere_degree_decimal",
            CoordinateFormat::SignedDecimal => "signed_decimal",
        }
    }

    /// Find the nearest valid occurrence of this notation at or after `from`.
    ///
    /// `from` must lie on a char boundary of `text`.
    pub fn try_match(&self, text: &str, from: usize) -> Option<FormatMatch> {
        self.grammars()
            .iter()
            .filter_map(|grammar| grammar.find(text, from))
            .min_by_key(|m| m.start)
    }

    fn grammars(&self) -> &'static [Grammar] {
        match self {
            CoordinateFormat::DmsSeconds => &DMS_SECONDS,
            CoordinateFormat::DecimalMinutes => &DECIMAL_MINUTES,
            CoordinateFormat::RussianDms => &RUSSIAN_DMS,
            CoordinateFormat::RussianDecimalMinutes => &RUSSIAN_DECIMAL_MINUTES,
            CoordinateFormat::CompactDms => &COMPACT_DMS,
            CoordinateFormat::DashedMinutes => &DASHED_MINUTES,
            CoordinateFormat::HemisphereDecimal => &HEMISPHERE_DECIMAL,
            CoordinateFormat::DegreeDecimal => &DEGREE_DECIMAL,
            CoordinateFormat::HemisphereDegreeDecimal => &HEMISPHERE_DEGREE_DECIMAL,
            CoordinateFormat::SignedDecimal => &SIGNED_DECIMAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Pattern fragments
// ---------------------------------------------------------------------------

const LAT: &str = "[NSnsСЮсю]";
const LON: &str = "[EWewВЗвз]";
const DEG: &str = "[°º]";
const MIN: &str = "['′]";
const SEC: &str = r#"(?:"|''|″)"#;
const SEP: &str = r"[,\s]+";
const UINT: &str = "([0-9]+)";
const UDEC: &str = r"([0-9]+(?:\.[0-9]+)?)";
const UDEC_COMMA: &str = r"([0-9]+(?:[.,][0-9]+)?)";
const RU_LAT: &str = r"([СЮсю]\.?\s?ш\.?|[СЮ])";
const RU_LON: &str = r"([ВЗвз]\.?\s?д\.?|[ВЗ])";

fn compile(pattern: String) -> Regex {
    // Patterns are assembled from the constant fragments above.
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid coordinate pattern {pattern}: {e}"))
}

static DMS_SECONDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"{UINT}{DEG}\s?{UINT}{MIN}\s?{UDEC_COMMA}{SEC}?\s?({LAT}){SEP}{UINT}{DEG}\s?{UINT}{MIN}\s?{UDEC_COMMA}{SEC}?\s?({LON})"
    ))
});

static DECIMAL_MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"{UINT}{DEG}\s?{UDEC}{MIN}\s?({LAT}){SEP}{UINT}{DEG}\s?{UDEC}{MIN}\s?({LON})"
    ))
});

static RUSSIAN_DMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"{UINT}{DEG}\s?{UINT}{MIN}\s?{UDEC_COMMA}{SEC}?\s*{RU_LAT}{SEP}{UINT}{DEG}\s?{UINT}{MIN}\s?{UDEC_COMMA}{SEC}?\s*{RU_LON}"
    ))
});

static RUSSIAN_DECIMAL_MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"{UINT}{DEG}\s?{UDEC_COMMA}{MIN}\s*{RU_LAT}{SEP}{UINT}{DEG}\s?{UDEC_COMMA}{MIN}\s*{RU_LON}"
    ))
});

static COMPACT_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(r"([0-9]{{2,6}})({LAT})\s+([0-9]{{2,7}})({LON})"))
});

static COMPACT_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(r"({LAT})([0-9]{{2,6}})\s+({LON})([0-9]{{2,7}})"))
});

static DASHED_MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(r"{UINT}-{UINT}({LAT}){SEP}{UINT}-{UINT}({LON})"))
});

static HEMISPHERE_DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(r"({LAT}){UDEC}\s+({LON}){UDEC}"))
});

static DEGREE_DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(
        r"(-?[0-9]+[.,][0-9]+){DEG}{SEP}(-?[0-9]+[.,][0-9]+){DEG}"
    ))
});

static HEMISPHERE_DEGREE_DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(format!(r"({LAT}){UDEC_COMMA}{DEG}?{SEP}({LON}){UDEC_COMMA}{DEG}?"))
});

static SIGNED_DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(-?[0-9]+\.[0-9]+)(?:\s*,\s*|\s+)(-?[0-9]+\.[0-9]+)".to_string())
});

// ---------------------------------------------------------------------------
// Grammars
// ---------------------------------------------------------------------------

type Converter = fn(&Captures<'_>) -> Option<(f64, f64)>;

/// One compiled pattern plus the conversion of its capture groups.
struct Grammar {
    pattern: &'static LazyLock<Regex>,
    convert: Converter,
}

impl Grammar {
    /// Nearest accepted candidate starting at or after `from`.
    ///
    /// After a rejected candidate the search resumes past the token run it
    /// started in, since every later start inside that run is glued to the
    /// char before it. Each token is therefore rescanned a bounded number of
    /// times, however long it is.
    fn find(&self, text: &str, from: usize) -> Option<FormatMatch> {
        let mut at = from;
        while at < text.len() {
            let caps = self.pattern.captures_at(text, at)?;
            let whole = caps.get(0)?;
            let (start, end) = (whole.start(), whole.end());
            let clean_start = starts_cleanly(text, start);
            if clean_start && ends_cleanly(text, end) {
                if let Some((lat, lon)) = (self.convert)(&caps) {
                    let coord = DecimalCoordinate::new(lat, lon);
                    if validate_coordinate(&coord) {
                        return Some(FormatMatch { coord, start, end });
                    }
                }
            }
            at = if clean_start {
                next_char_boundary(text, start)
            } else {
                end_of_token_run(text, start).max(next_char_boundary(text, start))
            };
        }
        None
    }
}

static DMS_SECONDS: [Grammar; 1] = [Grammar {
    pattern: &DMS_SECONDS_RE,
    convert: sexagesimal_pair,
}];

static DECIMAL_MINUTES: [Grammar; 1] = [Grammar {
    pattern: &DECIMAL_MINUTES_RE,
    convert: minutes_pair,
}];

static RUSSIAN_DMS: [Grammar; 1] = [Grammar {
    pattern: &RUSSIAN_DMS_RE,
    convert: sexagesimal_pair,
}];

static RUSSIAN_DECIMAL_MINUTES: [Grammar; 1] = [Grammar {
    pattern: &RUSSIAN_DECIMAL_MINUTES_RE,
    convert: minutes_pair,
}];

static COMPACT_DMS: [Grammar; 2] = [
    Grammar {
        pattern: &COMPACT_SUFFIX_RE,
        convert: compact_suffix_pair,
    },
    Grammar {
        pattern: &COMPACT_PREFIX_RE,
        convert: compact_prefix_pair,
    },
];

static DASHED_MINUTES: [Grammar; 1] = [Grammar {
    pattern: &DASHED_MINUTES_RE,
    convert: minutes_pair,
}];

static HEMISPHERE_DECIMAL: [Grammar; 1] = [Grammar {
    pattern: &HEMISPHERE_DECIMAL_RE,
    convert: prefixed_decimal_pair,
}];

static DEGREE_DECIMAL: [Grammar; 1] = [Grammar {
    pattern: &DEGREE_DECIMAL_RE,
    convert: signed_pair,
}];

static HEMISPHERE_DEGREE_DECIMAL: [Grammar; 1] = [Grammar {
    pattern: &HEMISPHERE_DEGREE_DECIMAL_RE,
    convert: prefixed_decimal_pair,
}];

static SIGNED_DECIMAL: [Grammar; 1] = [Grammar {
    pattern: &SIGNED_DECIMAL_RE,
    convert: signed_pair,
}];

// ---------------------------------------------------------------------------
// Capture conversion
// ---------------------------------------------------------------------------

fn group<'t>(caps: &Captures<'t>, index: usize) -> Option<&'t str> {
    caps.get(index).map(|m| m.as_str())
}

fn number(caps: &Captures<'_>, index: usize) -> Option<f64> {
    parse_decimal(group(caps, index)?)
}

/// One angle from degree, optional minute and second groups, and an optional
/// hemisphere group.
fn angle(
    caps: &Captures<'_>,
    degrees: usize,
    minutes: Option<usize>,
    seconds: Option<usize>,
    hemisphere: Option<usize>,
) -> Option<f64> {
    let deg = number(caps, degrees)?;
    let min = match minutes {
        Some(i) => number(caps, i)?,
        None => 0.0,
    };
    let sec = match seconds {
        Some(i) => number(caps, i)?,
        None => 0.0,
    };
    if !is_sexagesimal_part(min) || !is_sexagesimal_part(sec) {
        return None;
    }
    let negative = match hemisphere {
        Some(i) => is_negative_hemisphere(group(caps, i)?),
        None => false,
    };
    Some(dms_to_decimal(deg, min, sec, negative))
}

fn compact(caps: &Captures<'_>, digits: usize, hemisphere: usize, degree_digits: usize) -> Option<f64> {
    let (deg, min, sec) = split_compact_digits(group(caps, digits)?, degree_digits)?;
    if !is_sexagesimal_part(min) || !is_sexagesimal_part(sec) {
        return None;
    }
    Some(dms_to_decimal(
        deg,
        min,
        sec,
        is_negative_hemisphere(group(caps, hemisphere)?),
    ))
}

/// Groups: deg, min, sec, hemisphere for latitude, then the same for longitude.
fn sexagesimal_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((
        angle(c, 1, Some(2), Some(3), Some(4))?,
        angle(c, 5, Some(6), Some(7), Some(8))?,
    ))
}

/// Groups: deg, min, hemisphere for latitude, then the same for longitude.
fn minutes_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((
        angle(c, 1, Some(2), None, Some(3))?,
        angle(c, 4, Some(5), None, Some(6))?,
    ))
}

fn compact_suffix_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((compact(c, 1, 2, 2)?, compact(c, 3, 4, 3)?))
}

fn compact_prefix_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((compact(c, 2, 1, 2)?, compact(c, 4, 3, 3)?))
}

/// Groups: hemisphere, value for latitude, then the same for longitude.
fn prefixed_decimal_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((
        angle(c, 2, None, None, Some(1))?,
        angle(c, 4, None, None, Some(3))?,
    ))
}

fn signed_pair(c: &Captures<'_>) -> Option<(f64, f64)> {
    Some((number(c, 1)?, number(c, 2)?))
}

// ---------------------------------------------------------------------------
// Text helpers
// ---------------------------------------------------------------------------

/// Offset of the char after the one starting at `offset`.
pub(crate) fn next_char_boundary(text: &str, offset: usize) -> usize {
    offset + text[offset..].chars().next().map_or(1, char::len_utf8)
}

fn is_token_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.'
}

/// Offset of the first char at or after `offset` that is not a letter, digit
/// or `.`.
fn end_of_token_run(text: &str, offset: usize) -> usize {
    text[offset..]
        .char_indices()
        .find(|&(_, c)| !is_token_char(c))
        .map_or(text.len(), |(i, _)| offset + i)
}

/// A candidate must not begin inside a longer token: no letter, digit or `.`
/// directly before it.
fn starts_cleanly(text: &str, start: usize) -> bool {
    !text[..start].chars().next_back().is_some_and(is_token_char)
}

/// A candidate must not end inside a number: no digit (or `.digit`) directly
/// after it.
fn ends_cleanly(text: &str, end: usize) -> bool {
    let mut after = text[end..].chars();
    match after.next() {
        Some(c) if c.is_ascii_digit() => false,
        Some('.') => !after.next().is_some_and(|c| c.is_ascii_digit()),
        _ => true,
    }
}
