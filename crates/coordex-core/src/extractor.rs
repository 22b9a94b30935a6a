//! Scanning a text for coordinates and annotating each accepted match.

use std::sync::LazyLock;

use regex::Regex;

use crate::coordinate::ExtractedCoordinate;
use crate::formats::{CoordinateFormat, FormatMatch, next_char_boundary};
use crate::spans::ClaimedSpans;

/// Options controlling coordinate extraction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtractOptions {
    /// Maximum number of characters kept in each context excerpt (default: 200).
    pub max_context_chars: usize,
    /// Number of characters before a match searched for its label (default: 100).
    pub name_window_chars: usize,
    /// Enabled notations, in priority order (default: [`CoordinateFormat::ALL`]).
    pub formats: Vec<CoordinateFormat>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_context_chars: 200,
            name_window_chars: 100,
            formats: CoordinateFormat::ALL.to_vec(),
        }
    }
}

/// What a matcher last reported for the current scan.
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    /// Not asked yet, or the cached match fell behind the scan offset.
    Stale,
    /// Nothing at or after the offset it was asked from.
    Exhausted,
    Found(FormatMatch),
}

/// Extract every coordinate in `text`.
///
/// The scan keeps one lookahead per enabled format. At each offset the
/// candidate with the smallest start wins, ties going to the format listed
/// first in `options.formats`. The winner's span is claimed and the scan
/// resumes at its end, so accepted spans are disjoint and come out sorted by
/// position.
///
/// A format that found nothing once will find nothing further along, so it
/// is not asked again.
pub fn extract_coordinates(text: &str, options: &ExtractOptions) -> Vec<ExtractedCoordinate> {
    let mut found = Vec::new();
    let mut claimed = ClaimedSpans::new();
    let breaks = SentenceBreaks::new(text);
    let mut lookahead = vec![Lookahead::Stale; options.formats.len()];
    let mut offset = 0;

    while offset < text.len() {
        let mut any_candidate = false;
        let mut best: Option<FormatMatch> = None;

        for (slot, format) in lookahead.iter_mut().zip(&options.formats) {
            let candidate = match *slot {
                Lookahead::Found(m) if m.start >= offset => Some(m),
                Lookahead::Exhausted => None,
                _ => {
                    let next = format.try_match(text, offset);
                    *slot = next.map_or(Lookahead::Exhausted, Lookahead::Found);
                    next
                }
            };
            let Some(m) = candidate else { continue };
            any_candidate = true;
            if claimed.overlaps(m.start, m.end) {
                continue;
            }
            if best.is_none_or(|b| m.start < b.start) {
                best = Some(m);
            }
        }

        if !any_candidate {
            break;
        }
        let Some(m) = best else {
            offset = next_char_boundary(text, offset);
            continue;
        };

        claimed.claim(m.start, m.end);
        found.push(ExtractedCoordinate {
            coord: m.coord,
            position: m.start,
            original_format: text[m.start..m.end].to_string(),
            context: breaks.context(text, m.start, m.end, options.max_context_chars),
            name: label_before(text, m.start, options.name_window_chars),
        });
        offset = m.end;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        text_len = text.len(),
        coordinates = found.len(),
        "coordinate extraction finished"
    );

    found
}

fn is_sentence_delimiter(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\n')
}

/// Sorted byte offsets of the sentence delimiters in a text.
///
/// Built once per extraction so that finding the sentence around a match is
/// a binary search rather than a scan to the nearest delimiter.
struct SentenceBreaks(Vec<usize>);

impl SentenceBreaks {
    fn new(text: &str) -> Self {
        Self(
            text.char_indices()
                .filter(|&(_, c)| is_sentence_delimiter(c))
                .map(|(i, _)| i)
                .collect(),
        )
    }

    /// Bounds of the sentence holding `[start, end)`: just after the last
    /// delimiter before `start`, through the first delimiter at or after
    /// `end`.
    fn sentence(&self, text_len: usize, start: usize, end: usize) -> (usize, usize) {
        // Delimiters are ASCII, so `i + 1` stays on a char boundary.
        let before = self.0.partition_point(|&i| i < start);
        let left = before.checked_sub(1).map_or(0, |k| self.0[k] + 1);
        let after = self.0.partition_point(|&i| i < end);
        let right = self.0.get(after).map_or(text_len, |&i| i + 1);
        (left, right)
    }

    fn context(&self, text: &str, start: usize, end: usize, max_chars: usize) -> String {
        let (left, right) = self.sentence(text.len(), start, end);
        let sentence = &text[left..right];
        let clipped = match sentence.char_indices().nth(max_chars) {
            Some((cut, _)) => &sentence[..cut],
            None => sentence,
        };
        clipped.trim().to_string()
    }
}

/// The sentence around `[start, end)`, clipped to `max_chars` characters.
///
/// The excerpt starts just after the last delimiter before `start` and runs
/// through the first delimiter at or after `end`.
pub fn context_around(text: &str, start: usize, end: usize, max_chars: usize) -> String {
    SentenceBreaks::new(text).context(text, start, end, max_chars)
}

static KEYWORD_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:точка|point|angle|угол|цель)[^\n:]{0,30}:")
        .unwrap_or_else(|e| panic!("invalid label pattern: {e}"))
});

static CAPE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[а-яёa-z\s]*(?:мыс|cape)[^\n:]{0,30}:")
        .unwrap_or_else(|e| panic!("invalid label pattern: {e}"))
});

/// The label closest to a match starting at `start`, or an empty string.
///
/// Only the `window_chars` characters before `start` are searched. Keyword
/// labels (`Point A:`, `угол 3:`) take precedence over cape names
/// (`Cape Horn:`).
pub fn label_before(text: &str, start: usize, window_chars: usize) -> String {
    if window_chars == 0 {
        return String::new();
    }
    let prefix = &text[..start];
    let window_start = prefix
        .char_indices()
        .rev()
        .nth(window_chars - 1)
        .map_or(0, |(i, _)| i);
    let window = &prefix[window_start..];

    KEYWORD_LABEL
        .find_iter(window)
        .last()
        .or_else(|| CAPE_LABEL.find_iter(window).last())
        .map(|m| m.as_str().trim_end_matches(':').trim().to_string())
        .unwrap_or_default()
}
