//! Shape inference over an ordered list of extracted coordinates.

use crate::coordinate::{DecimalCoordinate, ExtractedCoordinate, GeometryType};

/// First and last points closer than this close the ring.
const CLOSURE_TOLERANCE: f64 = 0.0001;
/// A first segment shorter than this has no usable direction.
const MIN_SEGMENT_LENGTH: f64 = 0.0001;
/// Maximum perpendicular deviation from the first segment's line.
const COLLINEAR_TOLERANCE: f64 = 0.01;
/// A path whose ends are nearer than this fraction of its length looks closed.
const NEAR_CLOSED_RATIO: f64 = 0.2;

const POLYGON_KEYWORDS: &[&str] = &[
    "polygon",
    "полигон",
    "perimeter",
    "периметр",
    "closed",
    "замкнут",
    "angle",
    "угол",
    "vertex",
    "вершин",
];

const LINE_KEYWORDS: &[&str] = &["line", "линия", "route", "маршрут"];

/// Classify coordinates (in extraction order) as points, a line, or a polygon.
///
/// Fewer than three coordinates are decided by count alone. For three or
/// more, in order:
/// 1. first and last coincide: polygon;
/// 2. every point lies on the line through the first two: line;
/// 3. the path nearly returns to its start: the first context mentioning a
///    polygon or line keyword decides, defaulting to polygon;
/// 4. otherwise points.
pub fn classify(coordinates: &[ExtractedCoordinate]) -> GeometryType {
    let (first, last) = match coordinates {
        [] => return GeometryType::Unknown,
        [_] => return GeometryType::Points,
        [_, _] => return GeometryType::Line,
        [first, .., last] => (first, last),
    };

    let closure = first.coord.distance(&last.coord);
    if closure < CLOSURE_TOLERANCE {
        return GeometryType::Polygon;
    }

    let points: Vec<DecimalCoordinate> = coordinates.iter().map(|c| c.coord).collect();
    if is_collinear(&points) {
        return GeometryType::Line;
    }

    let in_text_order = coordinates
        .windows(2)
        .all(|pair| pair[0].position <= pair[1].position);
    if in_text_order && closure <= NEAR_CLOSED_RATIO * path_length(&points) {
        return keyword_hint(coordinates).unwrap_or(GeometryType::Polygon);
    }

    GeometryType::Points
}

/// Whether every point is within tolerance of the line through the first two.
fn is_collinear(points: &[DecimalCoordinate]) -> bool {
    let [a, b, rest @ ..] = points else {
        return false;
    };
    let dx = b.latitude - a.latitude;
    let dy = b.longitude - a.longitude;
    let len = (dx * dx + dy * dy).sqrt();
    if len < MIN_SEGMENT_LENGTH {
        return false;
    }
    let (dx, dy) = (dx / len, dy / len);
    rest.iter().all(|p| {
        let vx = p.latitude - a.latitude;
        let vy = p.longitude - a.longitude;
        (vx * dy - vy * dx).abs() <= COLLINEAR_TOLERANCE
    })
}

/// Sum of consecutive segment lengths.
fn path_length(points: &[DecimalCoordinate]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// The shape named by the first context that mentions one.
fn keyword_hint(coordinates: &[ExtractedCoordinate]) -> Option<GeometryType> {
    coordinates.iter().find_map(|c| {
        let context = c.context.to_lowercase();
        if POLYGON_KEYWORDS.iter().any(|k| context.contains(k)) {
            Some(GeometryType::Polygon)
        } else if LINE_KEYWORDS.iter().any(|k| context.contains(k)) {
            Some(GeometryType::Line)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: usize, lat: f64, lon: f64, context: &str) -> ExtractedCoordinate {
        ExtractedCoordinate {
            coord: DecimalCoordinate::new(lat, lon),
            position,
            original_format: String::new(),
            context: context.to_string(),
            name: String::new(),
        }
    }

    fn points(coords: &[(f64, f64)]) -> Vec<ExtractedCoordinate> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| at(i * 10, lat, lon, ""))
            .collect()
    }

    #[test]
    fn counts_below_three() {
        assert_eq!(classify(&[]), GeometryType::Unknown);
        assert_eq!(classify(&points(&[(1.0, 2.0)])), GeometryType::Points);
        assert_eq!(
            classify(&points(&[(1.0, 2.0), (50.0, 60.0)])),
            GeometryType::Line
        );
    }

    #[test]
    fn closed_ring_is_polygon() {
        let ring = points(&[(55.7558, 37.6176), (55.7600, 37.6200), (55.7558, 37.6176)]);
        assert_eq!(classify(&ring), GeometryType::Polygon);
    }

    #[test]
    fn straight_path_is_line() {
        let path = points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.005), (5.0, 5.0)]);
        assert_eq!(classify(&path), GeometryType::Line);
    }

    #[test]
    fn degenerate_first_segment_is_not_collinear() {
        let pts = [
            DecimalCoordinate::new(1.0, 1.0),
            DecimalCoordinate::new(1.0, 1.00001),
            DecimalCoordinate::new(3.0, 3.0),
        ];
        assert!(!is_collinear(&pts));
    }

    #[test]
    fn scattered_points() {
        let pts = points(&[(0.0, 0.0), (10.0, 3.0), (-4.0, 20.0), (30.0, -8.0)]);
        assert_eq!(classify(&pts), GeometryType::Points);
    }

    #[test]
    fn near_closed_defaults_to_polygon() {
        // Square that stops just short of its start.
        let pts = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.1, 0.0)]);
        assert_eq!(classify(&pts), GeometryType::Polygon);
    }

    #[test]
    fn near_closed_with_route_keyword_is_line() {
        let mut pts = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.1, 0.0)]);
        pts[0].context = "Маршрут патруля начинается здесь".to_string();
        assert_eq!(classify(&pts), GeometryType::Line);
    }

    #[test]
    fn first_keyword_hit_wins() {
        let mut pts = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.1, 0.0)]);
        pts[1].context = "the route goes north".to_string();
        pts[3].context = "the perimeter closes".to_string();
        assert_eq!(classify(&pts), GeometryType::Line);
    }

    #[test]
    fn polygon_keyword_checked_before_line_in_same_context() {
        let mut pts = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.1, 0.0)]);
        pts[0].context = "Route along the PERIMETER".to_string();
        assert_eq!(classify(&pts), GeometryType::Polygon);
    }

    #[test]
    fn out_of_order_positions_skip_keyword_tier() {
        let mut pts = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.1, 0.0)]);
        pts[2].position = 0;
        pts[0].context = "route".to_string();
        assert_eq!(classify(&pts), GeometryType::Points);
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [
            DecimalCoordinate::new(0.0, 0.0),
            DecimalCoordinate::new(3.0, 4.0),
            DecimalCoordinate::new(3.0, 0.0),
        ];
        assert!((path_length(&pts) - 9.0).abs() < 1e-12);
    }
}
