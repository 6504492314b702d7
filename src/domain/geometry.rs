//! Planar geometry helpers
//!
//! `centroid` is the vertex average, not the area-weighted polygon centroid.
//! Zone coverage and placement both measure from this point.

use crate::domain::error::GeometryError;
use crate::domain::types::{Dimensions, Point};

/// Arithmetic mean of the polygon's vertices
pub fn centroid(polygon: &[Point]) -> Result<Point, GeometryError> {
    if polygon.is_empty() {
        return Err(GeometryError::EmptyPolygon);
    }
    if let Some(index) = polygon.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate { index });
    }

    let n = polygon.len() as f64;
    let (sum_x, sum_y) = polygon.iter().fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point::new(sum_x / n, sum_y / n))
}

#[inline]
pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Clamp a point into `[margin, width - margin] x [margin, height - margin]`
///
/// When the margin exceeds half a side, that axis collapses onto its midpoint.
pub fn clamp_to_bounds(point: Point, dims: Dimensions, margin: f64) -> Point {
    Point::new(clamp_axis(point.x, dims.width, margin), clamp_axis(point.y, dims.height, margin))
}

fn clamp_axis(value: f64, extent: f64, margin: f64) -> f64 {
    let lo = margin.max(0.0);
    let hi = extent - lo;
    if lo > hi {
        return extent / 2.0;
    }
    value.clamp(lo, hi)
}

/// Bearing from `from` to `to` in degrees, in `(-180, 180]`
#[inline]
pub fn bearing_deg(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Smallest absolute difference between two angles, in `[0, 180]`
pub fn angular_difference_deg(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Vec<Point> {
        vec![
            Point::new(50.0, 20.0),
            Point::new(200.0, 20.0),
            Point::new(200.0, 100.0),
            Point::new(50.0, 100.0),
        ]
    }

    #[test]
    fn test_centroid_of_rectangle() {
        assert_eq!(centroid(&rect()).unwrap(), Point::new(125.0, 60.0));
    }

    #[test]
    fn test_centroid_is_vertex_average_not_area_weighted() {
        // Extra vertex on one edge pulls the vertex average but not the area centroid
        let poly = vec![
            Point::new(0.0, 0.0),
            Point::new(50.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
            Point::new(0.0, 100.0),
        ];
        assert_eq!(centroid(&poly).unwrap(), Point::new(50.0, 40.0));
    }

    #[test]
    fn test_centroid_single_point() {
        assert_eq!(centroid(&[Point::new(3.0, 4.0)]).unwrap(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_centroid_empty_fails() {
        assert_eq!(centroid(&[]), Err(GeometryError::EmptyPolygon));
    }

    #[test]
    fn test_centroid_rejects_nan() {
        let poly = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert_eq!(centroid(&poly), Err(GeometryError::NonFiniteCoordinate { index: 1 }));
    }

    #[test]
    fn test_euclidean_distance() {
        assert_eq!(euclidean_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0)), 5.0);
        assert_eq!(euclidean_distance(Point::new(7.0, 7.0), Point::new(7.0, 7.0)), 0.0);
    }

    #[test]
    fn test_clamp_to_bounds() {
        let dims = Dimensions::new(800.0, 600.0);
        assert_eq!(clamp_to_bounds(Point::new(900.0, -5.0), dims, 0.0), Point::new(800.0, 0.0));
        assert_eq!(clamp_to_bounds(Point::new(10.0, 590.0), dims, 50.0), Point::new(50.0, 550.0));
        assert_eq!(clamp_to_bounds(Point::new(10.0, 10.0), Dimensions::new(80.0, 600.0), 50.0).x, 40.0);
    }

    #[test]
    fn test_angular_difference_wraps() {
        assert_eq!(angular_difference_deg(10.0, 350.0), 20.0);
        assert_eq!(angular_difference_deg(-170.0, 170.0), 20.0);
        assert_eq!(angular_difference_deg(90.0, 90.0), 0.0);
        assert_eq!(angular_difference_deg(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_bearing() {
        assert_eq!(bearing_deg(Point::new(0.0, 0.0), Point::new(1.0, 0.0)), 0.0);
        assert_eq!(bearing_deg(Point::new(0.0, 0.0), Point::new(0.0, 1.0)), 90.0);
    }
}
