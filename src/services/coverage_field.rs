//! Coverage field - how well a point is seen by a camera set
//!
//! Scores are radial: `1 - distance / view_distance`, floored at zero. The
//! best camera wins; overlapping cameras never stack above 1.0.
//!
//! `visibility_mask` is the stricter sector model (radius plus field of view
//! around the camera's rotation) used for blind spot detection.

use crate::domain::geometry::{angular_difference_deg, bearing_deg, euclidean_distance};
use crate::domain::types::{Camera, Dimensions, Point};

/// Coverage of `point` by a single camera, in `[0, 1]`
///
/// Unplaced cameras and cameras with a non-positive view distance contribute
/// nothing.
pub fn camera_coverage_at(point: Point, camera: &Camera) -> f64 {
    let Some(position) = camera.position else {
        return 0.0;
    };
    let view_distance = camera.effective_view_distance();
    if view_distance.is_nan() || view_distance <= 0.0 {
        return 0.0;
    }
    (1.0 - euclidean_distance(position, point) / view_distance).max(0.0)
}

/// Best single-camera coverage of `point`
pub fn field_coverage_at(point: Point, cameras: &[Camera]) -> f64 {
    cameras.iter().map(|camera| camera_coverage_at(point, camera)).fold(0.0, f64::max)
}

/// Representative point (centre) of grid cell `(row, col)`
#[inline]
pub fn cell_center(row: usize, col: usize, dims: Dimensions, grid_size: usize) -> Point {
    let cell_w = dims.width / grid_size as f64;
    let cell_h = dims.height / grid_size as f64;
    Point::new((col as f64 + 0.5) * cell_w, (row as f64 + 0.5) * cell_h)
}

/// `grid_size x grid_size` matrix of coverage scores, row-major with row 0 at y = 0
///
/// Debugging and visualization aid; zone decisions never read it.
pub fn build_coverage_grid(dims: Dimensions, cameras: &[Camera], grid_size: usize) -> Vec<Vec<f64>> {
    (0..grid_size)
        .map(|row| {
            (0..grid_size)
                .map(|col| field_coverage_at(cell_center(row, col, dims, grid_size), cameras))
                .collect()
        })
        .collect()
}

/// Whether `point` lies inside the camera's radius and field of view
pub fn camera_sees(point: Point, camera: &Camera) -> bool {
    let Some(position) = camera.position else {
        return false;
    };
    let view_distance = camera.effective_view_distance();
    if view_distance.is_nan() || view_distance <= 0.0 || euclidean_distance(position, point) > view_distance {
        return false;
    }

    let half_angle = camera.effective_view_angle() / 2.0;
    if half_angle >= 180.0 || position == point {
        return true;
    }
    angular_difference_deg(bearing_deg(position, point), camera.effective_rotation()) <= half_angle
}

/// Boolean sector-model visibility per grid cell, same layout as `build_coverage_grid`
pub fn visibility_mask(dims: Dimensions, cameras: &[Camera], grid_size: usize) -> Vec<Vec<bool>> {
    (0..grid_size)
        .map(|row| {
            (0..grid_size)
                .map(|col| {
                    let center = cell_center(row, col, dims, grid_size);
                    cameras.iter().any(|camera| camera_sees(center, camera))
                })
                .collect()
        })
        .collect()
}
