//! Camera placement heuristics
//!
//! Key behaviors:
//! - Candidates sit diagonally around the zone centroid, never on it
//! - Out-of-bounds candidates are skipped; ties keep the earlier candidate
//! - Falls back to the clamped baseline `(+offset, +offset)` point
//! - Fully deterministic for a given input

use crate::domain::error::EngineError;
use crate::domain::geometry::{clamp_to_bounds, euclidean_distance};
use crate::domain::types::{Camera, Dimensions, Point, Zone};
use crate::infra::Config;
use crate::services::zone_coverage::zone_center;

/// Diagonal candidate directions, baseline first
const CANDIDATE_DIRECTIONS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)];

/// Score a candidate: near the zone centroid, away from existing cameras
pub fn score_position(position: Point, center: Point, cameras: &[Camera], config: &Config) -> f64 {
    let proximity = (config.proximity_radius() - euclidean_distance(position, center)).max(0.0);
    let spacing: f64 = cameras
        .iter()
        .filter_map(|camera| camera.position)
        .map(|existing| euclidean_distance(position, existing).min(config.spacing_cap()))
        .sum();
    proximity + spacing
}

/// Suggested position for a new camera covering `zone`
///
/// Always inside `[0, width] x [0, height]`.
pub fn optimal_position(
    zone: &Zone,
    existing_cameras: &[Camera],
    dims: Dimensions,
    config: &Config,
) -> Result<Point, EngineError> {
    let center = zone_center(zone)?;
    let offset = config.placement_offset();

    let mut best: Option<(Point, f64)> = None;
    for (dx, dy) in CANDIDATE_DIRECTIONS {
        let candidate = center.offset(dx * offset, dy * offset);
        if !dims.contains(candidate) {
            continue;
        }
        let score = score_position(candidate, center, existing_cameras, config);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    Ok(match best {
        Some((position, _)) => position,
        None => clamp_to_bounds(center.offset(offset, offset), dims, 0.0),
    })
}

/// Backup position opposite the primary camera across the zone centroid
///
/// Kept `margin` inside the floor plan edges.
pub fn redundant_position(
    zone: &Zone,
    primary: Point,
    dims: Dimensions,
    margin: f64,
) -> Result<Point, EngineError> {
    let center = zone_center(zone)?;
    let mirrored = Point::new(2.0 * center.x - primary.x, 2.0 * center.y - primary.y);
    Ok(clamp_to_bounds(mirrored, dims, margin))
}

/// Approximate field-of-view polygon: the camera position followed by
/// `segments + 1` points on the arc from `-view_angle/2` to `+view_angle/2`
pub fn coverage_footprint(
    position: Point,
    view_angle: f64,
    view_distance: f64,
    segments: usize,
) -> Vec<Point> {
    let segments = segments.max(1);
    let step = view_angle / segments as f64;
    let start = -view_angle / 2.0;

    let mut points = Vec::with_capacity(segments + 2);
    points.push(position);
    points.extend((0..=segments).map(|i| {
        let angle = (start + i as f64 * step).to_radians();
        position.offset(angle.cos() * view_distance, angle.sin() * view_distance)
    }));
    points
}
