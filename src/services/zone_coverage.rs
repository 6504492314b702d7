//! Zone coverage evaluation
//!
//! A zone is scored at its vertex centroid only. Large or irregular zones with
//! a camera near one edge can therefore score as under-covered even though
//! part of the polygon is visible; downstream thresholds are tuned to this.

use crate::domain::error::EngineError;
use crate::domain::geometry::{centroid, euclidean_distance};
use crate::domain::types::{Camera, Point, Zone};
use crate::services::coverage_field::field_coverage_at;

/// Centroid of a zone, with the zone identified on failure
pub fn zone_center(zone: &Zone) -> Result<Point, EngineError> {
    centroid(&zone.coordinates).map_err(|source| EngineError::InvalidGeometry {
        zone_id: zone.id.clone(),
        zone_name: zone.name.clone(),
        source,
    })
}

/// Coverage ratio of a zone in `[0, 1]`
pub fn zone_coverage(zone: &Zone, cameras: &[Camera]) -> Result<f64, EngineError> {
    let center = zone_center(zone)?;
    Ok(field_coverage_at(center, cameras))
}

/// Placed cameras within `radius` of the zone centroid, in input order
pub fn cameras_near_zone<'a>(
    zone: &Zone,
    cameras: &'a [Camera],
    radius: f64,
) -> Result<Vec<&'a Camera>, EngineError> {
    let center = zone_center(zone)?;
    Ok(cameras
        .iter()
        .filter(|camera| {
            camera.position.is_some_and(|position| euclidean_distance(position, center) <= radius)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::GeometryError;
    use crate::domain::types::ZoneType;

    fn entrance() -> Zone {
        Zone {
            id: "z1".to_string(),
            name: "Main Entrance".to_string(),
            zone_type: ZoneType::Entrance,
            coordinates: vec![
                Point::new(50.0, 20.0),
                Point::new(200.0, 20.0),
                Point::new(200.0, 100.0),
                Point::new(50.0, 100.0),
            ],
        }
    }

    #[test]
    fn test_no_cameras_zero_coverage() {
        assert_eq!(zone_coverage(&entrance(), &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_camera_on_centroid_full_coverage() {
        let cameras = vec![Camera::placed("c1", Point::new(125.0, 60.0), 200.0)];
        assert_eq!(zone_coverage(&entrance(), &cameras).unwrap(), 1.0);
    }

    #[test]
    fn test_edge_camera_scored_at_centroid_only() {
        // Camera sits on the zone's corner but the centroid is 85 units away
        let cameras = vec![Camera::placed("c1", Point::new(50.0, 20.0), 100.0)];
        let coverage = zone_coverage(&entrance(), &cameras).unwrap();
        assert!(coverage < 0.2);
    }

    #[test]
    fn test_adding_camera_never_decreases_coverage() {
        let zone = entrance();
        let mut cameras = vec![Camera::placed("c1", Point::new(150.0, 60.0), 100.0)];
        let before = zone_coverage(&zone, &cameras).unwrap();

        for (i, position) in
            [Point::new(0.0, 0.0), Point::new(125.0, 70.0), Point::new(900.0, 900.0)].into_iter().enumerate()
        {
            cameras.push(Camera::placed(format!("extra-{i}"), position, 50.0));
            let after = zone_coverage(&zone, &cameras).unwrap();
            assert!(after >= before);
        }
    }

    #[test]
    fn test_empty_coordinates_reports_zone() {
        let zone = Zone { coordinates: Vec::new(), ..entrance() };
        let err = zone_coverage(&zone, &[]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidGeometry {
                zone_id: "z1".to_string(),
                zone_name: "Main Entrance".to_string(),
                source: GeometryError::EmptyPolygon,
            }
        );
    }

    #[test]
    fn test_cameras_near_zone_skips_unplaced() {
        let unplaced = Camera { position: None, ..Camera::placed("c0", Point::default(), 10.0) };
        let cameras = vec![
            unplaced,
            Camera::placed("c1", Point::new(130.0, 60.0), 10.0),
            Camera::placed("c2", Point::new(700.0, 500.0), 10.0),
        ];
        let near = cameras_near_zone(&entrance(), &cameras, 150.0).unwrap();
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].id, "c1");
    }
}
