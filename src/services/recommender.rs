//! Camera recommendation generation
//!
//! Pure function of its inputs: no I/O, no shared state, no randomness.
//! Output order:
//! 1. Zone gap recommendations, in input zone order
//! 2. Blind spot recommendations, largest first (when enabled)
//! 3. Redundancy recommendations, in input zone order (when enabled)
//!
//! A zone gap recommendation is emitted for a zone iff the zone type is
//! critical and its centroid coverage is strictly below the configured
//! threshold.

use crate::domain::error::EngineError;
use crate::domain::types::{
    Camera, FloorPlan, Point, Priority, Recommendation, RecommendationMetadata, RecommendationType,
    Zone,
};
use crate::infra::Config;
use crate::services::blind_spots::find_blind_spots;
use crate::services::placement::{coverage_footprint, optimal_position, redundant_position};
use crate::services::zone_coverage::{cameras_near_zone, zone_coverage};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Generate recommendations for a floor plan
///
/// Fails with `InvalidGeometry` when any zone considered has no usable
/// coordinates, and with `InvalidFloorPlan` for non-positive dimensions.
pub fn generate_recommendations(
    config: &Config,
    floor_plan: &FloorPlan,
    existing_cameras: &[Camera],
    zones: &[Zone],
) -> Result<Vec<Recommendation>, EngineError> {
    let dims = floor_plan.dimensions;
    if !dims.is_valid() {
        return Err(EngineError::InvalidFloorPlan { width: dims.width, height: dims.height });
    }

    let mut recommendations = Vec::new();

    for zone in zones.iter().filter(|zone| zone.zone_type.is_critical()) {
        let coverage = zone_coverage(zone, existing_cameras)?;
        debug!(
            floor_plan_id = %floor_plan.id,
            zone_id = %zone.id,
            zone_type = %zone.zone_type,
            coverage = coverage,
            "zone_coverage_evaluated"
        );

        if coverage >= config.coverage_threshold() {
            continue;
        }

        let position = optimal_position(zone, existing_cameras, dims, config)?;
        recommendations.push(zone_gap_recommendation(config, zone, coverage, position));
    }

    if config.blind_spots_enabled() {
        recommendations.extend(blind_spot_recommendations(config, floor_plan, existing_cameras));
    }

    if config.redundancy_enabled() {
        recommendations.extend(redundancy_recommendations(config, floor_plan, existing_cameras, zones)?);
    }

    Ok(recommendations)
}

fn zone_gap_recommendation(config: &Config, zone: &Zone, coverage: f64, position: Point) -> Recommendation {
    let recommendation_type = if zone.zone_type.is_entrance_or_exit() {
        RecommendationType::EntranceExit
    } else {
        RecommendationType::HighTraffic
    };
    let priority = if zone.zone_type.is_emergency() { Priority::Critical } else { Priority::High };

    Recommendation {
        recommendation_type,
        suggested_position: position,
        reasoning: format!(
            "{} area has insufficient camera coverage ({}%)",
            zone.name,
            (coverage * 100.0).round()
        ),
        priority,
        coverage_area: footprint(config, position),
        estimated_cost: config.camera_cost(),
        metadata: RecommendationMetadata::ZoneGap {
            target_zone: zone.id.clone(),
            current_coverage: coverage,
            expected_improvement: config.coverage_target() - coverage,
        },
    }
}

/// Recommendations for the largest unseen regions of the floor plan
pub fn blind_spot_recommendations(
    config: &Config,
    floor_plan: &FloorPlan,
    existing_cameras: &[Camera],
) -> Vec<Recommendation> {
    let spots = find_blind_spots(
        floor_plan.dimensions,
        existing_cameras,
        config.grid_size(),
        config.blind_spot_min_cells(),
    );

    spots
        .into_iter()
        .take(config.blind_spot_max_recommendations())
        .map(|spot| {
            debug!(
                floor_plan_id = %floor_plan.id,
                cells = spot.cells,
                area_m2 = spot.area_m2,
                "blind_spot_detected"
            );
            let priority = if spot.area_m2 > config.blind_spot_high_priority_area() {
                Priority::High
            } else {
                Priority::Medium
            };
            Recommendation {
                recommendation_type: RecommendationType::BlindSpot,
                suggested_position: spot.position,
                reasoning: format!("Blind spot detected in coverage area ({:.1}m²)", spot.area_m2),
                priority,
                coverage_area: footprint(config, spot.position),
                estimated_cost: config.supplemental_camera_cost(),
                metadata: RecommendationMetadata::BlindSpot {
                    blind_spot_size: spot.area_m2,
                    adjacent_camera: None,
                },
            }
        })
        .collect()
}

/// Backup cameras for entrances and exits watched by a single camera
pub fn redundancy_recommendations(
    config: &Config,
    floor_plan: &FloorPlan,
    existing_cameras: &[Camera],
    zones: &[Zone],
) -> Result<Vec<Recommendation>, EngineError> {
    let mut recommendations = Vec::new();

    for zone in zones.iter().filter(|zone| zone.zone_type.is_entrance_or_exit()) {
        let near = cameras_near_zone(zone, existing_cameras, config.redundancy_zone_radius())?;
        let [primary] = near.as_slice() else {
            continue;
        };
        let Some(primary_position) = primary.position else {
            continue;
        };

        let position = redundant_position(
            zone,
            primary_position,
            floor_plan.dimensions,
            config.redundancy_edge_margin(),
        )?;
        debug!(zone_id = %zone.id, primary_camera = %primary.id, "single_camera_zone_detected");

        recommendations.push(Recommendation {
            recommendation_type: RecommendationType::Redundancy,
            suggested_position: position,
            reasoning: format!("Single point of failure: {} covered by only one camera", zone.name),
            priority: Priority::Medium,
            coverage_area: footprint(config, position),
            estimated_cost: config.supplemental_camera_cost(),
            metadata: RecommendationMetadata::Redundancy {
                primary_camera: primary.id.clone(),
                redundancy_type: "backup_coverage".to_string(),
            },
        });
    }

    Ok(recommendations)
}

fn footprint(config: &Config, position: Point) -> Vec<Point> {
    coverage_footprint(
        position,
        config.footprint_view_angle(),
        config.footprint_view_distance(),
        config.arc_segments(),
    )
}

/// Stable sort, most urgent first; equal priorities keep generation order
pub fn sort_by_priority(recommendations: &mut [Recommendation]) {
    recommendations.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
}

/// Counts by priority and total estimated cost
#[derive(Debug, Clone, Default)]
pub struct RecommendationSummary {
    pub total: usize,
    pub by_priority: FxHashMap<Priority, usize>,
    pub by_type: FxHashMap<RecommendationType, usize>,
    pub estimated_cost: f64,
}

impl RecommendationSummary {
    pub fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let mut summary = Self::default();
        for rec in recommendations {
            summary.total += 1;
            *summary.by_priority.entry(rec.priority).or_default() += 1;
            *summary.by_type.entry(rec.recommendation_type).or_default() += 1;
            summary.estimated_cost += rec.estimated_cost;
        }
        summary
    }

    pub fn count(&self, priority: Priority) -> usize {
        self.by_priority.get(&priority).copied().unwrap_or(0)
    }

    pub fn count_type(&self, recommendation_type: RecommendationType) -> usize {
        self.by_type.get(&recommendation_type).copied().unwrap_or(0)
    }

    /// Log summary at info level
    pub fn log(&self, floor_plan_id: &str) {
        tracing::info!(
            floor_plan_id = %floor_plan_id,
            total = self.total,
            critical = self.count(Priority::Critical),
            high = self.count(Priority::High),
            medium = self.count(Priority::Medium),
            low = self.count(Priority::Low),
            zone_gaps = self.count_type(RecommendationType::EntranceExit)
                + self.count_type(RecommendationType::HighTraffic),
            blind_spots = self.count_type(RecommendationType::BlindSpot),
            redundancy = self.count_type(RecommendationType::Redundancy),
            estimated_cost = self.estimated_cost,
            "recommendations_generated"
        );
    }
}
