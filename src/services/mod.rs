//! Services - coverage estimation and placement logic
//!
//! This module contains the engine itself:
//! - `coverage_field` - per-point camera coverage and debug grids
//! - `zone_coverage` - centroid coverage ratio per zone
//! - `placement` - candidate positions and camera footprints
//! - `blind_spots` - unseen region detection
//! - `recommender` - orchestration into prioritized recommendations

pub mod blind_spots;
pub mod coverage_field;
pub mod placement;
pub mod recommender;
pub mod zone_coverage;

// Re-export commonly used items
pub use coverage_field::{build_coverage_grid, camera_coverage_at, field_coverage_at};
pub use placement::{coverage_footprint, optimal_position};
pub use recommender::{generate_recommendations, sort_by_priority, RecommendationSummary};
pub use zone_coverage::zone_coverage;
