//! Domain models - floor plans, zones, cameras and recommendations
//!
//! - `types` - snapshot and output data types
//! - `geometry` - centroid, distance and bounds helpers
//! - `error` - engine error taxonomy

pub mod error;
pub mod geometry;
pub mod types;

pub use error::{EngineError, GeometryError};
pub use types::{
    Camera, Dimensions, FloorPlan, Point, Priority, Recommendation, RecommendationMetadata,
    RecommendationType, Zone, ZoneType,
};
