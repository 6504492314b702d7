//! Engine error types
//!
//! Only malformed input is an error. Unplaced cameras, non-positive view
//! distances, empty camera or zone lists and non-critical zones are ordinary
//! runtime states and never surface here.

use thiserror::Error;

/// Failure to derive geometry from a vertex list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("polygon has no vertices")]
    EmptyPolygon,
    #[error("polygon vertex {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("zone {zone_id} ({zone_name}) has invalid geometry: {source}")]
    InvalidGeometry {
        zone_id: String,
        zone_name: String,
        #[source]
        source: GeometryError,
    },
    #[error("floor plan dimensions must be positive and finite, got {width} x {height}")]
    InvalidFloorPlan { width: f64, height: f64 },
}
