//! Shared types for the coverage planner
//!
//! Field names serialize in camelCase so snapshots and egress records line up
//! with the platform's persisted floor plan, zone and camera shapes.

use serde::{Deserialize, Deserializer, Serialize};

/// View distance assumed for a camera that does not declare one
pub const DEFAULT_VIEW_DISTANCE: f64 = 10.0;

/// Field of view assumed for a camera that does not declare one (omnidirectional)
pub const DEFAULT_VIEW_ANGLE: f64 = 360.0;

/// Planar point in floor plan units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Floor plan extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { width: 1000.0, height: 800.0 }
    }
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive bounds check against `[0, width] x [0, height]`
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// Both sides strictly positive and finite
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dimensions: Dimensions,
}

/// `null` decodes the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Zone classification
///
/// Unknown upstream values are kept verbatim in `Other` and treated as
/// non-critical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ZoneType {
    Entrance,
    Exit,
    EmergencyExit,
    HighTraffic,
    PlayArea,
    Restroom,
    FoodCourt,
    Other(String),
}

impl std::str::FromStr for ZoneType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ENTRANCE" => ZoneType::Entrance,
            "EXIT" => ZoneType::Exit,
            "EMERGENCY_EXIT" => ZoneType::EmergencyExit,
            "HIGH_TRAFFIC" => ZoneType::HighTraffic,
            "PLAY_AREA" => ZoneType::PlayArea,
            "RESTROOM" => ZoneType::Restroom,
            "FOOD_COURT" => ZoneType::FoodCourt,
            other => ZoneType::Other(other.to_string()),
        })
    }
}

impl From<String> for ZoneType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(zone_type) => zone_type,
            Err(never) => match never {},
        }
    }
}

impl From<ZoneType> for String {
    fn from(zone_type: ZoneType) -> Self {
        zone_type.as_str().to_string()
    }
}

impl ZoneType {
    pub fn as_str(&self) -> &str {
        match self {
            ZoneType::Entrance => "ENTRANCE",
            ZoneType::Exit => "EXIT",
            ZoneType::EmergencyExit => "EMERGENCY_EXIT",
            ZoneType::HighTraffic => "HIGH_TRAFFIC",
            ZoneType::PlayArea => "PLAY_AREA",
            ZoneType::Restroom => "RESTROOM",
            ZoneType::FoodCourt => "FOOD_COURT",
            ZoneType::Other(s) => s,
        }
    }

    /// Zones that must have guaranteed camera coverage
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            ZoneType::Entrance | ZoneType::Exit | ZoneType::EmergencyExit | ZoneType::HighTraffic
        )
    }

    #[inline]
    pub fn is_entrance_or_exit(&self) -> bool {
        matches!(self, ZoneType::Entrance | ZoneType::Exit)
    }

    #[inline]
    pub fn is_emergency(&self) -> bool {
        self.as_str().contains("EMERGENCY")
    }
}

impl std::fmt::Display for ZoneType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: ZoneType,
    /// Polygon vertices in winding order
    #[serde(default)]
    pub coordinates: Vec<Point>,
}

/// Installed (or planned) camera
///
/// A camera without a position has not been placed yet and contributes no
/// coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
}

impl Camera {
    /// Omnidirectional camera with the given detection radius
    pub fn placed(id: impl Into<String>, position: Point, view_distance: f64) -> Self {
        Self {
            id: id.into(),
            position: Some(position),
            view_distance: Some(view_distance),
            view_angle: None,
            rotation: None,
        }
    }

    pub fn with_sector(mut self, view_angle: f64, rotation: f64) -> Self {
        self.view_angle = Some(view_angle);
        self.rotation = Some(rotation);
        self
    }

    #[inline]
    pub fn effective_view_distance(&self) -> f64 {
        self.view_distance.unwrap_or(DEFAULT_VIEW_DISTANCE)
    }

    #[inline]
    pub fn effective_view_angle(&self) -> f64 {
        self.view_angle.unwrap_or(DEFAULT_VIEW_ANGLE)
    }

    #[inline]
    pub fn effective_rotation(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationType {
    EntranceExit,
    HighTraffic,
    CoverageGap,
    BlindSpot,
    SecurityEnhancement,
    Redundancy,
}

impl RecommendationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationType::EntranceExit => "ENTRANCE_EXIT",
            RecommendationType::HighTraffic => "HIGH_TRAFFIC",
            RecommendationType::CoverageGap => "COVERAGE_GAP",
            RecommendationType::BlindSpot => "BLIND_SPOT",
            RecommendationType::SecurityEnhancement => "SECURITY_ENHANCEMENT",
            RecommendationType::Redundancy => "REDUNDANCY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }

    /// Higher is more urgent
    #[inline]
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 3,
            Priority::High => 2,
            Priority::Medium => 1,
            Priority::Low => 0,
        }
    }
}

/// Per-kind details attached to a recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationMetadata {
    #[serde(rename_all = "camelCase")]
    ZoneGap { target_zone: String, current_coverage: f64, expected_improvement: f64 },
    #[serde(rename_all = "camelCase")]
    BlindSpot {
        blind_spot_size: f64,
        #[serde(rename = "adjacentCameras")]
        adjacent_camera: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Redundancy { primary_camera: String, redundancy_type: String },
}

/// Proposed camera placement, not yet approved or installed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub recommendation_type: RecommendationType,
    pub suggested_position: Point,
    pub reasoning: String,
    pub priority: Priority,
    pub coverage_area: Vec<Point>,
    pub estimated_cost: f64,
    pub metadata: RecommendationMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_type_from_str() {
        assert_eq!("ENTRANCE".parse::<ZoneType>().unwrap(), ZoneType::Entrance);
        assert_eq!("EMERGENCY_EXIT".parse::<ZoneType>().unwrap(), ZoneType::EmergencyExit);
        assert!(matches!("LOADING_DOCK".parse::<ZoneType>().unwrap(), ZoneType::Other(_)));
    }

    #[test]
    fn test_critical_zone_types() {
        assert!(ZoneType::Entrance.is_critical());
        assert!(ZoneType::Exit.is_critical());
        assert!(ZoneType::EmergencyExit.is_critical());
        assert!(ZoneType::HighTraffic.is_critical());
        assert!(!ZoneType::PlayArea.is_critical());
        assert!(!ZoneType::Other("EMERGENCY_STAIRS".to_string()).is_critical());
    }

    #[test]
    fn test_zone_deserializes_from_snapshot_shape() {
        let json = r#"{
            "id": "z1",
            "name": "Main Entrance",
            "type": "ENTRANCE",
            "coordinates": [{"x": 50, "y": 20}, {"x": 200, "y": 20}, {"x": 200, "y": 100}]
        }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.zone_type, ZoneType::Entrance);
        assert_eq!(zone.coordinates.len(), 3);
        assert_eq!(zone.coordinates[1], Point::new(200.0, 20.0));
    }

    #[test]
    fn test_camera_defaults_when_fields_absent() {
        let camera: Camera = serde_json::from_str(r#"{"id": "cam-1"}"#).unwrap();
        assert!(camera.position.is_none());
        assert_eq!(camera.effective_view_distance(), DEFAULT_VIEW_DISTANCE);
        assert_eq!(camera.effective_view_angle(), 360.0);
        assert_eq!(camera.effective_rotation(), 0.0);
    }

    #[test]
    fn test_explicit_zero_view_distance_is_kept() {
        let camera: Camera =
            serde_json::from_str(r#"{"id": "cam-1", "viewDistance": 0}"#).unwrap();
        assert_eq!(camera.effective_view_distance(), 0.0);
    }

    #[test]
    fn test_recommendation_serializes_camel_case() {
        let rec = Recommendation {
            recommendation_type: RecommendationType::EntranceExit,
            suggested_position: Point::new(1.0, 2.0),
            reasoning: "test".to_string(),
            priority: Priority::High,
            coverage_area: vec![Point::new(1.0, 2.0)],
            estimated_cost: 1500.0,
            metadata: RecommendationMetadata::ZoneGap {
                target_zone: "z1".to_string(),
                current_coverage: 0.25,
                expected_improvement: 0.65,
            },
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["recommendationType"], "ENTRANCE_EXIT");
        assert_eq!(value["priority"], "HIGH");
        assert_eq!(value["suggestedPosition"]["x"], 1.0);
        assert_eq!(value["metadata"]["targetZone"], "z1");
        assert_eq!(value["metadata"]["currentCoverage"], 0.25);
    }

    #[test]
    fn test_floor_plan_dimensions_default() {
        let plan: FloorPlan = serde_json::from_str(r#"{"id": "fp", "name": "Hall"}"#).unwrap();
        assert_eq!(plan.dimensions, Dimensions::new(1000.0, 800.0));
    }

    #[test]
    fn test_floor_plan_null_dimensions_default() {
        let plan: FloorPlan =
            serde_json::from_str(r#"{"id": "fp", "name": "Hall", "dimensions": null}"#).unwrap();
        assert_eq!(plan.dimensions, Dimensions::new(1000.0, 800.0));
    }

    #[test]
    fn test_floor_plan_partial_dimensions_default_per_side() {
        let plan: FloorPlan =
            serde_json::from_str(r#"{"id": "fp", "name": "Hall", "dimensions": {"width": 600}}"#)
                .unwrap();
        assert_eq!(plan.dimensions, Dimensions::new(600.0, 800.0));

        let plan: FloorPlan =
            serde_json::from_str(r#"{"id": "fp", "name": "Hall", "dimensions": {"height": 300}}"#)
                .unwrap();
        assert_eq!(plan.dimensions, Dimensions::new(1000.0, 300.0));
    }

    #[test]
    fn test_blind_spot_metadata_key_names() {
        let metadata = RecommendationMetadata::BlindSpot {
            blind_spot_size: 64.0,
            adjacent_camera: Some("cam-1".to_string()),
        };
        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["blindSpotSize"], 64.0);
        assert_eq!(value["adjacentCameras"], "cam-1");
        assert!(value.get("adjacentCamera").is_none());

        let back: RecommendationMetadata = serde_json::from_value(value).unwrap();
        assert_eq!(back, metadata);
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::Critical.rank() > Priority::High.rank());
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }
}
