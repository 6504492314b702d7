//! Configuration loading from TOML files
//!
//! The CLI picks the file from `--config`, then `CONFIG_FILE`, then
//! `config/dev.toml`.
//!
//! Every section is optional; missing keys fall back to the engine defaults.

use anyhow::{ensure, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Deserialize)]
pub struct CoverageConfig {
    /// Zones scoring strictly below this get a recommendation
    #[serde(default = "default_coverage_threshold")]
    pub threshold: f64,
    /// Coverage expected once the recommended camera is installed
    #[serde(default = "default_coverage_target")]
    pub target: f64,
}

fn default_coverage_threshold() -> f64 {
    0.8
}

fn default_coverage_target() -> f64 {
    0.9
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self { threshold: default_coverage_threshold(), target: default_coverage_target() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacementConfig {
    /// Diagonal offset from the zone centroid for candidate positions
    #[serde(default = "default_placement_offset")]
    pub offset: f64,
    /// Candidates closer than this to the centroid score higher
    #[serde(default = "default_proximity_radius")]
    pub proximity_radius: f64,
    /// Per-camera cap on the spacing bonus
    #[serde(default = "default_spacing_cap")]
    pub spacing_cap: f64,
}

fn default_placement_offset() -> f64 {
    100.0
}

fn default_proximity_radius() -> f64 {
    200.0
}

fn default_spacing_cap() -> f64 {
    100.0
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            offset: default_placement_offset(),
            proximity_radius: default_proximity_radius(),
            spacing_cap: default_spacing_cap(),
        }
    }
}

/// Camera model used for recommendation footprints
#[derive(Debug, Clone, Deserialize)]
pub struct FootprintConfig {
    #[serde(default = "default_footprint_view_angle")]
    pub view_angle: f64,
    #[serde(default = "default_footprint_view_distance")]
    pub view_distance: f64,
    #[serde(default = "default_arc_segments")]
    pub arc_segments: usize,
}

fn default_footprint_view_angle() -> f64 {
    60.0
}

fn default_footprint_view_distance() -> f64 {
    10.0
}

fn default_arc_segments() -> usize {
    8
}

impl Default for FootprintConfig {
    fn default() -> Self {
        Self {
            view_angle: default_footprint_view_angle(),
            view_distance: default_footprint_view_distance(),
            arc_segments: default_arc_segments(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CostConfig {
    /// Flat estimate for a zone gap camera
    #[serde(default = "default_camera_cost")]
    pub camera: f64,
    /// Flat estimate for blind spot and redundancy cameras
    #[serde(default = "default_supplemental_camera_cost")]
    pub supplemental_camera: f64,
}

fn default_camera_cost() -> f64 {
    1500.0
}

fn default_supplemental_camera_cost() -> f64 {
    1200.0
}

impl Default for CostConfig {
    fn default() -> Self {
        Self { camera: default_camera_cost(), supplemental_camera: default_supplemental_camera_cost() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_grid_size")]
    pub size: usize,
}

fn default_grid_size() -> usize {
    20
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { size: default_grid_size() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlindSpotConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Regions must have strictly more cells than this
    #[serde(default = "default_min_cells")]
    pub min_cells: usize,
    #[serde(default = "default_max_blind_spot_recommendations")]
    pub max_recommendations: usize,
    /// Area (m²) above which a blind spot is HIGH rather than MEDIUM
    #[serde(default = "default_high_priority_area")]
    pub high_priority_area: f64,
}

fn default_min_cells() -> usize {
    4
}

fn default_max_blind_spot_recommendations() -> usize {
    3
}

fn default_high_priority_area() -> f64 {
    50.0
}

impl Default for BlindSpotConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_cells: default_min_cells(),
            max_recommendations: default_max_blind_spot_recommendations(),
            high_priority_area: default_high_priority_area(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedundancyConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Cameras within this radius of a zone centroid count as covering it
    #[serde(default = "default_zone_radius")]
    pub zone_radius: f64,
    /// Backup positions stay this far inside the floor plan edges
    #[serde(default = "default_edge_margin")]
    pub edge_margin: f64,
}

fn default_zone_radius() -> f64 {
    150.0
}

fn default_edge_margin() -> f64 {
    50.0
}

impl Default for RedundancyConfig {
    fn default() -> Self {
        Self { enabled: false, zone_radius: default_zone_radius(), edge_margin: default_edge_margin() }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// File path for recommendation egress (JSONL format)
    #[serde(default = "default_output_file")]
    pub file: String,
}

fn default_output_file() -> String {
    "recommendations.jsonl".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { file: default_output_file() }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub coverage: CoverageConfig,
    #[serde(default)]
    pub placement: PlacementConfig,
    #[serde(default)]
    pub footprint: FootprintConfig,
    #[serde(default)]
    pub cost: CostConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub blind_spots: BlindSpotConfig,
    #[serde(default)]
    pub redundancy: RedundancyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Main configuration struct used throughout the engine
#[derive(Debug, Clone)]
pub struct Config {
    coverage_threshold: f64,
    coverage_target: f64,
    placement_offset: f64,
    proximity_radius: f64,
    spacing_cap: f64,
    footprint_view_angle: f64,
    footprint_view_distance: f64,
    arc_segments: usize,
    camera_cost: f64,
    supplemental_camera_cost: f64,
    grid_size: usize,
    blind_spots_enabled: bool,
    blind_spot_min_cells: usize,
    blind_spot_max_recommendations: usize,
    blind_spot_high_priority_area: f64,
    redundancy_enabled: bool,
    redundancy_zone_radius: f64,
    redundancy_edge_margin: f64,
    output_file: String,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "default".to_string())
    }
}

impl Config {
    fn from_toml(toml_config: TomlConfig, config_file: String) -> Self {
        Self {
            coverage_threshold: toml_config.coverage.threshold,
            coverage_target: toml_config.coverage.target,
            placement_offset: toml_config.placement.offset,
            proximity_radius: toml_config.placement.proximity_radius,
            spacing_cap: toml_config.placement.spacing_cap,
            footprint_view_angle: toml_config.footprint.view_angle,
            footprint_view_distance: toml_config.footprint.view_distance,
            arc_segments: toml_config.footprint.arc_segments,
            camera_cost: toml_config.cost.camera,
            supplemental_camera_cost: toml_config.cost.supplemental_camera,
            grid_size: toml_config.grid.size,
            blind_spots_enabled: toml_config.blind_spots.enabled,
            blind_spot_min_cells: toml_config.blind_spots.min_cells,
            blind_spot_max_recommendations: toml_config.blind_spots.max_recommendations,
            blind_spot_high_priority_area: toml_config.blind_spots.high_priority_area,
            redundancy_enabled: toml_config.redundancy.enabled,
            redundancy_zone_radius: toml_config.redundancy.zone_radius,
            redundancy_edge_margin: toml_config.redundancy.edge_margin,
            output_file: toml_config.output.file,
            config_file,
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        let config = Self::from_toml(toml_config, path.display().to_string());
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration - defaults when the file is absent
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            warn!(config_file = %path, "config_file_missing_using_defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            (0.0..=1.0).contains(&self.coverage_threshold),
            "coverage.threshold must be within [0, 1], got {}",
            self.coverage_threshold
        );
        ensure!(
            (0.0..=1.0).contains(&self.coverage_target),
            "coverage.target must be within [0, 1], got {}",
            self.coverage_target
        );
        ensure!(self.grid_size > 0, "grid.size must be at least 1");
        ensure!(self.arc_segments > 0, "footprint.arc_segments must be at least 1");
        Ok(())
    }

    pub fn coverage_threshold(&self) -> f64 {
        self.coverage_threshold
    }

    pub fn coverage_target(&self) -> f64 {
        self.coverage_target
    }

    pub fn placement_offset(&self) -> f64 {
        self.placement_offset
    }

    pub fn proximity_radius(&self) -> f64 {
        self.proximity_radius
    }

    pub fn spacing_cap(&self) -> f64 {
        self.spacing_cap
    }

    pub fn footprint_view_angle(&self) -> f64 {
        self.footprint_view_angle
    }

    pub fn footprint_view_distance(&self) -> f64 {
        self.footprint_view_distance
    }

    pub fn arc_segments(&self) -> usize {
        self.arc_segments
    }

    pub fn camera_cost(&self) -> f64 {
        self.camera_cost
    }

    pub fn supplemental_camera_cost(&self) -> f64 {
        self.supplemental_camera_cost
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn blind_spots_enabled(&self) -> bool {
        self.blind_spots_enabled
    }

    pub fn blind_spot_min_cells(&self) -> usize {
        self.blind_spot_min_cells
    }

    pub fn blind_spot_max_recommendations(&self) -> usize {
        self.blind_spot_max_recommendations
    }

    pub fn blind_spot_high_priority_area(&self) -> f64 {
        self.blind_spot_high_priority_area
    }

    pub fn redundancy_enabled(&self) -> bool {
        self.redundancy_enabled
    }

    pub fn redundancy_zone_radius(&self) -> f64 {
        self.redundancy_zone_radius
    }

    pub fn redundancy_edge_margin(&self) -> f64 {
        self.redundancy_edge_margin
    }

    pub fn output_file(&self) -> &str {
        &self.output_file
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder for callers that tune the trigger threshold without a file
    pub fn with_coverage_threshold(mut self, threshold: f64) -> Self {
        self.coverage_threshold = threshold;
        self
    }

    pub fn with_camera_cost(mut self, cost: f64) -> Self {
        self.camera_cost = cost;
        self
    }

    pub fn with_blind_spots(mut self, enabled: bool) -> Self {
        self.blind_spots_enabled = enabled;
        self
    }

    pub fn with_redundancy(mut self, enabled: bool) -> Self {
        self.redundancy_enabled = enabled;
        self
    }

    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }
}
