//! Floor plan snapshot input
//!
//! A snapshot is the JSON document the recommendation service assembles from
//! storage: one floor plan, its zones and the venue's cameras.

use crate::domain::types::{Camera, FloorPlan, Zone};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub floor_plan: FloorPlan,
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub cameras: Vec<Camera>,
}

impl Snapshot {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse snapshot JSON")
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot {}", path.display()))?;
        let snapshot = Self::from_json(&content)
            .with_context(|| format!("Invalid snapshot {}", path.display()))?;

        info!(
            snapshot = %path.display(),
            floor_plan_id = %snapshot.floor_plan.id,
            zones = snapshot.zones.len(),
            cameras = snapshot.cameras.len(),
            "snapshot_loaded"
        );
        Ok(snapshot)
    }
}
