//! Recommendation egress - writes generated recommendations to file
//!
//! Recommendations are written in JSONL format (one JSON object per line)
//! to the file specified in config. Each record carries the floor plan id and
//! the initial `PENDING` status expected by the recommendation service.

use crate::domain::types::Recommendation;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::{debug, error, info};

/// One egress line
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EgressRecord<'a> {
    pub floor_plan_id: &'a str,
    pub status: &'static str,
    pub generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recommendation: &'a Recommendation,
}

/// Egress writer for recommendations
pub struct Egress {
    file_path: String,
}

impl Egress {
    pub fn new(file_path: &str) -> Self {
        info!(file_path = %file_path, "egress_initialized");
        Self { file_path: file_path.to_string() }
    }

    /// Write a recommendation to the egress file
    /// Returns true if successful, false otherwise
    pub fn write_recommendation(
        &self,
        floor_plan_id: &str,
        recommendation: &Recommendation,
        generated_at: DateTime<Utc>,
    ) -> bool {
        let result = Self::encode(floor_plan_id, recommendation, generated_at)
            .and_then(|line| self.append(&line));

        match result {
            Ok(()) => {
                Self::log_egressed(floor_plan_id, recommendation);
                true
            }
            Err(e) => {
                error!(
                    floor_plan_id = %floor_plan_id,
                    error = %e,
                    "recommendation_egress_failed"
                );
                false
            }
        }
    }

    /// Write a batch with a shared timestamp in one append
    ///
    /// Every record is encoded before the file is touched, so a failure leaves
    /// no part of the batch behind. Returns the number of records written.
    pub fn write_recommendations(
        &self,
        floor_plan_id: &str,
        recommendations: &[Recommendation],
    ) -> std::io::Result<usize> {
        if recommendations.is_empty() {
            return Ok(0);
        }

        let generated_at = Utc::now();
        let batch = recommendations
            .iter()
            .map(|rec| Self::encode(floor_plan_id, rec, generated_at))
            .collect::<std::io::Result<String>>()?;

        if let Err(e) = self.append(&batch) {
            error!(
                floor_plan_id = %floor_plan_id,
                count = recommendations.len(),
                error = %e,
                "recommendation_batch_egress_failed"
            );
            return Err(e);
        }

        for rec in recommendations {
            Self::log_egressed(floor_plan_id, rec);
        }
        Ok(recommendations.len())
    }

    /// One newline-terminated JSON record
    fn encode(
        floor_plan_id: &str,
        recommendation: &Recommendation,
        generated_at: DateTime<Utc>,
    ) -> std::io::Result<String> {
        let record =
            EgressRecord { floor_plan_id, status: "PENDING", generated_at, recommendation };
        let mut line = serde_json::to_string(&record)?;
        line.push('\n');
        Ok(line)
    }

    fn log_egressed(floor_plan_id: &str, recommendation: &Recommendation) {
        info!(
            floor_plan_id = %floor_plan_id,
            recommendation_type = %recommendation.recommendation_type.as_str(),
            priority = %recommendation.priority.as_str(),
            position = %recommendation.suggested_position,
            "recommendation_egressed"
        );
    }

    /// Append pre-encoded lines to the egress file with a single write
    fn append(&self, payload: &str) -> std::io::Result<()> {
        let path = Path::new(&self.file_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        file.write_all(payload.as_bytes())?;
        debug!(file = %self.file_path, bytes = %payload.len(), "egress_written");

        Ok(())
    }
}
