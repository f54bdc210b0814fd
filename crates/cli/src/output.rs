//! JSON output of reports, entity summaries and errors.

use std::fs;
use std::path::Path;

use serde::Serialize;
use u_lasertime_core::{bounding_box, path_length, BoundingBox, LaserEntity, ProcessType};
use u_lasertime_estimator::{round2, JobReport};

/// Geometry summary of one classified entity.
#[derive(Debug, Clone, Serialize)]
pub struct EntitySummary {
    /// Position in the job after classification.
    pub index: usize,
    /// Assigned operation.
    pub process: ProcessType,
    /// Number of path segments (moves included).
    pub segments: usize,
    /// Burned length in mm.
    pub length_mm: f64,
    /// Bounding box in mm.
    pub bounding_box: BoundingBox,
}

impl EntitySummary {
    /// Summarises an entity.
    pub fn new(index: usize, entity: &LaserEntity, accuracy: f64) -> Self {
        Self {
            index,
            process: entity.process_type,
            segments: entity.path.segments().len(),
            length_mm: round2(path_length(&entity.path, accuracy)),
            bounding_box: bounding_box(&entity.path),
        }
    }
}

/// Pretty JSON of a job report.
pub fn report_json(report: &JobReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Writes a job report as pretty JSON.
pub fn save_report(report: &JobReport, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = report_json(report)?;
    fs::write(path, json)
}

/// JSON `{"error": message}` object, as printed on failure.
pub fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}
