//! Job file definitions and entity classification.
//!
//! A job file lists SVG path data with either an explicit process tag or
//! the stroke / fill colours of the original shape. Colours are mapped to
//! laser operations with the usual red / green / blue convention.

use std::path::Path;

use serde::{Deserialize, Serialize};
use u_lasertime_core::{Error, LaserEntity, LaserPath, ProcessType, Result};

/// Pixels per inch at which one user unit is one millimetre.
pub const MM_PPI: f64 = 25.4;

/// A laser job as read from disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobFile {
    /// Shapes of the job, in document order.
    #[serde(default)]
    pub entities: Vec<JobEntry>,
}

/// A single shape of a job file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobEntry {
    /// SVG path data.
    pub d: String,
    /// Explicit operation tag: cut, mark or raster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    /// Stroke colour as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Fill colour as `#RRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
}

/// Maps an operation colour to its process type.
///
/// Red cuts, green marks, blue rasters. Matching is case-insensitive and
/// ignores surrounding whitespace; any other colour is not an operation.
pub fn process_for_color(hex: &str) -> Option<ProcessType> {
    match hex.trim().to_ascii_uppercase().as_str() {
        "#FF0000" => Some(ProcessType::Cut),
        "#00FF00" => Some(ProcessType::Mark),
        "#0000FF" => Some(ProcessType::Raster),
        _ => None,
    }
}

impl JobEntry {
    /// Resolves the operation of this entry.
    ///
    /// An explicit tag wins and must name a known process. Otherwise the
    /// stroke colour is tried before the fill colour. `Ok(None)` means the
    /// entry carries no laser operation.
    pub fn classify(&self) -> Result<Option<ProcessType>> {
        if let Some(tag) = &self.process {
            return tag.parse().map(Some);
        }

        let by_color = self
            .stroke
            .as_deref()
            .and_then(process_for_color)
            .or_else(|| self.fill.as_deref().and_then(process_for_color));
        Ok(by_color)
    }
}

impl JobFile {
    /// Parses a job from JSON text.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Parses a job from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Loads a job file, choosing the format from the extension.
    ///
    /// `.toml` files are read as TOML, everything else as JSON.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if is_toml(path) {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Classifies the entries and builds laser entities.
    ///
    /// Coordinates are scaled by `25.4 / ppi`. Entries without an operation
    /// are skipped. Fails with [`Error::NoEntities`] if nothing remains.
    pub fn into_entities(self, ppi: f64) -> Result<Vec<LaserEntity>> {
        if !ppi.is_finite() || ppi <= 0.0 {
            return Err(Error::invalid_parameter("ppi", ppi, "must be a finite positive number"));
        }
        let scale = MM_PPI / ppi;

        let mut entities = Vec::with_capacity(self.entities.len());
        for (i, entry) in self.entities.into_iter().enumerate() {
            let Some(process) = entry.classify()? else {
                log::debug!("Ignoring entry {i}: no laser operation colour");
                continue;
            };

            let mut path = LaserPath::from_svg(&entry.d)?;
            if scale != 1.0 {
                path = path.scaled(scale);
            }
            if !path.has_drawable() {
                log::warn!("Entry {i} ({process}) has no drawable geometry");
            }
            entities.push(LaserEntity::new(path, process));
        }

        if entities.is_empty() {
            return Err(Error::NoEntities);
        }

        log::info!("Loaded {} laser entities", entities.len());
        Ok(entities)
    }
}

pub(crate) fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use u_lasertime_core::path_length;

    const JOB_JSON: &str = r##"{
        "entities": [
            { "d": "M 10 10 L 30 10 L 30 30 L 10 30 Z", "stroke": "#FF0000", "fill": "none" },
            { "d": "M 40 40 L 60 40", "stroke": "#00ff00" },
            { "d": "M 70 10 L 90 10 L 80 30 Z", "stroke": "none", "fill": "#0000FF" },
            { "d": "M 0 0 L 100 100", "stroke": "#000000" },
            { "d": "M 0 0 L 5 0", "process": "mark" }
        ]
    }"##;

    #[test]
    fn test_color_map() {
        assert_eq!(process_for_color("#FF0000"), Some(ProcessType::Cut));
        assert_eq!(process_for_color("#00ff00"), Some(ProcessType::Mark));
        assert_eq!(process_for_color(" #0000Ff "), Some(ProcessType::Raster));
        assert_eq!(process_for_color("#000000"), None);
        assert_eq!(process_for_color("none"), None);
    }

    #[test]
    fn test_classify_json_job() {
        let job = JobFile::from_json_str(JOB_JSON).unwrap();
        let entities = job.into_entities(MM_PPI).unwrap();

        let kinds: Vec<ProcessType> = entities.iter().map(|e| e.process_type).collect();
        assert_eq!(
            kinds,
            vec![
                ProcessType::Cut,
                ProcessType::Mark,
                ProcessType::Raster,
                ProcessType::Mark
            ]
        );
    }

    #[test]
    fn test_stroke_wins_over_fill() {
        let entry = JobEntry {
            d: "M 0 0 L 1 0".into(),
            stroke: Some("#00FF00".into()),
            fill: Some("#0000FF".into()),
            ..Default::default()
        };
        assert_eq!(entry.classify().unwrap(), Some(ProcessType::Mark));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let content = r#"{"entities": [{"d": "M 0 0 L 1 0", "process": "weld"}]}"#;
        let job = JobFile::from_json_str(content).unwrap();
        let err = job.into_entities(MM_PPI).unwrap_err();
        assert!(matches!(err, Error::UnknownProcessType(_)));
    }

    #[test]
    fn test_no_entities() {
        let content = r##"{"entities": [{"d": "M 0 0 L 1 0", "stroke": "#123456"}]}"##;
        let job = JobFile::from_json_str(content).unwrap();
        assert!(matches!(job.into_entities(MM_PPI), Err(Error::NoEntities)));

        let empty = JobFile::from_json_str("{}").unwrap();
        assert!(matches!(empty.into_entities(MM_PPI), Err(Error::NoEntities)));
    }

    #[test]
    fn test_ppi_scaling() {
        // 100 units at 100 PPI is one inch
        let content = r#"{"entities": [{"d": "M 0 0 L 100 0", "process": "cut"}]}"#;
        let job = JobFile::from_json_str(content).unwrap();
        let entities = job.into_entities(100.0).unwrap();
        assert_relative_eq!(path_length(&entities[0].path, 0.1), 25.4, epsilon = 1e-9);
    }

    #[test]
    fn test_invalid_ppi() {
        let content = r#"{"entities": [{"d": "M 0 0 L 1 0", "process": "cut"}]}"#;
        let job = JobFile::from_json_str(content).unwrap();
        assert!(matches!(
            job.into_entities(0.0),
            Err(Error::InvalidParameter { name: "ppi", .. })
        ));
    }

    #[test]
    fn test_invalid_path_data() {
        let content = r#"{"entities": [{"d": "M 0 0 L x", "process": "cut"}]}"#;
        let job = JobFile::from_json_str(content).unwrap();
        assert!(matches!(job.into_entities(MM_PPI), Err(Error::InvalidPath(_))));
    }

    #[test]
    fn test_move_only_entry_is_kept() {
        let content = r#"{"entities": [{"d": "M 40 40", "process": "mark"}]}"#;
        let entities = JobFile::from_json_str(content).unwrap().into_entities(MM_PPI).unwrap();
        assert_eq!(entities.len(), 1);
        assert!(!entities[0].path.has_drawable());
        assert_eq!(path_length(&entities[0].path, 0.1), 0.0);
    }

    #[test]
    fn test_toml_job() {
        let content = r##"
            [[entities]]
            d = "M 0 0 L 100 0 L 100 50 L 0 50 Z"
            fill = "#0000FF"

            [[entities]]
            d = "M 0 0 L 10 0"
            process = "cut"
        "##;
        let job = JobFile::from_toml_str(content).unwrap();
        assert_eq!(job.entities.len(), 2);
        let entities = job.into_entities(MM_PPI).unwrap();
        assert_eq!(entities[0].process_type, ProcessType::Raster);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(JobFile::from_json_str("{ not json"), Err(Error::Parse(_))));
    }

    #[test]
    fn test_is_toml() {
        assert!(is_toml(Path::new("job.toml")));
        assert!(is_toml(Path::new("JOB.TOML")));
        assert!(!is_toml(Path::new("job.json")));
        assert!(!is_toml(Path::new("job")));
    }
}
