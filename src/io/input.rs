use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Detection, Origin};

/// Failure to load a detector output file
#[derive(Debug, Error)]
pub enum DetectionFileError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid detection JSON in {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One record in the detector's entities JSON output.
///
/// The detector tags every entity group it knows about; only `PESSOA`
/// records are consolidated. `source` values starting with "rule" mark
/// rule-based detections, everything else is model output.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorRecord {
    pub word: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub entity_group: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
}

/// Parse a detector entities JSON file into person detections
pub fn parse_detections_file(path: &Path) -> Result<Vec<Detection>, DetectionFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| DetectionFileError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_detections_json(&content).map_err(|source| DetectionFileError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Parse a detector entities JSON string into person detections
pub fn parse_detections_json(json: &str) -> Result<Vec<Detection>, serde_json::Error> {
    let records: Vec<DetectorRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let detections: Vec<Detection> = records.into_iter().filter_map(to_detection).collect();
    if detections.len() < total {
        debug!(
            "Kept {} of {} detector records (non-person or negative offsets dropped)",
            detections.len(),
            total
        );
    }
    Ok(detections)
}

fn to_detection(record: DetectorRecord) -> Option<Detection> {
    if let Some(group) = &record.entity_group {
        if group != "PESSOA" {
            return None;
        }
    }
    if record.start < 0 || record.end < 0 {
        return None;
    }

    let origin = match record.source.as_deref() {
        Some(source) if source.starts_with("rule") => Origin::Rule,
        _ => Origin::Model,
    };

    Some(Detection {
        text: record.word,
        start: record.start as usize,
        end: record.end as usize,
        confidence: record.score,
        origin,
    })
}

/// Read the original document text the detections were computed against
pub fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read document: {:?}", path))
}
