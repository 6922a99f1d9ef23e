use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{CanonicalGroups, MergedDetection};

/// Detector-compatible record for one merged detection
#[derive(Debug, Clone, Serialize)]
pub struct MergedRecord {
    pub word: String,
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

impl MergedRecord {
    pub fn from_merged(merged: &MergedDetection) -> Self {
        Self {
            word: merged.text.clone(),
            start: merged.start,
            end: merged.end,
            score: merged.confidence,
        }
    }
}

/// Write the canonical map as pretty-printed JSON keyed by canonical name
pub fn write_grouped_json(groups: &CanonicalGroups, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, groups).context("Failed to write grouped JSON")?;
    Ok(())
}

/// Write the merged detection list in the detector's wire format
pub fn write_entities_json(merged: &[MergedDetection], path: &Path) -> Result<()> {
    let records: Vec<MergedRecord> = merged.iter().map(MergedRecord::from_merged).collect();
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, &records).context("Failed to write entities JSON")?;
    Ok(())
}

/// Write the annotated document text
pub fn write_annotated(annotated: &str, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    write!(file, "{}", annotated)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CanonicalGroups;

    #[test]
    fn test_write_grouped_json() {
        let mut groups = CanonicalGroups::new();
        groups.insert("João Silva".to_string(), vec![(17, 27), (42, 47)]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.grouped_entities.json");
        write_grouped_json(&groups, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["João Silva"][0][0], 17);
        assert_eq!(parsed["João Silva"][1][1], 47);
    }

    #[test]
    fn test_write_entities_json() {
        let merged = vec![MergedDetection {
            text: "João Silva".to_string(),
            start: 17,
            end: 27,
            confidence: 0.95,
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.entities.json");
        write_entities_json(&merged, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed[0]["word"], "João Silva");
        assert_eq!(parsed[0]["start"], 17);
        assert_eq!(parsed[0]["score"], 0.95);
    }

    #[test]
    fn test_write_annotated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.annotated.txt");
        write_annotated("[PESSOA:Ana] falou", &path).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[PESSOA:Ana] falou"
        );
    }
}
