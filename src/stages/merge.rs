use std::collections::HashSet;

use tracing::debug;

use crate::models::{Detection, MergedDetection};
use crate::rules::{is_valid_name, normalize_case, NameRules};

/// Configuration for fragment merging
#[derive(Debug, Clone)]
pub struct MergeConfig {
    /// Maximum character gap between a span and a merge candidate
    pub max_gap_chars: usize,
    /// Cap on the accumulated span length in characters
    pub max_name_chars: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_gap_chars: 5,
            max_name_chars: 60,
        }
    }
}

/// Collapse runs of detections that are fragments of one name.
///
/// Detections are scanned left to right; an accumulator span is extended
/// while each next candidate overlaps, touches, or is separated only by
/// connector text (whitespace, hyphens, or up to two linking words). The
/// closed accumulator re-derives its text from the document, is display-cased
/// and validated, and invalid results are discarded whole. Malformed
/// detections are dropped silently; they never abort the batch.
pub fn merge(
    detections: &[Detection],
    document: &str,
    config: &MergeConfig,
    rules: &NameRules,
) -> Vec<MergedDetection> {
    let chars: Vec<char> = document.chars().collect();

    let mut valid: Vec<&Detection> = detections
        .iter()
        .filter(|d| d.is_well_formed(chars.len()))
        .collect();
    if valid.len() < detections.len() {
        debug!(
            "Dropped {} malformed detections",
            detections.len() - valid.len()
        );
    }

    // Longer spans first among equal starts, so the accumulator seeds wide
    valid.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut merged: Vec<MergedDetection> = Vec::new();
    let mut i = 0;
    while i < valid.len() {
        let seed = valid[i];
        let best_start = seed.start;
        let mut best_end = seed.end;
        let mut best_confidence = seed.confidence;

        let mut j = i + 1;
        while j < valid.len() {
            let candidate = valid[j];
            if candidate.start > best_end + config.max_gap_chars {
                break;
            }
            if candidate.end <= best_end {
                // Fully nested: consume without extending
                j += 1;
                continue;
            }
            if candidate.end - best_start > config.max_name_chars {
                break;
            }
            if candidate.start > best_end {
                let connector: String = chars[best_end..candidate.start].iter().collect();
                if !is_connector_text(&connector, rules) {
                    break;
                }
            }
            best_end = candidate.end;
            if candidate.confidence > best_confidence {
                best_confidence = candidate.confidence;
            }
            j += 1;
        }

        let raw: String = chars[best_start..best_end].iter().collect();
        let display = normalize_case(&raw, rules);
        if is_valid_name(&display, rules) {
            merged.push(MergedDetection {
                text: display,
                start: best_start,
                end: best_end,
                confidence: best_confidence,
            });
        } else {
            debug!("Discarded invalid merge result: {:?}", raw);
        }

        i = j;
    }

    dedup_exact(merged)
}

/// Whether the text between two spans may sit inside one name: empty after
/// trimming spaces/hyphens/tabs, or at most two linking words.
fn is_connector_text(text: &str, rules: &NameRules) -> bool {
    let trimmed = text.trim_matches([' ', '-', '\t']);
    if trimmed.is_empty() {
        return true;
    }
    let words: Vec<String> = trimmed
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();
    words.len() <= 2 && words.iter().all(|w| rules.is_linking_word(w))
}

fn dedup_exact(merged: Vec<MergedDetection>) -> Vec<MergedDetection> {
    let mut seen: HashSet<(usize, usize, String)> = HashSet::new();
    merged
        .into_iter()
        .filter(|m| seen.insert((m.start, m.end, m.text.clone())))
        .collect()
}
