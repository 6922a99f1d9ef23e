pub mod annotate;
pub mod group;
pub mod merge;

pub use annotate::*;
pub use group::*;
pub use merge::*;

use crate::models::{CanonicalGroups, Detection, MergedDetection};
use crate::rules::NameRules;

/// Result of one consolidation pass over a single document
#[derive(Debug, Clone)]
pub struct Consolidation {
    /// Fragment-merged detections, deduplicated
    pub merged: Vec<MergedDetection>,
    /// Canonical display name -> ascending occurrence spans
    pub groups: CanonicalGroups,
    /// Document copy with inline `[PESSOA:...]` markers
    pub annotated: String,
}

/// Run the full consolidation pass: merge fragments, group identities,
/// annotate the document.
///
/// The canonical map and the annotated text are independent views of the
/// same merged list; annotation uses pre-grouping surface forms so the
/// markup reflects what was actually in the text. The engine holds no state
/// across calls, so documents may be processed in parallel freely.
pub fn consolidate(
    detections: &[Detection],
    document: &str,
    config: &MergeConfig,
    rules: &NameRules,
) -> Consolidation {
    let merged = merge(detections, document, config, rules);
    let groups = group(&merged, rules);
    let annotated = annotate(document, &merged);
    Consolidation {
        merged,
        groups,
        annotated,
    }
}
