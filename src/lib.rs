pub mod io;
pub mod models;
pub mod rules;
pub mod stages;

pub use io::{
    parse_detections_file, parse_detections_json, read_document, write_annotated,
    write_entities_json, write_grouped_json, DetectionFileError, DetectorRecord, MergedRecord,
};
pub use models::{CanonicalGroups, Detection, MergedDetection, Origin, Span};
pub use rules::{is_similar, is_valid_name, normalize_case, normalize_for_comparison, NameRules};
pub use stages::{annotate, consolidate, group, merge, Consolidation, MergeConfig};
