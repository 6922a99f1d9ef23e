use serde::{Deserialize, Serialize};

/// Which detection method produced a raw span.
///
/// Carried through for reporting and merge precedence upstream; identity
/// decisions never look at it, and rule and model spans merge freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Pattern rules over the transcript (title lines, parenthesized speakers)
    Rule,
    /// Token-classification model output
    Model,
}

/// A single raw person-name occurrence as reported by the detector
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detection {
    /// Exact substring matched in the document
    pub text: String,
    /// Start character offset into the document (inclusive)
    pub start: usize,
    /// End character offset into the document (exclusive)
    pub end: usize,
    /// Detector score; higher is more trusted
    pub confidence: f64,
    /// Producing method
    pub origin: Origin,
}

impl Detection {
    /// Whether the text and offsets pass basic sanity checks against a
    /// document of `document_len` characters.
    pub fn is_well_formed(&self, document_len: usize) -> bool {
        !self.text.is_empty() && self.start < self.end && self.end <= document_len
    }
}

/// One or more raw detections fused into a single contiguous name span.
///
/// `text` is the display-cased rendering of the document slice at
/// `[start, end)`; `confidence` is the maximum over the constituents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedDetection {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}
