use std::collections::BTreeMap;

/// One occurrence span: half-open character offsets into the document
pub type Span = (usize, usize);

/// Canonical display name mapped to its occurrence spans, ascending by start.
///
/// Groups partition the merged-detection set: every merged span appears in
/// exactly one group, and each key is one of the display-cased merged texts
/// (never a synthesized string).
pub type CanonicalGroups = BTreeMap<String, Vec<Span>>;
