use crate::models::MergedDetection;

/// Produce a marked-up copy of the document for proofreading merge quality.
///
/// Each merged span's covered range is replaced by a `[PESSOA:...]` marker
/// embedding the surface (pre-grouping) text. Spans that overlap an
/// already-emitted marker, are degenerate, or run past the document are
/// skipped and their text passes through unmarked.
pub fn annotate(document: &str, merged: &[MergedDetection]) -> String {
    let chars: Vec<char> = document.chars().collect();
    let mut ordered: Vec<&MergedDetection> = merged.iter().collect();
    ordered.sort_by_key(|m| m.start);

    let mut output = String::with_capacity(document.len());
    let mut cursor = 0usize;
    for detection in ordered {
        if detection.start < cursor || detection.end <= detection.start || detection.end > chars.len()
        {
            continue;
        }
        output.extend(&chars[cursor..detection.start]);
        output.push_str("[PESSOA:");
        output.push_str(&detection.text);
        output.push(']');
        cursor = detection.end;
    }
    output.extend(&chars[cursor..]);
    output
}
