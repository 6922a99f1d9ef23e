use super::NameRules;

/// Render a name in canonical display casing.
///
/// Linking words are lowercased, every other token is capitalized (each
/// hyphen-delimited segment independently), and the result is rejoined with
/// single spaces. An empty input produces an empty string.
pub fn normalize_case(name: &str, rules: &NameRules) -> String {
    let mut parts: Vec<String> = Vec::new();
    for token in name.split_whitespace() {
        let lower = token.to_lowercase();
        if rules.is_linking_word(&lower) {
            parts.push(lower);
        } else {
            parts.push(capitalize_token(token));
        }
    }
    parts.join(" ")
}

fn capitalize_token(token: &str) -> String {
    token
        .split('-')
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join("-")
}

/// First character uppercased, remainder lowercased. A single letter is
/// uppercased, which leaves initials like "J" unchanged.
fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
    }
}
