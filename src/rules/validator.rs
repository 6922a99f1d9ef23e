use super::NameRules;

/// Decide whether a candidate string is a plausible person name.
///
/// Rejects candidates that are too short, contain no alphabetic character,
/// run past the token cap (a runaway merge), or are a bare title or linking
/// word with no surname attached.
pub fn is_valid_name(candidate: &str, rules: &NameRules) -> bool {
    let name = candidate.trim();
    if name.chars().count() < 2 {
        return false;
    }
    if !name.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    if name.split_whitespace().count() > rules.max_tokens {
        return false;
    }

    let lower = name.to_lowercase();
    if rules.is_linking_word(&lower) || rules.is_title(&lower) {
        return false;
    }

    true
}
