use super::NameRules;

/// Render a name into a canonical comparison key.
///
/// Lowercases, drops whole-word honorific titles, collapses whitespace runs
/// and strips trailing punctuation. The key is used only for equivalence
/// testing, never for display.
pub fn normalize_for_comparison(name: &str, rules: &NameRules) -> String {
    let lowered = name.to_lowercase();
    let kept: Vec<&str> = lowered
        .split_whitespace()
        .filter(|token| !rules.is_title(token))
        .collect();
    kept.join(" ")
        .trim_end_matches(['.', ',', ' '])
        .to_string()
}
