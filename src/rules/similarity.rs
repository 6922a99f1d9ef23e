use super::comparison::normalize_for_comparison;
use super::NameRules;

/// Decide whether two surface forms denote the same person.
///
/// Both names are reduced to comparison keys; the relation holds iff one key
/// is a substring of the other, which captures surname-only references and
/// trailing-punctuation variants of the same name. Empty keys never match.
///
/// The relation is reflexive and symmetric but NOT transitive; the grouper
/// compensates by testing new arrivals against surviving canonical labels
/// only.
pub fn is_similar(a: &str, b: &str, rules: &NameRules) -> bool {
    let key_a = normalize_for_comparison(a, rules);
    let key_b = normalize_for_comparison(b, rules);
    if key_a.is_empty() || key_b.is_empty() {
        return false;
    }
    key_a.contains(&key_b) || key_b.contains(&key_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_law() {
        let rules = NameRules::default();
        assert!(is_similar("Erika Kokay", "Erika", &rules));
        assert!(is_similar("Erika", "Erika Kokay", &rules));
        assert!(!is_similar("Ana", "Bruno", &rules));
    }

    #[test]
    fn test_reflexive() {
        let rules = NameRules::default();
        assert!(is_similar("João da Silva", "João da Silva", &rules));
    }

    #[test]
    fn test_titles_ignored() {
        let rules = NameRules::default();
        assert!(is_similar("Sr. João Silva", "joão silva", &rules));
        assert!(is_similar("Senador Jaques Wagner", "Jaques Wagner", &rules));
    }

    #[test]
    fn test_empty_keys_never_match() {
        let rules = NameRules::default();
        assert!(!is_similar("Sr.", "Sr.", &rules));
        assert!(!is_similar("", "Ana", &rules));
    }

    #[test]
    fn test_not_transitive() {
        let rules = NameRules::default();
        // Both fragments sit inside the full name, but not inside each other.
        assert!(is_similar("Erika Kokay", "Erika", &rules));
        assert!(is_similar("Erika Kokay", "Kokay", &rules));
        assert!(!is_similar("Erika", "Kokay", &rules));
    }
}
