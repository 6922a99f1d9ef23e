use std::collections::HashMap;

use tracing::debug;

use crate::models::{CanonicalGroups, MergedDetection, Span};
use crate::rules::{is_similar, NameRules};

/// Partition merged detections by referent identity.
///
/// Detections are processed longest-first so the most complete surface form
/// of a person is registered before its fragments arrive. Each new text is
/// compared against the surviving canonical labels only, not every prior
/// text; whenever a longer form wins, the whole group migrates under it and
/// every known alias is re-pointed. That promote-and-reparent discipline is
/// what gives the non-transitive similarity relation a practical transitive
/// closure: once two surface forms are linked they stay linked for the rest
/// of the pass.
pub fn group(merged: &[MergedDetection], rules: &NameRules) -> CanonicalGroups {
    let mut ordered: Vec<&MergedDetection> = merged.iter().collect();
    ordered.sort_by(|a, b| {
        char_len(&b.text)
            .cmp(&char_len(&a.text))
            .then_with(|| a.text.cmp(&b.text))
    });

    // Indirection table: name -> current canonical label, label -> spans.
    // `labels` preserves registration order so "first matching label" is
    // deterministic.
    let mut labels: Vec<String> = Vec::new();
    let mut name_map: HashMap<String, String> = HashMap::new();
    let mut spans: HashMap<String, Vec<Span>> = HashMap::new();

    for detection in ordered {
        let span = (detection.start, detection.end);

        if let Some(canonical) = name_map.get(&detection.text) {
            let list = spans.get_mut(canonical).expect("canonical label registered");
            if !list.contains(&span) {
                list.push(span);
            }
            continue;
        }

        let matched = labels
            .iter()
            .position(|label| is_similar(&detection.text, label, rules));

        match matched {
            Some(index) => {
                let existing = labels[index].clone();
                let chosen = if char_len(&detection.text) >= char_len(&existing) {
                    detection.text.clone()
                } else {
                    existing.clone()
                };

                if chosen != existing {
                    debug!("Promoting canonical label {:?} -> {:?}", existing, chosen);
                    let moved = spans.remove(&existing).unwrap_or_default();
                    let target = spans.entry(chosen.clone()).or_default();
                    for position in moved {
                        if !target.contains(&position) {
                            target.push(position);
                        }
                    }
                    // Re-point every alias of the group, not just the two compared
                    for label in name_map.values_mut() {
                        if *label == existing {
                            *label = chosen.clone();
                        }
                    }
                    name_map.insert(existing, chosen.clone());
                    labels.remove(index);
                    labels.push(chosen.clone());
                }

                let list = spans.entry(chosen.clone()).or_default();
                if !list.contains(&span) {
                    list.push(span);
                }
                name_map.insert(detection.text.clone(), chosen);
            }
            None => {
                name_map.insert(detection.text.clone(), detection.text.clone());
                spans.insert(detection.text.clone(), vec![span]);
                labels.push(detection.text.clone());
            }
        }
    }

    let mut groups = CanonicalGroups::new();
    for (label, mut list) in spans {
        list.sort_unstable();
        groups.insert(label, list);
    }
    groups
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(text: &str, start: usize, end: usize) -> MergedDetection {
        MergedDetection {
            text: text.to_string(),
            start,
            end,
            confidence: 0.9,
        }
    }

    #[test]
    fn test_fragment_joins_full_name() {
        let rules = NameRules::default();
        let input = vec![merged("Erika", 20, 25), merged("Erika Kokay", 0, 11)];
        let groups = group(&input, &rules);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Erika Kokay"], vec![(0, 11), (20, 25)]);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let rules = NameRules::default();
        let forward = vec![merged("Erika Kokay", 0, 11), merged("Erika", 20, 25)];
        let backward = vec![merged("Erika", 20, 25), merged("Erika Kokay", 0, 11)];

        assert_eq!(group(&forward, &rules), group(&backward, &rules));
    }

    #[test]
    fn test_unrelated_fragments_linked_through_survivor() {
        let rules = NameRules::default();
        // "Erika" and "Kokay" are not similar to each other, but both sit
        // inside the surviving label, so all three land in one group.
        let input = vec![
            merged("Erika Kokay", 0, 11),
            merged("Erika", 20, 25),
            merged("Kokay", 30, 35),
        ];
        let groups = group(&input, &rules);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Erika Kokay"], vec![(0, 11), (20, 25), (30, 35)]);
    }

    #[test]
    fn test_equal_length_label_promotion_reparents_group() {
        let rules = NameRules::default();
        // "Silva Jr." and "Sr. Silva" have equal display length, so the
        // arriving form wins the label; "Silva" then lands on the survivor.
        let input = vec![
            merged("Silva Jr.", 0, 9),
            merged("Sr. Silva", 20, 29),
            merged("Silva", 40, 45),
        ];
        let groups = group(&input, &rules);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["Sr. Silva"], vec![(0, 9), (20, 29), (40, 45)]);
    }

    #[test]
    fn test_distinct_people_stay_apart() {
        let rules = NameRules::default();
        let input = vec![merged("Ana", 0, 3), merged("Bruno", 10, 15)];
        let groups = group(&input, &rules);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Ana"], vec![(0, 3)]);
        assert_eq!(groups["Bruno"], vec![(10, 15)]);
    }

    #[test]
    fn test_partition_property() {
        let rules = NameRules::default();
        let input = vec![
            merged("Erika Kokay", 0, 11),
            merged("Erika", 20, 25),
            merged("Kokay", 30, 35),
            merged("Bruno Lima", 40, 50),
            merged("Bruno", 60, 65),
            merged("Ana", 70, 73),
        ];
        let groups = group(&input, &rules);

        let mut output_spans: Vec<Span> = groups.values().flatten().copied().collect();
        output_spans.sort_unstable();
        let mut input_spans: Vec<Span> = input.iter().map(|m| (m.start, m.end)).collect();
        input_spans.sort_unstable();

        assert_eq!(output_spans, input_spans);
    }

    #[test]
    fn test_grouping_idempotent() {
        let rules = NameRules::default();
        let input = vec![
            merged("Erika Kokay", 0, 11),
            merged("Erika", 20, 25),
            merged("Bruno Lima", 40, 50),
        ];
        let first = group(&input, &rules);

        // Re-run on one singleton detection per canonical name.
        let flattened: Vec<MergedDetection> = first
            .iter()
            .map(|(name, spans)| merged(name, spans[0].0, spans[0].1))
            .collect();
        let second = group(&flattened, &rules);

        let mut first_labels: Vec<&String> = first.keys().collect();
        let mut second_labels: Vec<&String> = second.keys().collect();
        first_labels.sort();
        second_labels.sort();
        assert_eq!(first_labels, second_labels);
    }

    #[test]
    fn test_spans_ascending_by_start() {
        let rules = NameRules::default();
        let input = vec![
            merged("Silva", 44, 49),
            merged("João Silva", 22, 32),
            merged("Silva", 90, 95),
        ];
        let groups = group(&input, &rules);

        assert_eq!(groups["João Silva"], vec![(22, 32), (44, 49), (90, 95)]);
    }

    #[test]
    fn test_repeated_surface_form_deduplicates_span() {
        let rules = NameRules::default();
        let input = vec![merged("Ana", 0, 3), merged("Ana", 0, 3), merged("Ana", 10, 13)];
        let groups = group(&input, &rules);

        assert_eq!(groups["Ana"], vec![(0, 3), (10, 13)]);
    }

    #[test]
    fn test_empty_input() {
        let rules = NameRules::default();
        assert!(group(&[], &rules).is_empty());
    }
}
