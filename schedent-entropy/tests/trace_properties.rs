// schedent-entropy/tests/trace_properties.rs
//! Property tests for the incremental entropy recurrence.

use std::collections::BTreeMap;

use proptest::prelude::*;
use schedent_entropy::{entropy_trace, grouped_shannon_entropy, Label};

fn stream() -> impl Strategy<Value = Vec<(Label, f64)>> {
    prop::collection::vec(
        (prop::char::range('A', 'F'), (1u32..1000).prop_map(f64::from)),
        0..40,
    )
}

proptest! {
    #[test]
    fn trace_has_one_value_per_pair(pairs in stream()) {
        let trace = entropy_trace(pairs.clone());
        prop_assert_eq!(trace.len(), pairs.len());
    }

    #[test]
    fn first_value_is_zero(pairs in stream()) {
        let trace = entropy_trace(pairs.clone());
        if let Some(first) = trace.first() {
            prop_assert_eq!(*first, 0.0);
        }
    }

    #[test]
    fn prefix_is_unaffected_by_reordering_the_suffix(pairs in stream(), cut in 0usize..40) {
        let cut = cut.min(pairs.len());
        let mut reordered = pairs.clone();
        reordered[cut..].reverse();

        let original = entropy_trace(pairs);
        let permuted = entropy_trace(reordered);
        prop_assert_eq!(&original[..cut], &permuted[..cut]);
    }

    #[test]
    fn recurrence_matches_from_scratch_entropy(pairs in stream()) {
        let trace = entropy_trace(pairs.clone());
        let mut weights: BTreeMap<Label, f64> = BTreeMap::new();

        for (i, (label, weight)) in pairs.iter().enumerate() {
            *weights.entry(*label).or_insert(0.0) += weight;
            let expected = grouped_shannon_entropy(weights.values().copied());
            prop_assert!(
                (trace[i] - expected).abs() < 1e-6,
                "step {}: {} vs {}", i, trace[i], expected
            );
        }
    }
}
