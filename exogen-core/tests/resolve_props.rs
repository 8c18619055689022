use exogen_core::{KeyIndex, Tier, TierSet, resolve};
use proptest::prelude::*;

const KEYS: &[&str] = &["AAA", "BBB", "CCC", "DDD", "EEE"];

fn arb_index() -> impl Strategy<Value = Vec<(usize, i32)>> {
    proptest::collection::vec((0..KEYS.len(), any::<i32>()), 0..30)
}

fn index(rows: &[(usize, i32)]) -> KeyIndex<&'static str, i32> {
    rows.iter().map(|(k, v)| (KEYS[*k], *v)).collect()
}

proptest! {
    #[test]
    fn specific_rows_never_fall_through(
        spec in arb_index(),
        agg in arb_index(),
        global in proptest::collection::vec(any::<i32>(), 0..5),
        k in 0..KEYS.len(),
    ) {
        let key = KEYS[k];
        let specific = index(&spec);
        let aggregated = index(&agg);
        let r = resolve(&key, &specific, &aggregated, &global);

        let expected_specific: Vec<i32> = spec.iter().filter(|(i, _)| *i == k).map(|(_, v)| *v).collect();
        let expected_agg: Vec<i32> = agg.iter().filter(|(i, _)| *i == k).map(|(_, v)| *v).collect();

        if !expected_specific.is_empty() {
            prop_assert_eq!(r.tier, Tier::Model);
            prop_assert_eq!(r.rows, expected_specific.as_slice());
        } else if !expected_agg.is_empty() {
            prop_assert_eq!(r.tier, Tier::AnyModel);
            prop_assert_eq!(r.rows, expected_agg.as_slice());
        } else {
            prop_assert_eq!(r.tier, Tier::Global);
            prop_assert_eq!(r.rows, global.as_slice());
        }
    }

    #[test]
    fn resolution_is_deterministic(spec in arb_index(), agg in arb_index(), k in 0..KEYS.len()) {
        let tiers = TierSet::new(index(&spec), index(&agg), vec![0]);
        let a = tiers.resolve(&KEYS[k]);
        let b = tiers.resolve(&KEYS[k]);
        prop_assert_eq!(a, b);
    }
}

#[test]
fn touched_aggregate_key_without_rows_uses_global() {
    let specific: KeyIndex<&str, i32> = KeyIndex::new();
    let mut aggregated: KeyIndex<&str, i32> = KeyIndex::new();
    aggregated.touch("AAA");
    let tiers = TierSet::new(specific, aggregated, vec![7]);
    let r = tiers.resolve(&"AAA");
    assert_eq!(r.tier, Tier::Global);
    assert_eq!(r.first(), Some(&7));
}
