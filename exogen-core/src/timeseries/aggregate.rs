//! Median aggregation used to collapse reference rows into fallback tiers.

use std::collections::BTreeMap;

/// Median of the defined (non-NaN) values.
///
/// Even-sized inputs average the two middle values. Returns `None` when no
/// defined value remains.
#[must_use]
pub fn median<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut v: Vec<f64> = values.into_iter().filter(|x| !x.is_nan()).collect();
    if v.is_empty() {
        return None;
    }
    v.sort_by(f64::total_cmp);
    let mid = v.len() / 2;
    if v.len() % 2 == 1 {
        Some(v[mid])
    } else {
        Some((v[mid - 1] + v[mid]) / 2.0)
    }
}

/// Collapse `(key, value)` pairs to one median per key.
///
/// Keys whose values are all undefined are dropped, so lookups for them fall
/// through to the next tier instead of yielding an undefined value.
#[must_use]
pub fn median_by_key<K, I>(items: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut groups: BTreeMap<K, Vec<f64>> = BTreeMap::new();
    for (k, v) in items {
        groups.entry(k).or_default().push(v);
    }
    groups
        .into_iter()
        .filter_map(|(k, vs)| median(vs).map(|m| (k, m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_and_even_counts() {
        assert_eq!(median([110.0, 90.0, 100.0]), Some(100.0));
        assert_eq!(median([1.0, 4.0, 2.0, 3.0]), Some(2.5));
        assert_eq!(median([7.0]), Some(7.0));
        assert_eq!(median(std::iter::empty()), None);
    }

    #[test]
    fn nan_is_skipped() {
        assert_eq!(median([f64::NAN, 3.0, 1.0]), Some(2.0));
        assert_eq!(median([f64::NAN]), None);
    }

    #[test]
    fn grouped_medians_drop_undefined_groups() {
        let out = median_by_key([("a", 1.0), ("b", f64::NAN), ("a", 3.0), ("a", 100.0)]);
        assert_eq!(out.get("a"), Some(&3.0));
        assert!(!out.contains_key("b"));
    }
}
