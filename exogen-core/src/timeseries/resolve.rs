//! Tiered lookup: the most specific non-empty tier wins.

use std::collections::BTreeMap;

use exogen_types::Tier;

/// Rows grouped by key, preserving input order within each key.
///
/// This is the pre-partitioned form of a tier table: looking a key up is the
/// equivalent of filtering the full table by that key.
#[derive(Debug, Clone)]
pub struct KeyIndex<K, R> {
    rows: BTreeMap<K, Vec<R>>,
}

impl<K, R> Default for KeyIndex<K, R> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
        }
    }
}

impl<K: Ord, R> KeyIndex<K, R> {
    /// Empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row under `key`.
    pub fn push(&mut self, key: K, row: R) {
        self.rows.entry(key).or_default().push(row);
    }

    /// Make `key` present, even with no rows.
    pub fn touch(&mut self, key: K) {
        self.rows.entry(key).or_default();
    }

    /// Rows under `key`; empty when the key is absent.
    #[must_use]
    pub fn rows(&self, key: &K) -> &[R] {
        self.rows.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when `key` is present, regardless of how many rows it holds.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.rows.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no key is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.rows.keys()
    }

    /// Reorder the rows under every key with a stable sort.
    pub fn sort_rows_by_key<S, F>(&mut self, mut f: F)
    where
        S: Ord,
        F: FnMut(&R) -> S,
    {
        for rows in self.rows.values_mut() {
            rows.sort_by_key(&mut f);
        }
    }
}

impl<K: Ord, R> FromIterator<(K, R)> for KeyIndex<K, R> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (k, r) in iter {
            out.push(k, r);
        }
        out
    }
}

/// Rows selected by [`resolve`], tagged with the tier they came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a, R> {
    /// Tier that supplied the rows.
    pub tier: Tier,
    /// Selected rows, in stable input order.
    pub rows: &'a [R],
}

impl<R> Resolved<'_, R> {
    /// First selected row, if any.
    #[must_use]
    pub fn first(&self) -> Option<&R> {
        self.rows.first()
    }
}

/// Pick the most specific non-empty source for `key`.
///
/// 1. `specific` rows for `key`, when non-empty.
/// 2. `aggregated` rows for `key`, when the key is present and its rows are
///    non-empty. A present key with no rows falls through.
/// 3. `global`, unfiltered.
#[must_use]
pub fn resolve<'a, K, R>(
    key: &K,
    specific: &'a KeyIndex<K, R>,
    aggregated: &'a KeyIndex<K, R>,
    global: &'a [R],
) -> Resolved<'a, R>
where
    K: Ord,
{
    let rows = specific.rows(key);
    if !rows.is_empty() {
        return Resolved {
            tier: Tier::Model,
            rows,
        };
    }

    if aggregated.contains_key(key) {
        let rows = aggregated.rows(key);
        if !rows.is_empty() {
            return Resolved {
                tier: Tier::AnyModel,
                rows,
            };
        }
    }

    Resolved {
        tier: Tier::Global,
        rows: global,
    }
}

/// The three tiers of one reference table, ready for resolution.
#[derive(Debug, Clone)]
pub struct TierSet<K, R> {
    model: KeyIndex<K, R>,
    any_model: KeyIndex<K, R>,
    global: Vec<R>,
}

impl<K: Ord, R> TierSet<K, R> {
    /// Bundle pre-partitioned tiers, most specific first.
    #[must_use]
    pub const fn new(model: KeyIndex<K, R>, any_model: KeyIndex<K, R>, global: Vec<R>) -> Self {
        Self {
            model,
            any_model,
            global,
        }
    }

    /// Resolve `key` against the tiers; see [`resolve`].
    #[must_use]
    pub fn resolve(&self, key: &K) -> Resolved<'_, R> {
        resolve(key, &self.model, &self.any_model, &self.global)
    }

    /// Model-specific tier.
    #[must_use]
    pub const fn model(&self) -> &KeyIndex<K, R> {
        &self.model
    }

    /// Cross-model aggregated tier.
    #[must_use]
    pub const fn any_model(&self) -> &KeyIndex<K, R> {
        &self.any_model
    }

    /// Global fallback rows.
    #[must_use]
    pub fn global(&self) -> &[R] {
        &self.global
    }
}
