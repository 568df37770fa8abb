use std::collections::BTreeMap;

/// Turn a vector of rows, each a map from key to value, into a map from key to
/// the column of values.
///
/// Every row is expected to carry the keys of the first row. Keys that only
/// appear in later rows are dropped.
///
/// # Example
///
/// ```rust
/// # use bayeswalk_utils::misc::transpose_mapvec;
/// # use std::collections::BTreeMap;
/// let mut row_a = BTreeMap::new();
/// row_a.insert("mu", 1.0);
/// row_a.insert("sig2", 2.0);
///
/// let mut row_b = BTreeMap::new();
/// row_b.insert("mu", 3.0);
/// row_b.insert("sig2", 4.0);
///
/// let cols = transpose_mapvec(&[row_a, row_b]);
///
/// assert_eq!(cols["mu"], vec![1.0, 3.0]);
/// assert_eq!(cols["sig2"], vec![2.0, 4.0]);
/// ```
pub fn transpose_mapvec<K: Clone + Ord, V: Clone>(
    mapvec: &[BTreeMap<K, V>],
) -> BTreeMap<K, Vec<V>> {
    let mut transposed: BTreeMap<K, Vec<V>> = BTreeMap::new();
    let n = mapvec.len();

    let first = match mapvec.first() {
        Some(row) => row,
        None => return transposed,
    };

    for key in first.keys() {
        transposed.insert(key.clone(), Vec::with_capacity(n));
    }

    for row in mapvec {
        for (key, value) in row {
            if let Some(col) = transposed.get_mut(key) {
                col.push(value.clone());
            }
        }
    }

    transposed
}
