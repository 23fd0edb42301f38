//! Chart selection helpers
//!
//! Pure functions over the set of ticked chart indices. An empty set means
//! every chart is shown.

use std::collections::BTreeSet;

/// Every index of a list of `count` charts
pub fn all(count: usize) -> BTreeSet<usize> {
    (0..count).collect()
}

/// Flip the membership of one chart
pub fn toggle(selected: &mut BTreeSet<usize>, index: usize) {
    if !selected.remove(&index) {
        selected.insert(index);
    }
}

/// State of the "All Charts" checkbox
pub fn is_all_selected(selected: &BTreeSet<usize>, count: usize) -> bool {
    selected.len() == count
}

/// Indices of the charts to display, in chart order
pub fn visible_indices(selected: &BTreeSet<usize>, count: usize) -> Vec<usize> {
    (0..count)
        .filter(|i| selected.is_empty() || selected.contains(i))
        .collect()
}
