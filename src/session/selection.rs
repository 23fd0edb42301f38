//! Chart selection
//!
//! Tracks which charts are ticked in the chart picker and derives the list
//! of charts to show from it.

use std::collections::BTreeSet;

use crate::model::ChartDescriptor;

/// Set of selected chart indices
///
/// An empty selection means "show everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSelection {
    indices: BTreeSet<usize>,
}

impl ChartSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection containing every chart of a list of `count` charts
    pub fn all(count: usize) -> Self {
        Self {
            indices: (0..count).collect(),
        }
    }

    /// Build a selection from user-supplied indices, ignoring any that do
    /// not reference one of the `count` loaded charts
    pub fn from_indices(indices: impl IntoIterator<Item = usize>, count: usize) -> Self {
        Self {
            indices: indices.into_iter().filter(|&i| i < count).collect(),
        }
    }

    pub fn select_all(&mut self, count: usize) {
        self.indices = (0..count).collect();
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Flip the membership of one chart
    pub fn toggle(&mut self, index: usize) {
        if !self.indices.remove(&index) {
            self.indices.insert(index);
        }
    }

    /// Handler for the "All Charts" checkbox
    pub fn set_all(&mut self, checked: bool, count: usize) {
        if checked {
            self.select_all(count);
        } else {
            self.clear();
        }
    }

    /// Re-seed the selection after the chart list was replaced
    pub fn reset_for(&mut self, count: usize) {
        self.select_all(count);
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// State of the "All Charts" checkbox
    pub fn is_all_selected(&self, count: usize) -> bool {
        self.indices.len() == count
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    /// Charts to display, with their original index, in chart order
    pub fn visible<'a>(&self, charts: &'a [ChartDescriptor]) -> Vec<(usize, &'a ChartDescriptor)> {
        charts
            .iter()
            .enumerate()
            .filter(|(i, _)| self.indices.is_empty() || self.indices.contains(i))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charts(n: usize) -> Vec<ChartDescriptor> {
        (0..n)
            .map(|i| ChartDescriptor {
                id: Some(i.to_string()),
                title: format!("Chart {}", i),
                img: String::new(),
            })
            .collect()
    }

    fn visible_indices(sel: &ChartSelection, charts: &[ChartDescriptor]) -> Vec<usize> {
        sel.visible(charts).into_iter().map(|(i, _)| i).collect()
    }

    #[test]
    fn test_empty_selection_shows_all() {
        let charts = charts(3);
        let sel = ChartSelection::new();
        assert_eq!(visible_indices(&sel, &charts), vec![0, 1, 2]);
    }

    #[test]
    fn test_visible_filters_in_chart_order() {
        let charts = charts(5);
        let mut sel = ChartSelection::new();
        sel.toggle(3);
        sel.toggle(1);
        assert_eq!(visible_indices(&sel, &charts), vec![1, 3]);
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = ChartSelection::all(3);
        sel.toggle(1);
        assert!(!sel.contains(1));
        assert!(!sel.is_all_selected(3));
        sel.toggle(1);
        assert!(sel.contains(1));
        assert!(sel.is_all_selected(3));
    }

    #[test]
    fn test_set_all_toggles_full_set() {
        let mut sel = ChartSelection::new();
        sel.set_all(true, 4);
        assert_eq!(sel.len(), 4);
        assert!(sel.is_all_selected(4));

        sel.set_all(false, 4);
        assert!(sel.is_empty());
        assert!(!sel.is_all_selected(4));
    }

    #[test]
    fn test_reset_for_drops_stale_indices() {
        let mut sel = ChartSelection::all(14);
        sel.reset_for(10);
        assert_eq!(sel.iter().max(), Some(9));
        assert!(sel.is_all_selected(10));
    }

    #[test]
    fn test_from_indices_ignores_out_of_range() {
        let sel = ChartSelection::from_indices([0, 2, 9], 3);
        assert_eq!(sel.iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_all_selected_with_no_charts() {
        // The "All Charts" box reads as checked when nothing is loaded
        let sel = ChartSelection::new();
        assert!(sel.is_all_selected(0));
    }
}
