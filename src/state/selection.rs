/// Cross-page row selection state
///
/// The full dataset is never held in memory, so selection is stored as
/// deltas against an implicit "nothing selected" baseline: one set of
/// ids the user explicitly selected and one set they explicitly
/// deselected. Only the currently visible rows are ever classified.

use std::collections::HashSet;

use super::data::Artwork;

/// The two-set selection store
///
/// Invariant: the two sets are disjoint. Every mutation that inserts an
/// id into one set removes it from the other. A row absent from both
/// sets is not selected (the default).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_ids: HashSet<i64>,
    deselected_ids: HashSet<i64>,
}

impl SelectionState {
    /// Create an empty selection (nothing selected, nothing deselected)
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a single record is effectively selected
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected_ids.contains(&id) && !self.deselected_ids.contains(&id)
    }

    /// Effective selection of the visible page only
    ///
    /// Returns the ids of `page_records` that are currently selected.
    /// Never reconstructs the selection of the full dataset.
    pub fn effective_ids(&self, page_records: &[Artwork]) -> HashSet<i64> {
        page_records
            .iter()
            .map(|artwork| artwork.id)
            .filter(|&id| self.is_selected(id))
            .collect()
    }

    /// Record a selection interaction on the rendered page
    ///
    /// Every record on the page is classified: into the selected set if
    /// it is in `newly_selected`, into the deselected set otherwise. No
    /// row on a visited page is left ambiguous once a toggle occurred.
    pub fn apply_page_change(&mut self, page_records: &[Artwork], newly_selected: &HashSet<i64>) {
        for artwork in page_records {
            if newly_selected.contains(&artwork.id) {
                self.selected_ids.insert(artwork.id);
                self.deselected_ids.remove(&artwork.id);
            } else {
                self.selected_ids.remove(&artwork.id);
                self.deselected_ids.insert(artwork.id);
            }
        }
    }

    /// Replace the whole selection with `selected_ids`
    ///
    /// Used only by bulk resolution. Both sets are discarded, so every
    /// prior per-page decision is overwritten, not merged.
    pub fn replace_all(&mut self, selected_ids: HashSet<i64>) {
        self.selected_ids = selected_ids;
        self.deselected_ids = HashSet::new();
    }

    /// Number of explicitly selected rows across all pages
    pub fn selected_count(&self) -> usize {
        self.selected_ids.len()
    }
}
