//! FILENAME: core/table-engine/src/selection.rs
//! The set of record identifiers marked for batch action.
//!
//! Selection is collection-scoped: identifiers hidden by the current filter
//! stay selected and reappear when the filter matches them again.

use engine::RecordId;
use rustc_hash::FxHashSet;

use crate::definition::SelectionState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    ids: FxHashSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn remove(&mut self, id: RecordId) {
        self.ids.remove(&id);
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replaces the selection with exactly `ids`.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids.clear();
        self.ids.extend(ids);
    }

    /// True when the selection is exactly the given identifier set.
    pub fn equals(&self, view_ids: &[RecordId]) -> bool {
        // View identifiers are unique, so equal sizes plus containment is set equality.
        self.ids.len() == view_ids.len() && view_ids.iter().all(|id| self.ids.contains(id))
    }

    pub fn state(&self, view_ids: &[RecordId]) -> SelectionState {
        if self.ids.is_empty() {
            SelectionState::None
        } else if self.equals(view_ids) {
            SelectionState::All
        } else {
            SelectionState::Partial
        }
    }

    /// Selected identifiers in ascending order.
    pub fn sorted_ids(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}
