use crate::model::task::{Task, TaskDraft};

/// Transient per-row state for one task in a list view.
///
/// This is presentation-side scratch space, not canonical state: it holds
/// the in-progress name edit and a locally flipped done flag so the row can
/// react instantly while the write-then-refetch round trip is in flight.
/// It is rebuilt from the canonical snapshot whenever the row is redrawn
/// from a fresh list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    id: u64,
    name: String,
    done: bool,
    editing: bool,
}

impl RowState {
    pub fn new(task: &Task) -> Self {
        RowState {
            id: task.id,
            name: task.name.clone(),
            done: task.done,
            editing: false,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn done(&self) -> bool {
        self.done
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    /// Flip the checkbox immediately and produce the draft to dispatch.
    /// The local flag changes before the round trip completes, so the row
    /// renders the new state without waiting.
    pub fn mark_done(&mut self) -> TaskDraft {
        self.done = !self.done;
        TaskDraft::new(self.name.clone(), self.done)
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
    }

    /// Replace the name draft while editing.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Leave edit mode and produce the draft to dispatch.
    ///
    /// Quirk, kept deliberately: the dispatched draft carries the INVERTED
    /// done flag alongside the new name, and the local flag is not flipped.
    /// Saving a rename therefore also toggles completion on the service.
    /// This matches the shipped behavior; see DESIGN.md before changing it.
    pub fn save_name(&mut self) -> TaskDraft {
        self.editing = false;
        TaskDraft::new(self.name.clone(), !self.done)
    }
}
