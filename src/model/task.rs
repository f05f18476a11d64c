use serde::{Deserialize, Serialize};

/// A task as stored by the remote service.
///
/// `id` is assigned by the service and never changes once assigned. The
/// client never invents ids: a task only enters the local collection by
/// arriving in a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub done: bool,
}

/// The create/update payload: a full replacement of the mutable fields.
///
/// The service's update endpoint replaces the whole record, so both fields
/// are always sent even when only one changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub name: String,
    pub done: bool,
}

impl TaskDraft {
    pub fn new(name: impl Into<String>, done: bool) -> Self {
        TaskDraft {
            name: name.into(),
            done,
        }
    }
}

impl Task {
    /// Build a full-replace draft from the current snapshot of this task.
    pub fn draft(&self) -> TaskDraft {
        TaskDraft {
            name: self.name.clone(),
            done: self.done,
        }
    }
}
