use serde::Serialize;

use crate::model::task::Task;

/// Aggregate counts over the full (unfiltered) collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub all: usize,
    pub done: usize,
}

/// Count every task and every completed task.
pub fn counts(tasks: &[Task]) -> Counts {
    Counts {
        all: tasks.len(),
        done: tasks.iter().filter(|t| t.done).count(),
    }
}

/// Apply the hide-done toggle.
///
/// The toggle hides completed tasks; it never inverts into a "done only"
/// view. With the toggle off this is the identity view, in the service's
/// order either way.
pub fn filtered(tasks: &[Task], hide_done: bool) -> Vec<&Task> {
    if hide_done {
        tasks.iter().filter(|t| !t.done).collect()
    } else {
        tasks.iter().collect()
    }
}
