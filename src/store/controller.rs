use tracing::debug;

use crate::gateway::TaskGateway;
use crate::model::task::{Task, TaskDraft};
use crate::store::views::{self, Counts};

/// Owner of the canonical task collection.
///
/// The collection is always a snapshot the service returned: every mutation
/// runs a two-step protocol — send the write, then unconditionally reload
/// the full collection — so local state is a pure projection of the
/// service's last list response and never a hand-patched guess. The extra
/// round trip per mutation is the price of never diverging from the
/// service.
///
/// The exclusive `&mut self` borrow on every mutating operation serializes
/// mutation cycles: a refetch cannot be overtaken by an older one.
pub struct TaskStore {
    gateway: Box<dyn TaskGateway>,
    tasks: Vec<Task>,
    hide_done: bool,
    initialized: bool,
}

impl TaskStore {
    pub fn new(gateway: Box<dyn TaskGateway>) -> Self {
        TaskStore {
            gateway,
            tasks: Vec::new(),
            hide_done: false,
            initialized: false,
        }
    }

    /// Load the initial snapshot. Runs at most once per store; later calls
    /// are no-ops. An unreachable service leaves the collection empty (the
    /// gateway already degraded the failure).
    pub async fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.tasks = self.gateway.list().await;
        debug!(count = self.tasks.len(), "loaded initial task snapshot");
    }

    /// Create a task with the given name, then reload.
    ///
    /// A blank name (empty or whitespace) is rejected before any network
    /// call and returns `false` with the collection untouched.
    pub async fn create(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.gateway.create(&TaskDraft::new(name, false)).await;
        self.refetch().await;
        true
    }

    /// Replace a task's fields wholesale, then reload. An id the service
    /// doesn't know is the service's concern; the refetch shows whatever
    /// it decided.
    pub async fn update(&mut self, id: u64, draft: TaskDraft) {
        self.gateway.update(id, &draft).await;
        self.refetch().await;
    }

    /// Delete a task by id, then reload.
    pub async fn delete(&mut self, id: u64) {
        self.gateway.delete(id).await;
        self.refetch().await;
    }

    /// Flip the hide-done toggle. Purely local.
    pub fn toggle_filter(&mut self) {
        self.hide_done = !self.hide_done;
    }

    pub fn hide_done(&self) -> bool {
        self.hide_done
    }

    /// Counts over the unfiltered collection; the toggle never affects them.
    pub fn counts(&self) -> Counts {
        views::counts(&self.tasks)
    }

    /// The collection as the presentation should show it.
    pub fn visible(&self) -> Vec<&Task> {
        views::filtered(&self.tasks, self.hide_done)
    }

    /// The full canonical snapshot, unfiltered.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    async fn refetch(&mut self) {
        self.tasks = self.gateway.list().await;
    }
}
