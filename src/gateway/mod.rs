pub mod http;

pub use http::HttpGateway;

use async_trait::async_trait;

use crate::model::task::{Task, TaskDraft};

/// Error type for gateway request plumbing.
///
/// These never cross the [`TaskGateway`] boundary: implementations log and
/// degrade instead of returning them (a failed list yields an empty
/// collection, a failed mutation is swallowed).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not decode task list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The four operations the remote task service exposes.
///
/// Callers never handle errors from these: `list` degrades to an empty
/// collection on failure, and the three mutations are fire-and-forget
/// (failures are logged by the implementation and otherwise swallowed —
/// the caller's follow-up refetch shows whatever state the service is
/// actually in).
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetch the full task collection, in the service's order.
    async fn list(&self) -> Vec<Task>;

    /// Create a new task. The service assigns the id; the response is
    /// discarded — callers refetch instead of inspecting it.
    async fn create(&self, draft: &TaskDraft);

    /// Replace the named task's mutable fields wholesale.
    async fn update(&self, id: u64, draft: &TaskDraft);

    /// Delete a task by id.
    async fn delete(&self, id: u64);
}
