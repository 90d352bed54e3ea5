use crate::domain::model::{ContextLookup, Submission};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Persistence collaborator for poem records. Ownership checks are enforced
/// by the workflow, never assumed of the store.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn create(&self, text: &str, owner: &str) -> Result<u64>;
    async fn update(&self, id: u64, text: &str) -> Result<()>;
    async fn get(&self, id: u64) -> Result<Submission>;
    async fn count_by_owner(&self, owner: &str) -> Result<usize>;
    async fn list_by_owner(&self, owner: &str) -> Result<Vec<Submission>>;
}

/// External key-value lookup for per-actor grading contexts. A miss is
/// signaled as `ContextLookup::Absent`; only infrastructure failures are
/// errors.
#[async_trait]
pub trait ContextStore: Send + Sync {
    async fn lookup(&self, actor: &str) -> Result<ContextLookup>;
}

/// Opaque "send grade" collaborator. Handles its own transport and auth.
#[async_trait]
pub trait OutcomeSender: Send + Sync {
    async fn send(&self, actor: &str, grade: f64, correlation_key: &str) -> Result<()>;
}
