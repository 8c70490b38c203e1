use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::applications::job_application::{JobApplication, NewApplication};

#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    async fn create(&self, new: &NewApplication) -> anyhow::Result<JobApplication>;
    /// Newest first.
    async fn list_all(&self) -> anyhow::Result<Vec<JobApplication>>;
    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool>;
}
