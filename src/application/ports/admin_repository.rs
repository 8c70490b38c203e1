use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AdminRow {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminRow>>;
    async fn create_admin(&self, username: &str, password_hash: &str) -> anyhow::Result<AdminRow>;
}
