use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::admin_repository::{AdminRepository, AdminRow};
use crate::infrastructure::db::PgPool;

pub struct SqlxAdminRepository {
    pub pool: PgPool,
}

impl SqlxAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for SqlxAdminRepository {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminRow>> {
        let row = sqlx::query(r#"SELECT id, username, password_hash FROM admins WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| AdminRow {
            id: r.get("id"),
            username: r.get("username"),
            password_hash: r.get("password_hash"),
        }))
    }

    async fn create_admin(&self, username: &str, password_hash: &str) -> anyhow::Result<AdminRow> {
        let row = sqlx::query(
            r#"INSERT INTO admins (username, password_hash) VALUES ($1, $2)
               RETURNING id, username, password_hash"#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;
        Ok(AdminRow {
            id: row.get("id"),
            username: row.get("username"),
            password_hash: row.get("password_hash"),
        })
    }
}
