use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::application::ports::application_repository::ApplicationRepository;
use crate::domain::applications::job_application::{JobApplication, NewApplication};
use crate::infrastructure::db::PgPool;

pub struct SqlxApplicationRepository {
    pub pool: PgPool,
}

impl SqlxApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_row(r: PgRow) -> JobApplication {
    JobApplication {
        id: r.get("id"),
        name: r.get("name"),
        email: r.get("email"),
        phone: r.get("phone"),
        file: r.get("file"),
        created_at: r.get("created_at"),
        updated_at: r.get("updated_at"),
    }
}

#[async_trait]
impl ApplicationRepository for SqlxApplicationRepository {
    async fn create(&self, new: &NewApplication) -> anyhow::Result<JobApplication> {
        if let Some(field) = new.missing_field() {
            anyhow::bail!("job application validation failed: `{}` is required", field);
        }
        let row = sqlx::query(
            r#"INSERT INTO job_applications (name, email, phone, file)
               VALUES ($1, $2, $3, $4)
               RETURNING id, name, email, phone, file, created_at, updated_at"#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.phone)
        .bind(&new.file)
        .fetch_one(&self.pool)
        .await?;
        Ok(map_row(row))
    }

    async fn list_all(&self) -> anyhow::Result<Vec<JobApplication>> {
        let rows = sqlx::query(
            r#"SELECT id, name, email, phone, file, created_at, updated_at
               FROM job_applications
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_row).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM job_applications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}
