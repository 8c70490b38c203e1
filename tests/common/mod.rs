#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use job_intake::application::ports::admin_repository::{AdminRepository, AdminRow};
use job_intake::application::ports::application_repository::ApplicationRepository;
use job_intake::application::use_cases::auth::seed_admin::SeedAdmin;
use job_intake::bootstrap::app_context::{AppContext, AppServices};
use job_intake::bootstrap::config::Config;
use job_intake::domain::applications::job_application::{JobApplication, NewApplication};
use job_intake::infrastructure::storage::FsBlobStore;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";
pub const JWT_SECRET: &str = "integration-test-secret-0123456789";

#[derive(Default)]
pub struct InMemoryAdminRepository {
    rows: Mutex<Vec<AdminRow>>,
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<AdminRow>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|r| r.username == username).cloned())
    }

    async fn create_admin(&self, username: &str, password_hash: &str) -> anyhow::Result<AdminRow> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|r| r.username == username) {
            anyhow::bail!("duplicate username");
        }
        let row = AdminRow {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(row.clone());
        Ok(row)
    }
}

#[derive(Default)]
pub struct InMemoryApplicationRepository {
    rows: Mutex<Vec<JobApplication>>,
}

impl InMemoryApplicationRepository {
    pub fn snapshot(&self) -> Vec<JobApplication> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(&self, new: &NewApplication) -> anyhow::Result<JobApplication> {
        if let Some(field) = new.missing_field() {
            anyhow::bail!("`{}` is required", field);
        }
        let now = chrono::Utc::now();
        let row = JobApplication {
            id: Uuid::new_v4(),
            name: new.name.clone(),
            email: new.email.clone(),
            phone: new.phone.clone(),
            file: new.file.clone(),
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<JobApplication>> {
        // Reverse first so equal timestamps keep the later insert in front.
        let mut rows: Vec<_> = self.rows.lock().unwrap().iter().rev().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn delete_by_id(&self, id: Uuid) -> anyhow::Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.id != id);
        Ok(rows.len() != before)
    }
}

pub struct TestApp {
    pub router: Router,
    pub ctx: AppContext,
    pub applications: Arc<InMemoryApplicationRepository>,
    pub uploads: TempDir,
}

pub fn test_config(uploads_dir: &str) -> Config {
    Config::from_lookup(|key| match key {
        "JWT_SECRET" => Some(JWT_SECRET.to_string()),
        "UPLOADS_DIR" => Some(uploads_dir.to_string()),
        _ => None,
    })
    .unwrap()
}

pub async fn spawn_app() -> TestApp {
    let uploads = TempDir::new().unwrap();
    let cfg = test_config(uploads.path().to_str().unwrap());

    let admins = Arc::new(InMemoryAdminRepository::default());
    SeedAdmin {
        repo: admins.as_ref(),
    }
    .execute(ADMIN_USERNAME, ADMIN_PASSWORD)
    .await
    .unwrap();

    let applications = Arc::new(InMemoryApplicationRepository::default());
    let blobs = Arc::new(FsBlobStore::new(uploads.path()));
    blobs.ensure_layout().await.unwrap();

    let services = AppServices::new(admins, applications.clone(), blobs);
    let ctx = AppContext::new(cfg, services);
    TestApp {
        router: job_intake::presentation::http::api_router(ctx.clone()),
        ctx,
        applications,
        uploads,
    }
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn login(&self, username: &str, password: &str) -> Response<Body> {
        let body = serde_json::json!({ "username": username, "password": password });
        self.send(
            Request::builder()
                .method("POST")
                .uri("/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn admin_token(&self) -> String {
        let res = self.login(ADMIN_USERNAME, ADMIN_PASSWORD).await;
        assert_eq!(res.status(), 200);
        let json = body_json(res).await;
        json["token"].as_str().unwrap().to_string()
    }

    pub fn files_dir(&self) -> std::path::PathBuf {
        self.uploads.path().join("files")
    }

    pub fn jobs_dir(&self) -> std::path::PathBuf {
        self.uploads.path().join("jobs")
    }
}

pub async fn body_bytes(res: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(res).await).unwrap()
}

pub fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// One multipart part: (field name, optional filename, content).
pub type Part<'a> = (&'a str, Option<&'a str>, &'a [u8]);

pub fn multipart_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    parts: &[Part<'_>],
) -> Request<Body> {
    let boundary = "----job-intake-test-boundary";
    let mut body = Vec::new();
    for (name, filename, content) in parts {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        match filename {
            Some(filename) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
            }
        }
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn authed(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}
