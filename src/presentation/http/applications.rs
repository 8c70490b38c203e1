use axum::{
    Json, Router,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    response::Response,
    routing::{delete, get, post},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::ports::blob_store::{BlobCategory, IncomingFile};
use crate::application::use_cases::applications::delete_application::DeleteApplication;
use crate::application::use_cases::applications::list_applications::ListApplications;
use crate::application::use_cases::applications::submit_application::{
    SubmitApplication, SubmitApplicationRequest,
};
use crate::bootstrap::app_context::AppContext;
use crate::domain::applications::job_application::JobApplication;
use crate::presentation::http::auth::AdminSession;
use crate::presentation::http::error::{ApiError, ErrorResponse, MessageResponse};
use crate::presentation::http::files::download_response;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Stored resume filename, downloadable via `/admin/resumes/{name}`.
    pub file: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<JobApplication> for ApplicationResponse {
    fn from(a: JobApplication) -> Self {
        Self {
            id: a.id,
            name: a.name,
            email: a.email,
            phone: a.phone,
            file: a.file,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ApplyMultipart {
    name: String,
    email: String,
    phone: String,
    /// Resume file
    #[schema(value_type = String, format = Binary)]
    resume: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/apply", post(apply))
        .route("/admin/applications", get(list_applications))
        .route("/admin/applications/:id", delete(delete_application))
        .route("/admin/resumes/:name", get(download_resume))
        .with_state(ctx)
}

/// POST /apply (multipart/form-data)
/// Fields: name, email, phone (text), resume (file)
#[utoipa::path(
    post,
    path = "/apply",
    tag = "Applications",
    request_body(content = ApplyMultipart, content_type = "multipart/form-data"),
    security(()),
    responses(
        (status = 200, description = "Application submitted", body = MessageResponse),
        (status = 500, description = "Submission failed", body = ErrorResponse)
    )
)]
pub async fn apply(
    State(ctx): State<AppContext>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut multipart = multipart.map_err(|err| {
        tracing::error!(error = %err, "apply_not_multipart");
        ApiError::Submission
    })?;

    let mut req = SubmitApplicationRequest::default();
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        tracing::error!(error = %err, "apply_multipart_read_failed");
        ApiError::Submission
    })? {
        let name = field.name().map(|s| s.to_string());
        // An empty file input still arrives as a part with `filename=""`.
        let file_name = field
            .file_name()
            .filter(|f| !f.is_empty())
            .map(|s| s.to_string());
        match (name.as_deref(), file_name) {
            // Only a part carrying a filename counts as the uploaded resume.
            (Some("resume"), Some(original_filename)) => {
                let bytes = field.bytes().await.map_err(|err| {
                    tracing::error!(error = %err, "apply_resume_read_failed");
                    ApiError::Submission
                })?;
                req.resume = Some(IncomingFile {
                    original_filename,
                    bytes: bytes.to_vec(),
                });
            }
            (Some(key @ ("name" | "email" | "phone")), None) => {
                let value = field.text().await.map_err(|_| ApiError::Submission)?;
                match key {
                    "name" => req.name = Some(value),
                    "email" => req.email = Some(value),
                    _ => req.phone = Some(value),
                }
            }
            _ => { /* ignore additional fields */ }
        }
    }

    let repo = ctx.application_repo();
    let blobs = ctx.blob_store();
    let uc = SubmitApplication {
        repo: repo.as_ref(),
        blobs: blobs.as_ref(),
    };
    let application = uc.execute(req).await.map_err(|err| {
        tracing::error!(error = ?err, "submit_application_failed");
        ApiError::Submission
    })?;
    tracing::info!(application_id = %application.id, file = %application.file, "application_submitted");
    Ok(MessageResponse::new("application submitted"))
}

#[utoipa::path(get, path = "/admin/applications", tag = "Applications", responses(
    (status = 200, description = "All applications, newest first", body = [ApplicationResponse]),
    (status = 401, body = MessageResponse)
))]
pub async fn list_applications(
    State(ctx): State<AppContext>,
    _session: AdminSession,
) -> Result<Json<Vec<ApplicationResponse>>, ApiError> {
    let repo = ctx.application_repo();
    let uc = ListApplications {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await.map_err(|err| {
        tracing::error!(error = ?err, "list_applications_failed");
        ApiError::Internal
    })?;
    Ok(Json(items.into_iter().map(ApplicationResponse::from).collect()))
}

#[utoipa::path(delete, path = "/admin/applications/{id}", tag = "Applications",
    params(("id" = String, Path, description = "Application ID")),
    responses((status = 200, body = MessageResponse), (status = 401, body = MessageResponse)))]
pub async fn delete_application(
    State(ctx): State<AppContext>,
    session: AdminSession,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    // An id that cannot match any record is treated like an unknown one.
    let Ok(id) = Uuid::parse_str(id.trim()) else {
        return Ok(MessageResponse::new("application deleted"));
    };
    let repo = ctx.application_repo();
    let uc = DeleteApplication {
        repo: repo.as_ref(),
    };
    let removed = uc.execute(id).await.map_err(|err| {
        tracing::error!(error = ?err, application_id = %id, "delete_application_failed");
        ApiError::Internal
    })?;
    tracing::info!(application_id = %id, admin_id = %session.admin_id, removed, "application_deleted");
    Ok(MessageResponse::new("application deleted"))
}

/// GET /admin/resumes/{name} -> resume bytes as attachment
#[utoipa::path(get, path = "/admin/resumes/{name}", tag = "Applications",
    params(("name" = String, Path, description = "Stored resume filename")),
    responses(
        (status = 200, description = "OK", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, body = MessageResponse)
    ))]
pub async fn download_resume(
    State(ctx): State<AppContext>,
    _session: AdminSession,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    download_response(&ctx, BlobCategory::Resumes, &name).await
}
