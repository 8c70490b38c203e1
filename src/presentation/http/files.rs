use axum::{
    Json, Router,
    body::Body,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::{HeaderMap, HeaderValue, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;
use tokio_util::io::ReaderStream;
use utoipa::ToSchema;

use crate::application::ports::blob_store::{BlobCategory, BlobStoreError, IncomingFile};
use crate::application::use_cases::files::delete_file::DeleteFile;
use crate::application::use_cases::files::download_file::DownloadFile;
use crate::application::use_cases::files::list_files::ListFiles;
use crate::application::use_cases::files::upload_file::UploadFile;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::auth::AdminSession;
use crate::presentation::http::error::{ApiError, MessageResponse};

// Uses AppContext as router state

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadFileResponse {
    pub msg: String,
    /// Generated `<timestamp>-<original>` name
    pub filename: String,
}

#[derive(ToSchema)]
#[allow(dead_code)]
pub struct UploadFileMultipart {
    /// File to upload
    #[schema(value_type = String, format = Binary)]
    file: String,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/files", get(list_public_files))
        .route("/download/file/:name", get(download_file))
        .route("/admin/upload-file", post(upload_file))
        .route("/admin/files", get(list_admin_files))
        .route("/admin/files/:filename", delete(delete_file))
        .with_state(ctx)
}

async fn list_files(ctx: &AppContext) -> Result<Json<Vec<String>>, ApiError> {
    let blobs = ctx.blob_store();
    let uc = ListFiles {
        blobs: blobs.as_ref(),
    };
    let names = uc.execute().await.map_err(|err| {
        tracing::error!(error = ?err, "list_files_failed");
        ApiError::Storage("failed to read files")
    })?;
    Ok(Json(names))
}

#[utoipa::path(get, path = "/files", tag = "Files", security(()), responses(
    (status = 200, body = [String]),
    (status = 500, body = MessageResponse)
))]
pub async fn list_public_files(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<String>>, ApiError> {
    list_files(&ctx).await
}

#[utoipa::path(get, path = "/admin/files", tag = "Files", responses(
    (status = 200, body = [String]),
    (status = 401, body = MessageResponse),
    (status = 500, body = MessageResponse)
))]
pub async fn list_admin_files(
    State(ctx): State<AppContext>,
    _session: AdminSession,
) -> Result<Json<Vec<String>>, ApiError> {
    list_files(&ctx).await
}

/// GET /download/file/{name} -> file bytes as attachment
#[utoipa::path(
    get,
    path = "/download/file/{name}",
    tag = "Files",
    security(()),
    params(("name" = String, Path, description = "Stored filename")),
    responses(
        (status = 200, description = "OK", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, body = MessageResponse)
    )
)]
pub async fn download_file(
    State(ctx): State<AppContext>,
    Path(name): Path<String>,
) -> Result<Response, ApiError> {
    download_response(&ctx, BlobCategory::Files, &name).await
}

/// Streams a stored blob as an attachment download.
pub(crate) async fn download_response(
    ctx: &AppContext,
    category: BlobCategory,
    name: &str,
) -> Result<Response, ApiError> {
    let blobs = ctx.blob_store();
    let uc = DownloadFile {
        blobs: blobs.as_ref(),
    };
    let download = uc.execute(category, name).await.map_err(|err| match err {
        BlobStoreError::NotFound(_) | BlobStoreError::InvalidName(_) => ApiError::NotFound,
        other => {
            tracing::error!(error = ?other, filename = %name, "open_blob_failed");
            ApiError::Storage("failed to read file")
        }
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&download.content_type)
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(download.handle.size));
    headers.insert(
        header::CONTENT_DISPOSITION,
        content_disposition(&download.filename),
    );
    headers.insert(
        header::HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );
    let body = Body::from_stream(ReaderStream::new(download.handle.reader));
    Ok((headers, body).into_response())
}

fn content_disposition(filename: &str) -> HeaderValue {
    let escaped = filename.replace(['"', '\\'], "_");
    HeaderValue::from_str(&format!("attachment; filename=\"{}\"", escaped))
        .unwrap_or(HeaderValue::from_static("attachment"))
}

/// POST /admin/upload-file (multipart/form-data)
/// Fields:
/// - file: binary file (required)
#[utoipa::path(
    post,
    path = "/admin/upload-file",
    tag = "Files",
    request_body(
        content = UploadFileMultipart,
        content_type = "multipart/form-data",
    ),
    responses(
        (status = 200, description = "File uploaded", body = UploadFileResponse),
        (status = 401, body = MessageResponse),
        (status = 500, body = MessageResponse)
    )
)]
pub async fn upload_file(
    State(ctx): State<AppContext>,
    session: AdminSession,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadFileResponse>, ApiError> {
    let mut multipart = multipart.map_err(|err| {
        tracing::error!(error = %err, "upload_not_multipart");
        ApiError::Storage("failed to upload file")
    })?;

    let mut incoming: Option<IncomingFile> = None;
    while let Some(field) = multipart.next_field().await.map_err(|err| {
        tracing::error!(error = %err, "upload_multipart_read_failed");
        ApiError::Storage("failed to upload file")
    })? {
        let name = field.name().map(|s| s.to_string());
        let file_name = field
            .file_name()
            .filter(|f| !f.is_empty())
            .map(|s| s.to_string());
        if let (Some("file"), Some(original_filename)) = (name.as_deref(), file_name) {
            let data = field
                .bytes()
                .await
                .map_err(|_| ApiError::Storage("failed to upload file"))?;
            incoming = Some(IncomingFile {
                original_filename,
                bytes: data.to_vec(),
            });
        }
    }
    let Some(incoming) = incoming else {
        tracing::warn!(admin_id = %session.admin_id, "upload_without_file");
        return Err(ApiError::Storage("failed to upload file"));
    };

    let blobs = ctx.blob_store();
    let uc = UploadFile {
        blobs: blobs.as_ref(),
    };
    let stored = uc.execute(&incoming).await.map_err(|err| {
        tracing::error!(error = ?err, "store_public_file_failed");
        ApiError::Storage("failed to upload file")
    })?;
    Ok(Json(UploadFileResponse {
        msg: "file uploaded".into(),
        filename: stored.filename,
    }))
}

#[utoipa::path(delete, path = "/admin/files/{filename}", tag = "Files",
    params(("filename" = String, Path, description = "Stored filename")),
    responses(
        (status = 200, body = MessageResponse),
        (status = 401, body = MessageResponse),
        (status = 500, description = "Missing or undeletable file", body = MessageResponse)
    ))]
pub async fn delete_file(
    State(ctx): State<AppContext>,
    session: AdminSession,
    Path(filename): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let blobs = ctx.blob_store();
    let uc = DeleteFile {
        blobs: blobs.as_ref(),
    };
    uc.execute(&filename).await.map_err(|err| {
        tracing::warn!(error = ?err, filename = %filename, "delete_file_failed");
        ApiError::Storage("failed to delete file")
    })?;
    tracing::info!(filename = %filename, admin_id = %session.admin_id, "public_file_deleted");
    Ok(MessageResponse::new("file deleted"))
}
