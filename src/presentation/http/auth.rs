use crate::application::use_cases::auth::login::{Login as LoginUc, LoginRequest as LoginDto};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::presentation::http::error::{ApiError, MessageResponse};
use axum::{Json, Router, extract::State, routing::post};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Token payload: the admin id plus issue/expiry times.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: String,
    pub iat: usize,
    pub exp: usize,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/admin/login", post(login))
        .with_state(ctx)
}

#[utoipa::path(post, path = "/admin/login", tag = "Auth", request_body = LoginRequest, security(()), responses(
    (status = 200, body = LoginResponse),
    (status = 400, description = "Unknown username or wrong password", body = MessageResponse)
))]
pub async fn login(
    State(ctx): State<AppContext>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let repo = ctx.admin_repo();
    let uc = LoginUc {
        repo: repo.as_ref(),
    };
    let dto = LoginDto {
        username: req.username,
        password: req.password,
    };
    let admin = uc.execute(&dto).await.map_err(|err| {
        tracing::warn!(error = %err, username = %dto.username, "admin_login_rejected");
        err
    })?;
    let token = issue_token(&ctx.cfg, admin.id).map_err(|err| {
        tracing::error!(error = ?err, "token_encode_failed");
        ApiError::Internal
    })?;
    tracing::info!(admin_id = %admin.id, "admin_logged_in");
    Ok(Json(LoginResponse { token }))
}

pub fn issue_token(cfg: &Config, admin_id: Uuid) -> jsonwebtoken::errors::Result<String> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        id: admin_id.to_string(),
        iat: now,
        exp: now + (cfg.jwt_expires_secs.max(0) as usize),
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
    )
}

// --- Bearer extractor & admin guard ---
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

pub struct Bearer(pub String);

#[axum::async_trait]
impl<S> FromRequestParts<S> for Bearer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|auth| auth.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| Bearer(t.to_string()))
            .ok_or(ApiError::Unauthorized)
    }
}

pub fn validate_bearer(cfg: &Config, bearer: Bearer) -> Result<Claims, ApiError> {
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;
    Ok(data.claims)
}

/// Identity of the authenticated administrator making the request.
#[derive(Debug, Clone, Copy)]
pub struct AdminSession {
    pub admin_id: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for AdminSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        let bearer = Bearer::from_request_parts(parts, ctx).await?;
        let claims = validate_bearer(&ctx.cfg, bearer)?;
        let admin_id = Uuid::parse_str(&claims.id).map_err(|_| ApiError::Unauthorized)?;
        Ok(AdminSession { admin_id })
    }
}
