use axum::Router;
use axum::extract::DefaultBodyLimit;

use crate::bootstrap::app_context::AppContext;

pub mod applications;
pub mod auth;
pub mod error;
pub mod files;
pub mod health;

/// Public and admin API routes. Static assets, health and docs are mounted by
/// the binary.
pub fn api_router(ctx: AppContext) -> Router {
    let body_limit = ctx.cfg.upload_max_bytes;
    Router::new()
        .merge(applications::routes(ctx.clone()))
        .merge(files::routes(ctx.clone()))
        .merge(auth::routes(ctx))
        .layer(DefaultBodyLimit::max(body_limit))
}
