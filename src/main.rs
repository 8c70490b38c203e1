use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::MatchedPath;
use dotenvy::dotenv;
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use job_intake::application::ports::blob_store::BlobCategory;
use job_intake::application::use_cases::auth::seed_admin::SeedAdmin;
use job_intake::bootstrap::app_context::{AppContext, AppServices};
use job_intake::bootstrap::config::Config;
use job_intake::infrastructure::db::repositories::admin_repository_sqlx::SqlxAdminRepository;
use job_intake::infrastructure::db::repositories::application_repository_sqlx::SqlxApplicationRepository;
use job_intake::infrastructure::storage::FsBlobStore;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
        paths(
            job_intake::presentation::http::applications::apply,
            job_intake::presentation::http::applications::list_applications,
            job_intake::presentation::http::applications::delete_application,
            job_intake::presentation::http::applications::download_resume,
            job_intake::presentation::http::files::list_public_files,
            job_intake::presentation::http::files::list_admin_files,
            job_intake::presentation::http::files::download_file,
            job_intake::presentation::http::files::upload_file,
            job_intake::presentation::http::files::delete_file,
            job_intake::presentation::http::auth::login,
            job_intake::presentation::http::health::health,
        ),
        components(schemas(
            job_intake::presentation::http::applications::ApplicationResponse,
            job_intake::presentation::http::applications::ApplyMultipart,
            job_intake::presentation::http::files::UploadFileResponse,
            job_intake::presentation::http::files::UploadFileMultipart,
            job_intake::presentation::http::auth::LoginRequest,
            job_intake::presentation::http::auth::LoginResponse,
            job_intake::presentation::http::error::MessageResponse,
            job_intake::presentation::http::error::ErrorResponse,
            job_intake::presentation::http::health::HealthResp,
        )),
        tags(
            (name = "Applications", description = "Job application intake and review"),
            (name = "Files", description = "Public file library"),
            (name = "Auth", description = "Admin authentication"),
            (name = "Health", description = "System health checks")
        )
    )]
struct ApiDoc;

fn build_cors(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::DELETE,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);
    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin),
        Some(Err(_)) | None if cfg.is_production => {
            // Unreachable with a validated config; deny cross-origin requests.
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static(
                "http://invalid",
            )))
        }
        // Development convenience
        _ => base.allow_origin(AllowOrigin::mirror_request()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "job_intake=debug,axum=info,tower_http=info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    info!(port = cfg.port, uploads_dir = %cfg.uploads_dir, production = cfg.is_production, "Starting job intake service");

    // Database
    let pool = job_intake::infrastructure::db::connect_pool(&cfg.database_url).await?;
    job_intake::infrastructure::db::migrate(&pool).await?;
    info!("Database connected");

    let admin_repo = Arc::new(SqlxAdminRepository::new(pool.clone()));
    let application_repo = Arc::new(SqlxApplicationRepository::new(pool.clone()));
    let blob_store = Arc::new(FsBlobStore::new(&cfg.uploads_dir));

    // Ensure uploads/jobs and uploads/files exist
    if let Err(e) = blob_store.ensure_layout().await {
        warn!(error = ?e, dir = %cfg.uploads_dir, "Failed to create uploads dirs");
    }

    if let Some(seed) = cfg.admin_seed.clone() {
        let uc = SeedAdmin {
            repo: admin_repo.as_ref(),
        };
        match uc.execute(&seed.username, &seed.password).await {
            Ok(true) => info!(username = %seed.username, "Seeded admin account"),
            Ok(false) => info!(username = %seed.username, "Admin account already present"),
            Err(e) => warn!(error = ?e, username = %seed.username, "Failed to seed admin account"),
        }
    }

    let public_files_dir = blob_store.category_dir(BlobCategory::Files);
    let services = AppServices::new(admin_repo, application_repo, blob_store);
    let ctx = AppContext::new(cfg.clone(), services);

    // Static assets: admin SPA, public file passthrough and the public site.
    let static_router = Router::new()
        .nest_service("/admin", ServeDir::new(&cfg.admin_dir))
        .nest_service("/uploads/files", ServeDir::new(public_files_dir))
        .fallback_service(ServeDir::new(&cfg.public_dir));

    let app = Router::new()
        .merge(job_intake::presentation::http::api_router(ctx))
        .merge(job_intake::presentation::http::health::routes(pool.clone()))
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_router)
        .layer(build_cors(&cfg))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        );

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.port));
    info!(%addr, "Server running");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
