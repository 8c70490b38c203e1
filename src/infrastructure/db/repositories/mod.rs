pub mod admin_repository_sqlx;
pub mod application_repository_sqlx;
