pub mod admin_repository;
pub mod application_repository;
pub mod blob_store;
