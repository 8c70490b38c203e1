pub mod delete_application;
pub mod list_applications;
pub mod submit_application;
