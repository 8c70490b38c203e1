pub mod login;
pub mod seed_admin;
