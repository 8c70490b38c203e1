use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::ports::admin_repository::{AdminRepository, AdminRow};

#[derive(thiserror::Error, Debug)]
pub enum LoginError {
    #[error("unknown username")]
    UnknownUser,
    #[error("wrong password")]
    WrongPassword,
    #[error("login failed")]
    Internal(#[source] anyhow::Error),
}

pub struct Login<'a, R: AdminRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: AdminRepository + ?Sized> Login<'a, R> {
    pub async fn execute(&self, req: &LoginRequest) -> Result<AdminRow, LoginError> {
        let row = self
            .repo
            .find_by_username(&req.username)
            .await
            .map_err(LoginError::Internal)?
            .ok_or(LoginError::UnknownUser)?;
        let parsed = PasswordHash::new(&row.password_hash)
            .map_err(|e| LoginError::Internal(anyhow::anyhow!(e.to_string())))?;
        Argon2::default()
            .verify_password(req.password.as_bytes(), &parsed)
            .map_err(|_| LoginError::WrongPassword)?;
        Ok(AdminRow {
            password_hash: String::new(),
            ..row
        })
    }
}
