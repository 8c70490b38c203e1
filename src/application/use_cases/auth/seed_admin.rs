use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString},
};
use password_hash::rand_core::OsRng;

use crate::application::ports::admin_repository::AdminRepository;

pub fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Creates the administrator if the username is still free. Existing
/// administrators are left untouched.
pub struct SeedAdmin<'a, R: AdminRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: AdminRepository + ?Sized> SeedAdmin<'a, R> {
    pub async fn execute(&self, username: &str, password: &str) -> anyhow::Result<bool> {
        if self.repo.find_by_username(username).await?.is_some() {
            return Ok(false);
        }
        let hash = hash_password(password)?;
        self.repo.create_admin(username, &hash).await?;
        Ok(true)
    }
}
