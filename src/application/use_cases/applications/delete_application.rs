use uuid::Uuid;

use crate::application::ports::application_repository::ApplicationRepository;

pub struct DeleteApplication<'a, R: ApplicationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ApplicationRepository + ?Sized> DeleteApplication<'a, R> {
    /// The resume blob is kept; only the record goes away.
    pub async fn execute(&self, id: Uuid) -> anyhow::Result<bool> {
        self.repo.delete_by_id(id).await
    }
}
