use crate::application::ports::application_repository::ApplicationRepository;
use crate::application::ports::blob_store::{
    BlobCategory, BlobStore, BlobStoreError, IncomingFile,
};
use crate::domain::applications::job_application::{JobApplication, NewApplication};

#[derive(thiserror::Error, Debug)]
pub enum SubmitApplicationError {
    #[error("resume file is missing")]
    MissingResume,
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("failed to store resume")]
    Storage(#[source] BlobStoreError),
    #[error("failed to persist application")]
    Persist(#[source] anyhow::Error),
}

#[derive(Debug, Default)]
pub struct SubmitApplicationRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub resume: Option<IncomingFile>,
}

pub struct SubmitApplication<'a, R, B>
where
    R: ApplicationRepository + ?Sized,
    B: BlobStore + ?Sized,
{
    pub repo: &'a R,
    pub blobs: &'a B,
}

impl<'a, R, B> SubmitApplication<'a, R, B>
where
    R: ApplicationRepository + ?Sized,
    B: BlobStore + ?Sized,
{
    pub async fn execute(
        &self,
        req: SubmitApplicationRequest,
    ) -> Result<JobApplication, SubmitApplicationError> {
        let resume = req.resume.ok_or(SubmitApplicationError::MissingResume)?;
        // Checked before writing so a rejected request leaves no blob behind.
        let mut new = NewApplication {
            name: req.name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            file: String::new(),
        };
        if let Some(field) = new.missing_field().filter(|f| *f != "file") {
            return Err(SubmitApplicationError::MissingField(field));
        }

        let stored = self
            .blobs
            .store(BlobCategory::Resumes, &resume)
            .await
            .map_err(SubmitApplicationError::Storage)?;
        new.file = stored.filename;

        self.repo.create(&new).await.map_err(|err| {
            tracing::error!(error = ?err, file = %new.file, "create_application_failed");
            SubmitApplicationError::Persist(err)
        })
    }
}
