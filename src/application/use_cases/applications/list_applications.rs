use crate::application::ports::application_repository::ApplicationRepository;
use crate::domain::applications::job_application::JobApplication;

pub struct ListApplications<'a, R: ApplicationRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ApplicationRepository + ?Sized> ListApplications<'a, R> {
    pub async fn execute(&self) -> anyhow::Result<Vec<JobApplication>> {
        self.repo.list_all().await
    }
}
