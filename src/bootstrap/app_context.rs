use std::sync::Arc;

use crate::application::ports::admin_repository::AdminRepository;
use crate::application::ports::application_repository::ApplicationRepository;
use crate::application::ports::blob_store::BlobStore;
use crate::bootstrap::config::Config;

/// Router state shared by every handler.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    admin_repo: Arc<dyn AdminRepository>,
    application_repo: Arc<dyn ApplicationRepository>,
    blob_store: Arc<dyn BlobStore>,
}

impl AppServices {
    pub fn new(
        admin_repo: Arc<dyn AdminRepository>,
        application_repo: Arc<dyn ApplicationRepository>,
        blob_store: Arc<dyn BlobStore>,
    ) -> Self {
        Self {
            admin_repo,
            application_repo,
            blob_store,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn admin_repo(&self) -> Arc<dyn AdminRepository> {
        self.services.admin_repo.clone()
    }

    pub fn application_repo(&self) -> Arc<dyn ApplicationRepository> {
        self.services.application_repo.clone()
    }

    pub fn blob_store(&self) -> Arc<dyn BlobStore> {
        self.services.blob_store.clone()
    }
}
