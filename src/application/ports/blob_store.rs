use std::pin::Pin;

use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Storage area an uploaded binary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobCategory {
    /// Applicant resumes, `jobs/`.
    Resumes,
    /// Admin-managed public file library, `files/`.
    Files,
}

impl BlobCategory {
    pub const ALL: [BlobCategory; 2] = [BlobCategory::Resumes, BlobCategory::Files];

    pub fn dir_name(self) -> &'static str {
        match self {
            BlobCategory::Resumes => "jobs",
            BlobCategory::Files => "files",
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum BlobStoreError {
    #[error("invalid blob name: {0}")]
    InvalidName(String),
    #[error("blob not found: {0}")]
    NotFound(String),
    #[error("blob storage io failure")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct StoredBlob {
    pub filename: String,
    pub size: u64,
}

pub struct BlobHandle {
    pub size: u64,
    pub reader: Pin<Box<dyn AsyncRead + Send>>,
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(
        &self,
        category: BlobCategory,
        file: &IncomingFile,
    ) -> Result<StoredBlob, BlobStoreError>;
    /// Entry names in the order the backend reports them.
    async fn list(&self, category: BlobCategory) -> Result<Vec<String>, BlobStoreError>;
    async fn open(&self, category: BlobCategory, name: &str)
    -> Result<BlobHandle, BlobStoreError>;
    async fn delete(&self, category: BlobCategory, name: &str) -> Result<(), BlobStoreError>;
}
