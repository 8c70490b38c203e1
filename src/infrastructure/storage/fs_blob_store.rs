use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ports::blob_store::{
    BlobCategory, BlobHandle, BlobStore, BlobStoreError, IncomingFile, StoredBlob,
};
use crate::infrastructure::storage::{blob_filename, validate_blob_name};

/// Blob store rooted at the uploads directory, one subdirectory per category.
pub struct FsBlobStore {
    pub uploads_root: PathBuf,
}

impl FsBlobStore {
    pub fn new(uploads_root: impl Into<PathBuf>) -> Self {
        Self {
            uploads_root: uploads_root.into(),
        }
    }

    pub fn category_dir(&self, category: BlobCategory) -> PathBuf {
        self.uploads_root.join(category.dir_name())
    }

    pub async fn ensure_layout(&self) -> std::io::Result<()> {
        for category in BlobCategory::ALL {
            fs::create_dir_all(self.category_dir(category)).await?;
        }
        Ok(())
    }

    fn entry_path(&self, category: BlobCategory, name: &str) -> Result<PathBuf, BlobStoreError> {
        validate_blob_name(name)?;
        Ok(self.category_dir(category).join(name))
    }
}

fn not_found_or_io(err: std::io::Error, name: &str) -> BlobStoreError {
    if err.kind() == ErrorKind::NotFound {
        BlobStoreError::NotFound(name.to_string())
    } else {
        BlobStoreError::Io(err)
    }
}

async fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    // create_new: a timestamp collision fails instead of clobbering an existing blob
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    Ok(())
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn store(
        &self,
        category: BlobCategory,
        file: &IncomingFile,
    ) -> Result<StoredBlob, BlobStoreError> {
        let dir = self.category_dir(category);
        fs::create_dir_all(&dir).await?;

        let filename = blob_filename(chrono::Utc::now().timestamp_millis(), &file.original_filename);
        let path = dir.join(&filename);
        if let Err(err) = write_new(&path, &file.bytes).await {
            tracing::error!(error = ?err, path = %path.display(), "blob_write_failed");
            // Drop a partially written file; ignore if it was never created.
            if err.kind() != ErrorKind::AlreadyExists {
                let _ = fs::remove_file(&path).await;
            }
            return Err(err.into());
        }
        Ok(StoredBlob {
            filename,
            size: file.bytes.len() as u64,
        })
    }

    async fn list(&self, category: BlobCategory) -> Result<Vec<String>, BlobStoreError> {
        let mut entries = fs::read_dir(self.category_dir(category)).await?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
        Ok(names)
    }

    async fn open(
        &self,
        category: BlobCategory,
        name: &str,
    ) -> Result<BlobHandle, BlobStoreError> {
        let path = self.entry_path(category, name)?;
        let file = fs::File::open(&path)
            .await
            .map_err(|e| not_found_or_io(e, name))?;
        let meta = file.metadata().await?;
        if !meta.is_file() {
            return Err(BlobStoreError::NotFound(name.to_string()));
        }
        Ok(BlobHandle {
            size: meta.len(),
            reader: Box::pin(file),
        })
    }

    async fn delete(&self, category: BlobCategory, name: &str) -> Result<(), BlobStoreError> {
        let path = self.entry_path(category, name)?;
        fs::remove_file(&path)
            .await
            .map_err(|e| not_found_or_io(e, name))
    }
}
