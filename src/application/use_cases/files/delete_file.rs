use crate::application::ports::blob_store::{BlobCategory, BlobStore, BlobStoreError};

pub struct DeleteFile<'a, B: BlobStore + ?Sized> {
    pub blobs: &'a B,
}

impl<'a, B: BlobStore + ?Sized> DeleteFile<'a, B> {
    /// Not idempotent: deleting a missing file is an error.
    pub async fn execute(&self, filename: &str) -> Result<(), BlobStoreError> {
        self.blobs.delete(BlobCategory::Files, filename).await
    }
}
