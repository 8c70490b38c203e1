use crate::application::ports::blob_store::{BlobCategory, BlobStore, BlobStoreError};

pub struct ListFiles<'a, B: BlobStore + ?Sized> {
    pub blobs: &'a B,
}

impl<'a, B: BlobStore + ?Sized> ListFiles<'a, B> {
    pub async fn execute(&self) -> Result<Vec<String>, BlobStoreError> {
        self.blobs.list(BlobCategory::Files).await
    }
}
