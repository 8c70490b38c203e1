use crate::application::ports::blob_store::{
    BlobCategory, BlobStore, BlobStoreError, IncomingFile, StoredBlob,
};

pub struct UploadFile<'a, B: BlobStore + ?Sized> {
    pub blobs: &'a B,
}

impl<'a, B: BlobStore + ?Sized> UploadFile<'a, B> {
    pub async fn execute(&self, file: &IncomingFile) -> Result<StoredBlob, BlobStoreError> {
        let stored = self.blobs.store(BlobCategory::Files, file).await?;
        tracing::info!(filename = %stored.filename, size = stored.size, "public_file_uploaded");
        Ok(stored)
    }
}
