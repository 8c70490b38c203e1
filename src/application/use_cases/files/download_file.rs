use crate::application::ports::blob_store::{BlobCategory, BlobHandle, BlobStore, BlobStoreError};

pub struct DownloadFile<'a, B: BlobStore + ?Sized> {
    pub blobs: &'a B,
}

pub struct FileDownload {
    pub filename: String,
    pub content_type: String,
    pub handle: BlobHandle,
}

impl<'a, B: BlobStore + ?Sized> DownloadFile<'a, B> {
    pub async fn execute(
        &self,
        category: BlobCategory,
        filename: &str,
    ) -> Result<FileDownload, BlobStoreError> {
        let handle = self.blobs.open(category, filename).await?;
        let content_type = mime_guess::from_path(filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(FileDownload {
            filename: filename.to_string(),
            content_type,
            handle,
        })
    }
}
