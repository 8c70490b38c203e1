use std::path::{Component, Path};

use crate::application::ports::blob_store::BlobStoreError;

/// Reduces a client-supplied filename to its last path component.
pub fn sanitize_original_name(name: &str) -> String {
    let normalized = name.replace('\\', "/");
    let last = normalized
        .rsplit('/')
        .map(str::trim)
        .find(|s| !s.is_empty() && *s != "." && *s != "..")
        .unwrap_or("");
    let cleaned: String = last.chars().filter(|c| !c.is_control()).collect();
    if cleaned.is_empty() {
        "file".into()
    } else {
        cleaned
    }
}

/// `<millis>-<original>`
pub fn blob_filename(millis: i64, original: &str) -> String {
    format!("{}-{}", millis, sanitize_original_name(original))
}

/// A stored name must be a single normal path component.
pub fn validate_blob_name(name: &str) -> Result<(), BlobStoreError> {
    if name.is_empty() || name.contains('/') || name.contains('\\') {
        return Err(BlobStoreError::InvalidName(name.to_string()));
    }
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(BlobStoreError::InvalidName(name.to_string())),
    }
}
