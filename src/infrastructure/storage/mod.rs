mod core;
mod fs_blob_store;
pub use core::*;
pub use fs_blob_store::FsBlobStore;
