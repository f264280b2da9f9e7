//! Storage abstractions for submission results.
//!
//! Results are small JSON documents written under a key of the output
//! bucket. Writes are plain overwrites.
//!
//! ## Layout
//!
//! ```text
//! {output bucket}/
//! └── output/
//!     ├── comprehend_response.json   # minute naming: latest submission
//!     ├── {job name}.json            # unique naming: one per submission
//!     └── failures/
//!         └── {job name}.json        # only with persisted failures
//! ```

pub mod local;
pub mod s3;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStore;
pub use s3::S3Store;

/// Metadata about a completed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Where the document landed, e.g. `s3://bucket/key`
    pub location: String,
    /// Number of bytes written
    pub size: usize,
}

/// Destination for result documents.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Write a JSON document at `key`, replacing whatever is there.
    async fn put_json(&self, key: &str, body: Vec<u8>) -> Result<StoredObject>;
}
