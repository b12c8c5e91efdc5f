//! AWS API Wrapper

// region:    --- Modules

// -- Sub-modules
mod bucket_ops;
mod get;
mod sstore;

pub mod cred;

// -- Re-exports
pub use self::cred::new_s3_client;
pub use self::sstore::SStore;

// -- Imports
use crate::Result;

// endregion: --- Modules

// region:    --- ObjectStore

/// Result of an object fetch. A missing key is an expected outcome, not an error.
#[derive(Debug, PartialEq, Eq)]
pub enum ObjectFetch {
	Found(Vec<u8>),
	NotFound,
}

/// The two storage operations the report and peek flows depend on.
pub trait ObjectStore {
	/// Bucket names, in the order returned by the service.
	async fn list_buckets(&self) -> Result<Vec<String>>;

	async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectFetch>;
}

// endregion: --- ObjectStore
