use super::{bucket_ops, get, ObjectFetch, ObjectStore};
use crate::Result;
use aws_sdk_s3::Client;

/// S3 backed `ObjectStore`.
pub struct SStore {
	pub client: Client,
}

impl SStore {
	/// Constructor
	pub fn from_client(client: Client) -> SStore {
		SStore { client }
	}
}

impl ObjectStore for SStore {
	async fn list_buckets(&self) -> Result<Vec<String>> {
		bucket_ops::list_buckets(&self.client).await
	}

	async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectFetch> {
		get::get_object(&self.client, bucket, key).await
	}
}
