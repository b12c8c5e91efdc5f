use super::ObjectFetch;
use crate::Result;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::Client;

pub async fn get_object(client: &Client, bucket: &str, key: &str) -> Result<ObjectFetch> {
	let res = client.get_object().bucket(bucket).key(key).send().await;

	let output = match res {
		Ok(output) => output,
		Err(err) => {
			if let Some(GetObjectError::NoSuchKey(_)) = err.as_service_error() {
				return Ok(ObjectFetch::NotFound);
			}
			return Err(err.into());
		}
	};

	let data = output.body.collect().await?.into_bytes();

	Ok(ObjectFetch::Found(data.to_vec()))
}
