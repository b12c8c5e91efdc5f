//! Object peek.
//!
//! Prints the bucket listing (not logged to a file), then the text content of one object.

use crate::prelude::*;
use crate::s3w::{ObjectFetch, ObjectStore};
use std::io::Write;
use tracing::debug;

/// Outcome of a peek, the three cases must be handled by the caller.
#[derive(Debug)]
pub enum PeekOutcome {
	Content(String),
	NotFound,
	OtherError(Error),
}

/// Fetch the object and decode it as UTF-8.
///
/// Only a content that is not valid UTF-8 returns `Err`, any store failure is a `PeekOutcome::OtherError`.
pub async fn peek(store: &impl ObjectStore, bucket: &str, key: &str) -> Result<PeekOutcome> {
	let outcome = match store.get_object(bucket, key).await {
		Ok(ObjectFetch::Found(data)) => PeekOutcome::Content(String::from_utf8(data)?),
		Ok(ObjectFetch::NotFound) => PeekOutcome::NotFound,
		Err(err) => PeekOutcome::OtherError(err),
	};

	Ok(outcome)
}

/// The full peek flow, writing to `out` (stdout for the cli).
pub async fn run_peek(store: &impl ObjectStore, bucket: &str, key: &str, out: &mut impl Write) -> Result<()> {
	let names = store.list_buckets().await?;
	writeln!(out, "{}", format_bucket_list(&names))?;

	let url = s3_url(bucket, key);
	debug!("peeking {url}");

	match peek(store, bucket, key).await? {
		PeekOutcome::Content(text) => writeln!(out, "\nContents of {url}:\n{text}")?,
		PeekOutcome::NotFound => writeln!(out, "Object not found: {url}")?,
		PeekOutcome::OtherError(err) => return Err(err),
	}

	Ok(())
}

pub fn format_bucket_list(names: &[String]) -> String {
	let mut res = String::from("Buckets:");
	for name in names {
		res.push_str("\n - ");
		res.push_str(name);
	}
	res
}

pub fn s3_url(bucket: &str, key: &str) -> String {
	f!("s3://{bucket}/{key}")
}

// endregion: --- Tests
