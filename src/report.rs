//! Bucket report.
//!
//! Lists the buckets visible to the session and records them in a new
//! `s3_buckets_<YYYY-MM-DDTHH-MM-SSZ>.log` file. The content is a deterministic function
//! of the listing: the names newline-joined in service order, or `(no buckets found)`.

use crate::consts::{NO_BUCKETS_PLACEHOLDER, REPORT_FILE_EXT, REPORT_FILE_PREFIX, REPORT_TIMESTAMP_FORMAT};
use crate::prelude::*;
use crate::s3w::ObjectStore;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a successful report run produced.
#[derive(Debug)]
pub struct ReportSummary {
	pub count: usize,
	pub path: PathBuf,
}

/// List the buckets and write them to a new log file in `log_dir`.
///
/// Nothing touches the filesystem before the listing succeeds, so a credential or service
/// failure leaves `log_dir` as it was.
pub async fn run_report(store: &impl ObjectStore, log_dir: &Path, now: DateTime<Utc>) -> Result<ReportSummary> {
	let names = store.list_buckets().await?;
	debug!("{} buckets listed", names.len());

	let content = format_report(&names);
	let path = write_report(log_dir, &report_file_name(now), &content)?;

	Ok(ReportSummary {
		count: names.len(),
		path,
	})
}

pub fn format_report(names: &[String]) -> String {
	if names.is_empty() {
		NO_BUCKETS_PLACEHOLDER.to_string()
	} else {
		names.join("\n")
	}
}

/// UTC, second resolution, filesystem safe (no ':').
pub fn report_timestamp(now: DateTime<Utc>) -> String {
	now.format(REPORT_TIMESTAMP_FORMAT).to_string()
}

pub fn report_file_name(now: DateTime<Utc>) -> String {
	f!("{REPORT_FILE_PREFIX}{}.{REPORT_FILE_EXT}", report_timestamp(now))
}

/// Create the dir if needed, and write the content to a new file.
/// Never overwrites: an existing file of the same name is a `LogFileExists` error.
pub fn write_report(log_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
	fs::create_dir_all(log_dir)?;

	let path = log_dir.join(file_name);
	let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
		Ok(file) => file,
		Err(ex) if ex.kind() == io::ErrorKind::AlreadyExists => {
			return Err(Error::LogFileExists(path.display().to_string()));
		}
		Err(ex) => return Err(ex.into()),
	};
	file.write_all(content.as_bytes())?;
	debug!("report written to {}", path.display());

	Ok(path)
}

// endregion: --- Tests
