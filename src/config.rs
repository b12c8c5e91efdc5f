//! Run configuration.
//!
//! Every option resolves by order of precedence:
//! - command line argument
//! - environment variable
//! - built-in default

use crate::consts::{
	DEFAULT_LAB_BUCKET, DEFAULT_LAB_KEY, DEFAULT_LOG_DIR_NAME, ENV_ENDPOINT, ENV_LAB_BUCKET, ENV_LAB_KEY, ENV_LOG_DIR,
};
use std::path::PathBuf;

/// Raw values given on the command line (all optional).
#[derive(Debug, Default)]
pub struct ConfigArgs {
	pub profile: Option<String>,
	pub log_dir: Option<String>,
	pub bucket: Option<String>,
	pub key: Option<String>,
	pub region: Option<String>,
	pub endpoint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	/// Named credential profile. `None` lets the SDK default chain decide (e.g., `AWS_PROFILE`).
	pub profile: Option<String>,
	/// Directory receiving the report log files.
	pub log_dir: PathBuf,
	/// Object peek target bucket.
	pub bucket: String,
	/// Object peek target key.
	pub key: String,
	/// Region override. `None` uses the SDK region chain.
	pub region: Option<String>,
	/// Custom S3 compatible endpoint (e.g., minio). Enables path-style addressing.
	pub endpoint: Option<String>,
}

impl Config {
	/// Resolve the config from the command line values and an environment lookup.
	///
	/// `env` is a lookup function (e.g., `|name| std::env::var(name).ok()`) so that tests do not touch the process env.
	pub fn resolve(args: ConfigArgs, env: impl Fn(&str) -> Option<String>) -> Config {
		// empty environment values are treated as unset
		let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

		let log_dir = args
			.log_dir
			.or_else(|| env(ENV_LOG_DIR))
			.map(PathBuf::from)
			.unwrap_or_else(|| default_log_dir(&env));

		Config {
			profile: args.profile,
			log_dir,
			bucket: args
				.bucket
				.or_else(|| env(ENV_LAB_BUCKET))
				.unwrap_or_else(|| DEFAULT_LAB_BUCKET.to_string()),
			key: args.key.or_else(|| env(ENV_LAB_KEY)).unwrap_or_else(|| DEFAULT_LAB_KEY.to_string()),
			region: args.region,
			endpoint: args.endpoint.or_else(|| env(ENV_ENDPOINT)),
		}
	}

	/// Resolve against the process environment.
	pub fn from_process_env(args: ConfigArgs) -> Config {
		Config::resolve(args, |name| std::env::var(name).ok())
	}

	/// Human readable profile label for messages.
	pub fn profile_label(&self) -> String {
		match &self.profile {
			Some(profile) => format!("profile '{profile}'"),
			None => "default credentials".to_string(),
		}
	}
}

/// `~/boto3_lab_logs` (relative `boto3_lab_logs` when no home can be found).
fn default_log_dir(env: &impl Fn(&str) -> Option<String>) -> PathBuf {
	match env("HOME").or_else(|| env("USERPROFILE")) {
		Some(home) => PathBuf::from(home).join(DEFAULT_LOG_DIR_NAME),
		None => PathBuf::from(DEFAULT_LOG_DIR_NAME),
	}
}

// endregion: --- Tests
