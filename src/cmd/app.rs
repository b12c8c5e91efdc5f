use clap::{crate_version, Arg, ArgAction, Command};

pub const ARG_PROFILE: &str = "profile";
pub const ARG_PEEK: &str = "peek";
pub const ARG_LOG_DIR: &str = "log-dir";
pub const ARG_BUCKET: &str = "bucket";
pub const ARG_KEY: &str = "key";
pub const ARG_REGION: &str = "region";
pub const ARG_ENDPOINT: &str = "endpoint";
pub const ARG_VERBOSE: (&str, char) = ("verbose", 'v');

pub fn cmd_app() -> Command {
	Command::new("bucket-report")
		.version(crate_version!())
		.about("List the S3 buckets visible to the credentials into a timestamped log file (exit 2: no credentials, 3: service error)")
		.arg(arg_profile())
		.arg(
			Arg::new(ARG_PEEK)
				.action(ArgAction::SetTrue)
				.long(ARG_PEEK)
				.help("Print the buckets, then the content of the LAB_BUCKET/LAB_KEY object (no log file)"),
		)
		.args(args_report())
		.args(args_peek())
		.args(args_region_endpoint())
		.arg(arg_verbose())
}

// region:    --- Common Args
fn arg_profile() -> Arg {
	Arg::new(ARG_PROFILE)
		.required(false)
		.num_args(1)
		.help("The profile to use. Default AWS credential resolution when absent.")
}

fn args_region_endpoint() -> [Arg; 2] {
	[
		Arg::new(ARG_REGION)
			.required(false)
			.num_args(1)
			.long(ARG_REGION)
			.help("The region to use for this command (override profile/env region)."),
		Arg::new(ARG_ENDPOINT)
			.required(false)
			.num_args(1)
			.long(ARG_ENDPOINT)
			.help("Custom S3 compatible endpoint, e.g., 'http://127.0.0.1:9000' (default env AWS_ENDPOINT)."),
	]
}

fn arg_verbose() -> Arg {
	Arg::new(ARG_VERBOSE.0)
		.num_args(0)
		.action(ArgAction::SetTrue)
		.short(ARG_VERBOSE.1)
		.long(ARG_VERBOSE.0)
		.help("Debug logs on stderr")
}
// endregion: --- Common Args

// region:    --- Report Args
fn args_report() -> [Arg; 1] {
	[Arg::new(ARG_LOG_DIR)
		.num_args(1)
		.long(ARG_LOG_DIR)
		.help("Directory for the report log files (default env BOTO3_LAB_LOG_DIR, then ~/boto3_lab_logs).")]
}
// endregion: --- Report Args

// region:    --- Peek Args
fn args_peek() -> [Arg; 2] {
	[
		Arg::new(ARG_BUCKET)
			.num_args(1)
			.long(ARG_BUCKET)
			.help("Bucket of the object to peek (default env LAB_BUCKET, then 'YOUR-LAB-BUCKET')."),
		Arg::new(ARG_KEY)
			.num_args(1)
			.long(ARG_KEY)
			.help("Key of the object to peek (default env LAB_KEY, then 'hello.txt')."),
	]
}
// endregion: --- Peek Args

// endregion: --- Tests
