use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_bucket-report");

/// Static credentials for the mock endpoint.
pub const ENV_CREDS: [(&str, &str); 3] = [
	("AWS_ACCESS_KEY_ID", "minio"),
	("AWS_SECRET_ACCESS_KEY", "miniominio"),
	("AWS_REGION", "us-east-1"),
];

pub struct ExecOutput {
	pub code: Option<i32>,
	pub stdout: String,
	pub stderr: String,
}

/// Run the binary in an isolated environment.
/// `home` stands for the user home, and no aws config files exist unless the test writes them.
pub fn exec_bucket_report(args: &[&str], envs: &[(&str, &str)], home: &Path, print_exec: bool) -> Result<ExecOutput> {
	if print_exec {
		println!("> executing: bucket-report {}", args.join(" "));
	}

	let mut proc = Command::new(BIN);
	proc.args(args);

	// isolate from the developer machine credentials
	proc.env_clear();
	proc.env("HOME", home);
	proc.env("AWS_CONFIG_FILE", aws_file(home, "config"));
	proc.env("AWS_SHARED_CREDENTIALS_FILE", aws_file(home, "credentials"));
	proc.env("AWS_EC2_METADATA_DISABLED", "true");

	for (name, val) in envs.iter() {
		proc.env(name, val);
	}

	let output = proc.stdout(Stdio::piped()).stderr(Stdio::piped()).output()?;

	let out = ExecOutput {
		code: output.status.code(),
		stdout: String::from_utf8(output.stdout)?,
		stderr: String::from_utf8(output.stderr)?,
	};

	if print_exec {
		println!("->> code: {:?}\n->> stdout:\n{}\n->> stderr:\n{}", out.code, out.stdout, out.stderr);
	}

	Ok(out)
}

fn aws_file(home: &Path, name: &str) -> PathBuf {
	home.join(".aws").join(name)
}
