use cmd::cmd_run;
use std::process::ExitCode;

mod cmd;
mod config;
mod consts;
mod error;
mod logging;
mod peek;
mod prelude;
mod report;
mod s3w;


pub use error::Error;
pub use prelude::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	match cmd_run().await {
		Ok(_) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error:\n  {}", e);
			ExitCode::from(e.exit_code())
		}
	}
}
