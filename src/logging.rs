//! Logging initialization.
//!
//! Logs go to stderr so stdout only carries the tool output.

use crate::consts::ENV_LOG_FILTER;
use crate::Result;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const VERBOSE_FILTER: &str = "bucket_report=debug,warn";
const DEFAULT_FILTER: &str = "warn";

/// `verbose` wins over the `BUCKET_REPORT_LOG` filter, which wins over the default (warn).
pub fn init_logging(verbose: bool) -> Result<()> {
	let filter = if verbose {
		EnvFilter::new(VERBOSE_FILTER)
	} else {
		EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.finish()
		.try_init()?;

	Ok(())
}
