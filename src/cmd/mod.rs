use crate::cmd::app::{
	cmd_app, ARG_BUCKET, ARG_ENDPOINT, ARG_KEY, ARG_LOG_DIR, ARG_PEEK, ARG_PROFILE, ARG_REGION, ARG_VERBOSE,
};
use crate::config::{Config, ConfigArgs};
use crate::logging::init_logging;
use crate::peek::run_peek;
use crate::report::run_report;
use crate::s3w::{new_s3_client, SStore};
use crate::Result;
use chrono::Utc;
use clap::ArgMatches;
use tracing::debug;

mod app;

pub async fn cmd_run() -> Result<()> {
	let argm = match cmd_app().try_get_matches() {
		Ok(argm) => argm,
		// --help / --version
		Err(err) if !err.use_stderr() => {
			err.print()?;
			return Ok(());
		}
		Err(err) => return Err(err.into()),
	};

	init_logging(argm.get_flag(ARG_VERBOSE.0))?;

	let config = Config::from_process_env(config_args(&argm));
	debug!("{config:?}");

	let client = new_s3_client(&config).await?;
	let store = SStore::from_client(client);

	if argm.get_flag(ARG_PEEK) {
		exec_peek(&store, &config).await
	} else {
		exec_report(&store, &config).await
	}
}

async fn exec_report(store: &SStore, config: &Config) -> Result<()> {
	let summary = run_report(store, &config.log_dir, Utc::now()).await?;
	println!("Wrote {} buckets to {}", summary.count, summary.path.display());
	Ok(())
}

async fn exec_peek(store: &SStore, config: &Config) -> Result<()> {
	let mut out = std::io::stdout().lock();
	run_peek(store, &config.bucket, &config.key, &mut out).await
}

// region:    Args Utils
fn config_args(argm: &ArgMatches) -> ConfigArgs {
	let get = |name: &str| argm.get_one::<String>(name).cloned();

	ConfigArgs {
		profile: get(ARG_PROFILE),
		log_dir: get(ARG_LOG_DIR),
		bucket: get(ARG_BUCKET),
		key: get(ARG_KEY),
		region: get(ARG_REGION),
		endpoint: get(ARG_ENDPOINT),
	}
}
// endregion: Args Utils
