//! Session construction.
//!
//! Without a profile, credentials go through the standard AWS provider chain (env, shared config files,
//! web identity, container, instance metadata). A named profile is the only credential source: it must be
//! defined in the aws config files, environment credentials are never used in its place.
//! Credentials are resolved once, up front, so that a missing credential is reported as such rather than
//! as a failed request.

use crate::config::Config;
use crate::consts::DEFAULT_REGION;
use crate::{Error, Result};
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_s3::config::Builder;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use aws_types::region::Region;
use aws_types::SdkConfig;
use tracing::{debug, warn};

pub async fn new_s3_client(config: &Config) -> Result<Client> {
	let sdk_config = load_sdk_config(config).await;
	ensure_credentials(&sdk_config, config).await?;
	Ok(client_from_sdk_config(&sdk_config))
}

/// Load the shared aws config for this run.
/// Note: Retries are disabled, the first failure is terminal.
async fn load_sdk_config(config: &Config) -> SdkConfig {
	let mut loader = aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

	// -- A named profile is the only credential source (no fallback to the env credentials)
	if let Some(profile) = &config.profile {
		let provider = ProfileFileCredentialsProvider::builder().profile_name(profile).build();
		loader = loader.profile_name(profile).credentials_provider(provider);
	}

	// -- If config has a region, override the chain one (arg take precedence)
	if let Some(region) = &config.region {
		loader = loader.region(Region::new(region.clone()));
	}

	if let Some(endpoint) = &config.endpoint {
		loader = loader.endpoint_url(endpoint);
	}

	loader.load().await
}

/// Resolve the credentials once.
async fn ensure_credentials(sdk_config: &SdkConfig, config: &Config) -> Result<()> {
	let provider = sdk_config
		.credentials_provider()
		.ok_or_else(|| Error::CredentialsMissing("No credential provider configured".to_string()))?;

	match provider.provide_credentials().await {
		Ok(_) => {
			debug!("credentials resolved for {}", config.profile_label());
			Ok(())
		}
		Err(err) => Err(credentials_error(err, config)),
	}
}

/// - named profile that cannot provide credentials (not defined, no keys, ...) => `CredentialProvider`
/// - nothing found in the whole default chain => `CredentialsMissing`
/// - any other default chain failure => `CredentialProvider`
fn credentials_error(err: CredentialsError, config: &Config) -> Error {
	let cause = DisplayErrorContext(&err).to_string();
	match (&config.profile, &err) {
		(None, CredentialsError::CredentialsNotLoaded(_)) => Error::CredentialsMissing(cause),
		_ => Error::CredentialProvider {
			profile: config.profile_label(),
			cause,
		},
	}
}

fn client_from_sdk_config(sdk_config: &SdkConfig) -> Client {
	let mut builder = Builder::from(sdk_config);

	// list_buckets still needs a signing region, even when nothing was configured
	if sdk_config.region().is_none() {
		warn!("no region configured, using {DEFAULT_REGION}");
		builder = builder.region(Region::new(DEFAULT_REGION));
	}

	// custom endpoints (minio, localstack, ...) do not do virtual-host buckets
	if sdk_config.endpoint_url().is_some() {
		builder = builder.force_path_style(true);
	}

	Client::from_conf(builder.build())
}

// endregion: --- Tests
