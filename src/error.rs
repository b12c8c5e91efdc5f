use crate::consts::{EXIT_CREDENTIALS_MISSING, EXIT_FAILURE, EXIT_SERVICE_ERROR};
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::operation::list_buckets::ListBucketsError;
use aws_sdk_s3::primitives::ByteStreamError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("No AWS credentials found. Run `aws configure`, or provide a valid profile name. Cause: {0}")]
	CredentialsMissing(String),

	#[error("AWS credential provider failed for {profile}. Cause: {cause}")]
	CredentialProvider { profile: String, cause: String },

	#[error("AWS Service Error. Code: {0}, Message: {1}")]
	AwsServiceError(String, String), // code, message

	#[error("AWS request failed. Cause: {0}")]
	AwsRequest(String),

	#[error("Log file '{0}' already exists. Not overwriting (another report was written during the same second).")]
	LogFileExists(String),

	#[error(transparent)]
	Cmd(#[from] clap::Error),

	#[error(transparent)]
	LogInit(#[from] tracing_subscriber::util::TryInitError),

	#[error(transparent)]
	ByteStream(#[from] ByteStreamError),

	#[error("Object content is not valid UTF-8. Cause: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),

	#[error(transparent)]
	IO(#[from] std::io::Error),
}

impl Error {
	/// Process exit status, so that calling scripts can branch on the outcome.
	pub fn exit_code(&self) -> u8 {
		match self {
			Error::CredentialsMissing(_) => EXIT_CREDENTIALS_MISSING,
			Error::CredentialProvider { .. } | Error::AwsServiceError(..) | Error::AwsRequest(_) => EXIT_SERVICE_ERROR,
			_ => EXIT_FAILURE,
		}
	}
}

// region:    --- Aws Sdk Errors

/// For better CLI error reporting.
/// Service responses become code/message, everything else (dispatch, timeout, ...) keeps the full error chain.
impl From<SdkError<ListBucketsError, HttpResponse>> for Error {
	fn from(val: SdkError<ListBucketsError, HttpResponse>) -> Self {
		match val {
			SdkError::ServiceError(se) => {
				let se = se.into_err();
				service_error(se.code(), se.message())
			}
			other => Error::AwsRequest(DisplayErrorContext(&other).to_string()),
		}
	}
}

impl From<SdkError<GetObjectError, HttpResponse>> for Error {
	fn from(val: SdkError<GetObjectError, HttpResponse>) -> Self {
		match val {
			SdkError::ServiceError(se) => {
				let se = se.into_err();
				service_error(se.code(), se.message())
			}
			other => Error::AwsRequest(DisplayErrorContext(&other).to_string()),
		}
	}
}

fn service_error(code: Option<&str>, message: Option<&str>) -> Error {
	Error::AwsServiceError(
		code.unwrap_or("Unknown").to_string(),
		message.unwrap_or_default().to_string(),
	)
}

// endregion: --- Aws Sdk Errors

// endregion: --- Tests
