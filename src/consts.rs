//! Global constants

// -- Environment names
pub const ENV_LOG_DIR: &str = "BOTO3_LAB_LOG_DIR";
pub const ENV_LAB_BUCKET: &str = "LAB_BUCKET";
pub const ENV_LAB_KEY: &str = "LAB_KEY";
pub const ENV_ENDPOINT: &str = "AWS_ENDPOINT";
pub const ENV_LOG_FILTER: &str = "BUCKET_REPORT_LOG";

// -- Defaults
pub const DEFAULT_LOG_DIR_NAME: &str = "boto3_lab_logs";
pub const DEFAULT_LAB_BUCKET: &str = "YOUR-LAB-BUCKET";
pub const DEFAULT_LAB_KEY: &str = "hello.txt";
pub const DEFAULT_REGION: &str = "us-east-1";

// -- Report file
pub const REPORT_FILE_PREFIX: &str = "s3_buckets_";
pub const REPORT_FILE_EXT: &str = "log";
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%SZ";
pub const NO_BUCKETS_PLACEHOLDER: &str = "(no buckets found)";

// -- Exit status
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_CREDENTIALS_MISSING: u8 = 2;
pub const EXIT_SERVICE_ERROR: u8 = 3;
