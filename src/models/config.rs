//! Handler configuration structures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Longest job name Comprehend accepts.
pub const MAX_JOB_NAME_LEN: usize = 256;

/// Root handler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Bucket receiving the submission responses and the job output
    #[serde(default)]
    pub output_bucket: String,

    /// IAM role Comprehend assumes to read the input and write the output
    #[serde(default)]
    pub data_access_role_arn: String,

    /// Language of the uploaded documents
    #[serde(default = "defaults::language_code")]
    pub language_code: String,

    /// Prefix of every generated job name
    #[serde(default = "defaults::job_name_prefix")]
    pub job_name_prefix: String,

    /// Key prefix inside the output bucket, used for the job output URI
    #[serde(default = "defaults::output_prefix")]
    pub output_prefix: String,

    /// Fixed key of the submission response under minute naming
    #[serde(default = "defaults::result_key")]
    pub result_key: String,

    /// How many records of a batch are processed
    #[serde(default)]
    pub batch_mode: BatchMode,

    /// How job names and result keys are derived
    #[serde(default)]
    pub job_naming: JobNaming,

    /// Write failed results to the output bucket as well
    #[serde(default)]
    pub persist_failures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_bucket: String::new(),
            data_access_role_arn: String::new(),
            language_code: defaults::language_code(),
            job_name_prefix: defaults::job_name_prefix(),
            output_prefix: defaults::output_prefix(),
            result_key: defaults::result_key(),
            batch_mode: BatchMode::default(),
            job_naming: JobNaming::default(),
            persist_failures: false,
        }
    }
}

impl Config {
    /// Create a configuration with the two required settings and defaults
    /// for everything else.
    pub fn new(output_bucket: impl Into<String>, data_access_role_arn: impl Into<String>) -> Self {
        Self {
            output_bucket: output_bucket.into(),
            data_access_role_arn: data_access_role_arn.into(),
            ..Self::default()
        }
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.output_bucket.trim().is_empty() {
            return Err(AppError::config("output_bucket (OUTPUT_BUCKET) is required"));
        }
        if self.data_access_role_arn.trim().is_empty() {
            return Err(AppError::config(
                "data_access_role_arn (DATA_ARN) is required",
            ));
        }
        if self.language_code.trim().is_empty() {
            return Err(AppError::config("language_code must not be empty"));
        }
        if self.job_name_prefix.is_empty() {
            return Err(AppError::config("job_name_prefix must not be empty"));
        }
        if let Some(c) = self
            .job_name_prefix
            .chars()
            .find(|c| !is_job_name_char(*c))
        {
            return Err(AppError::config(format!(
                "job_name_prefix contains unsupported character {c:?}"
            )));
        }
        // Room for the longest suffix `_YYYY-MM-DD-HH-MM-SS-xxxxxxxx`.
        if self.job_name_prefix.len() + 29 > MAX_JOB_NAME_LEN {
            return Err(AppError::config("job_name_prefix is too long"));
        }
        if !self.output_prefix.is_empty() && !self.output_prefix.ends_with('/') {
            return Err(AppError::config("output_prefix must end with '/'"));
        }
        if self.result_key.trim().is_empty() {
            return Err(AppError::config("result_key must not be empty"));
        }
        Ok(())
    }

    /// S3 URI Comprehend writes the job output to.
    pub fn output_uri(&self) -> String {
        format!("s3://{}/{}", self.output_bucket, self.output_prefix)
    }

    /// Key the submission response for `job_name` is written to.
    pub fn result_key_for(&self, job_name: &str) -> String {
        match self.job_naming {
            JobNaming::Minute => self.result_key.clone(),
            JobNaming::Unique => format!("{}{}.json", self.output_prefix, job_name),
        }
    }

    /// Key a failed result for `job_name` is written to.
    pub fn failure_key_for(&self, job_name: &str) -> String {
        format!("{}failures/{}.json", self.output_prefix, job_name)
    }
}

/// Characters Comprehend allows in a job name.
fn is_job_name_char(c: char) -> bool {
    c.is_alphanumeric() || c.is_whitespace() || "_.:/=+-%@".contains(c)
}

/// Which records of a notification batch are processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchMode {
    /// Return after the first record; the rest of the batch is skipped
    #[default]
    First,
    /// Process every record in order
    All,
}

impl FromStr for BatchMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "all" => Ok(Self::All),
            other => Err(AppError::config(format!(
                "invalid batch mode '{other}' (expected 'first' or 'all')"
            ))),
        }
    }
}

impl fmt::Display for BatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First => f.write_str("first"),
            Self::All => f.write_str("all"),
        }
    }
}

/// How job names and result keys are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobNaming {
    /// `prefix_YYYY-MM-DD-HH-MM` and the fixed result key
    #[default]
    Minute,
    /// Second resolution plus a digest suffix, with a per-job result key
    Unique,
}

impl FromStr for JobNaming {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "minute" => Ok(Self::Minute),
            "unique" => Ok(Self::Unique),
            other => Err(AppError::config(format!(
                "invalid job naming '{other}' (expected 'minute' or 'unique')"
            ))),
        }
    }
}

impl fmt::Display for JobNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minute => f.write_str("minute"),
            Self::Unique => f.write_str("unique"),
        }
    }
}

mod defaults {
    pub fn language_code() -> String {
        "fr".to_string()
    }

    pub fn job_name_prefix() -> String {
        "comprehend_job".to_string()
    }

    pub fn output_prefix() -> String {
        "output/".to_string()
    }

    pub fn result_key() -> String {
        "output/comprehend_response.json".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("out-bucket", "arn:aws:iam::123456789012:role/data");
        assert_eq!(config.language_code, "fr");
        assert_eq!(config.job_name_prefix, "comprehend_job");
        assert_eq!(config.result_key, "output/comprehend_response.json");
        assert_eq!(config.batch_mode, BatchMode::First);
        assert_eq!(config.job_naming, JobNaming::Minute);
        assert!(!config.persist_failures);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_bucket_and_role() {
        let config = Config::new("", "arn");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = Config::new("bucket", "  ");
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_bad_prefixes() {
        let mut config = Config::new("bucket", "arn");
        config.job_name_prefix = "job#1".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new("bucket", "arn");
        config.output_prefix = "output".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::new("bucket", "arn");
        config.job_name_prefix = "j".repeat(240);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_uri() {
        let config = Config::new("out-bucket", "arn");
        assert_eq!(config.output_uri(), "s3://out-bucket/output/");
    }

    #[test]
    fn test_result_key_depends_on_naming() {
        let mut config = Config::new("bucket", "arn");
        assert_eq!(
            config.result_key_for("comprehend_job_2024-05-01-10-30"),
            "output/comprehend_response.json"
        );

        config.job_naming = JobNaming::Unique;
        assert_eq!(
            config.result_key_for("comprehend_job_x"),
            "output/comprehend_job_x.json"
        );
        assert_eq!(
            config.failure_key_for("comprehend_job_x"),
            "output/failures/comprehend_job_x.json"
        );
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("ALL".parse::<BatchMode>().unwrap(), BatchMode::All);
        assert_eq!(" first ".parse::<BatchMode>().unwrap(), BatchMode::First);
        assert!("some".parse::<BatchMode>().is_err());
        assert_eq!("unique".parse::<JobNaming>().unwrap(), JobNaming::Unique);
        assert!("hourly".parse::<JobNaming>().is_err());
    }

    #[test]
    fn test_toml_uses_defaults_for_missing_fields() {
        let config: Config = toml::from_str(
            r#"
            output_bucket = "results"
            data_access_role_arn = "arn:aws:iam::1:role/r"
            batch_mode = "all"
            "#,
        )
        .unwrap();
        assert_eq!(config.batch_mode, BatchMode::All);
        assert_eq!(config.language_code, "fr");
        assert_eq!(config.job_naming, JobNaming::Minute);
    }
}
