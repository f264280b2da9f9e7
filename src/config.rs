// src/config.rs

//! Configuration loading utilities.
//!
//! The Lambda reads everything from environment variables. The CLI may
//! start from a TOML file; environment variables still override it.
//!
//! ## Environment Variables
//!
//! - `OUTPUT_BUCKET`: bucket receiving job output and submission responses (required)
//! - `DATA_ARN`: IAM role Comprehend assumes (required)
//! - `LANGUAGE_CODE`: document language (default: `fr`)
//! - `JOB_NAME_PREFIX`: job name prefix (default: `comprehend_job`)
//! - `OUTPUT_PREFIX`: key prefix of the job output (default: `output/`)
//! - `RESULT_KEY`: key of the submission response (default: `output/comprehend_response.json`)
//! - `BATCH_MODE`: `first` or `all` (default: `first`)
//! - `JOB_NAMING`: `minute` or `unique` (default: `minute`)
//! - `PERSIST_FAILURES`: `true` to write failed results too (default: `false`)

use std::path::Path;

use tracing::info;

use crate::error::{AppError, Result};
use crate::models::Config;

pub const OUTPUT_BUCKET: &str = "OUTPUT_BUCKET";
pub const DATA_ARN: &str = "DATA_ARN";
pub const LANGUAGE_CODE: &str = "LANGUAGE_CODE";
pub const JOB_NAME_PREFIX: &str = "JOB_NAME_PREFIX";
pub const OUTPUT_PREFIX: &str = "OUTPUT_PREFIX";
pub const RESULT_KEY: &str = "RESULT_KEY";
pub const BATCH_MODE: &str = "BATCH_MODE";
pub const JOB_NAMING: &str = "JOB_NAMING";
pub const PERSIST_FAILURES: &str = "PERSIST_FAILURES";

/// Load and validate configuration from the process environment.
pub fn from_env() -> Result<Config> {
    from_lookup(|name| std::env::var(name).ok())
}

/// Load and validate configuration from an arbitrary variable lookup.
pub fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = apply_overrides(Config::default(), lookup)?;
    config.validate()?;
    Ok(config)
}

/// Load a TOML configuration file without validating it.
pub fn load_file(path: &Path) -> Result<Config> {
    info!("Loading config file {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load the optional file, overlay the environment, then validate.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let base = match path {
        Some(path) => load_file(path)?,
        None => Config::default(),
    };
    let config = apply_overrides(base, |name| std::env::var(name).ok())?;
    config.validate()?;
    Ok(config)
}

/// Overlay set, non-empty variables on top of `config`.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    if let Some(bucket) = get(OUTPUT_BUCKET) {
        config.output_bucket = bucket;
    }
    if let Some(arn) = get(DATA_ARN) {
        config.data_access_role_arn = arn;
    }
    if let Some(language) = get(LANGUAGE_CODE) {
        config.language_code = language;
    }
    if let Some(prefix) = get(JOB_NAME_PREFIX) {
        config.job_name_prefix = prefix;
    }
    if let Some(prefix) = get(OUTPUT_PREFIX) {
        config.output_prefix = prefix;
    }
    if let Some(key) = get(RESULT_KEY) {
        config.result_key = key;
    }
    if let Some(mode) = get(BATCH_MODE) {
        config.batch_mode = mode.parse()?;
    }
    if let Some(naming) = get(JOB_NAMING) {
        config.job_naming = naming.parse()?;
    }
    if let Some(flag) = get(PERSIST_FAILURES) {
        config.persist_failures = parse_bool(PERSIST_FAILURES, &flag)?;
    }

    Ok(config)
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(AppError::config(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
