// src/services/mod.rs

//! Sentiment analysis service layer.
//!
//! - `comprehend`: Amazon Comprehend backed implementation
//! - `dry_run`: Local implementation that never leaves the process
//! - `naming`: Job name generation

pub mod comprehend;
pub mod dry_run;
pub mod naming;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{JobRequest, JobSubmission};

pub use comprehend::ComprehendService;
pub use dry_run::DryRunService;

/// Starts asynchronous sentiment detection jobs.
#[async_trait]
pub trait SentimentService: Send + Sync {
    /// Submit the job and return the service's acknowledgement.
    ///
    /// The job is not awaited; the acknowledgement only says it was accepted.
    async fn start_sentiment_job(&self, request: &JobRequest) -> Result<JobSubmission>;
}
