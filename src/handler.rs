// src/handler.rs

//! Upload event handler.
//!
//! For each uploaded object the handler:
//! 1. Decodes the object key from the notification
//! 2. Builds a job name from the configured prefix and the clock
//! 3. Starts an asynchronous Comprehend sentiment job on the object
//! 4. Writes the submission response to the output bucket
//!
//! Submission and write failures become `Failed` results. Only a malformed
//! event fails the invocation.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use tracing::{error, info, instrument, warn};

use crate::error::{AppError, Result};
use crate::models::{
    BatchMode, Config, FailureRecord, JobRequest, SentimentResult, UploadNotification,
};
use crate::services::{ComprehendService, SentimentService, naming};
use crate::storage::{ResultStore, S3Store, StoredObject};
use crate::utils::json::to_sorted_pretty;
use crate::utils::{Clock, SystemClock};

/// Everything an invocation needs, built once per process.
#[derive(Clone)]
pub struct HandlerContext {
    config: Config,
    service: Arc<dyn SentimentService>,
    store: Arc<dyn ResultStore>,
    clock: Arc<dyn Clock>,
}

impl HandlerContext {
    pub fn new(
        config: Config,
        service: Arc<dyn SentimentService>,
        store: Arc<dyn ResultStore>,
    ) -> Self {
        Self {
            config,
            service,
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Wire the Comprehend and S3 clients from a loaded AWS SDK configuration.
    pub fn from_sdk_config(config: Config, sdk_config: &aws_config::SdkConfig) -> Self {
        let service = Arc::new(ComprehendService::from_sdk_config(sdk_config));
        let store = Arc::new(S3Store::from_sdk_config(
            sdk_config,
            config.output_bucket.clone(),
        ));
        Self::new(config, service, store)
    }

    /// Replace the clock used for job names.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Process a notification batch.
///
/// Returns the result of the last processed notification, or `None` for an
/// empty batch. With `BatchMode::First` only the first notification is
/// processed.
#[instrument(skip_all, fields(records = event.records.len()))]
pub async fn handle_event(
    ctx: &HandlerContext,
    event: &S3Event,
) -> Result<Option<SentimentResult>> {
    let mut last = None;

    for (index, record) in event.records.iter().enumerate() {
        let notification = UploadNotification::from_record(index, record)?;
        last = Some(process_notification(ctx, &notification).await);

        if ctx.config.batch_mode == BatchMode::First {
            let skipped = event.records.len() - index - 1;
            if skipped > 0 {
                warn!(skipped, "Batch mode 'first': remaining records not processed");
            }
            break;
        }
    }

    Ok(last)
}

/// Start the sentiment job for one uploaded object and record the response.
#[instrument(
    skip_all,
    fields(
        bucket = %notification.bucket,
        key = %notification.key,
        event_name = ?notification.event_name,
        size = ?notification.size,
    )
)]
pub async fn process_notification(
    ctx: &HandlerContext,
    notification: &UploadNotification,
) -> SentimentResult {
    let config = &ctx.config;
    let now = ctx.clock.now();
    let job_name = naming::job_name(
        &config.job_name_prefix,
        config.job_naming,
        now,
        notification,
    );
    let request = JobRequest::for_upload(config, notification, job_name.as_str());

    info!(
        "Starting sentiment job {} for {}",
        request.job_name, request.input_uri
    );

    match submit_and_record(ctx, &request).await {
        Ok(stored) => {
            info!("Job {} submitted, response at {}", job_name, stored.location);
            SentimentResult::started(&job_name)
        }
        Err(e) => {
            error!("Job {} for {} failed: {}", job_name, request.input_uri, e);
            let result = SentimentResult::failed(failure_reason(&e));

            if config.persist_failures {
                let record = FailureRecord {
                    job_name: job_name.clone(),
                    input_s3_uri: request.input_uri.clone(),
                    failed_at: now.to_rfc3339(),
                    result: result.clone(),
                };
                if let Err(e) = persist_failure(ctx, &record).await {
                    warn!("Could not persist failure of job {}: {}", job_name, e);
                }
            }

            result
        }
    }
}

/// The error text as a JSON string literal.
fn failure_reason(error: &AppError) -> String {
    serde_json::Value::String(error.to_string()).to_string()
}

async fn submit_and_record(ctx: &HandlerContext, request: &JobRequest) -> Result<StoredObject> {
    let submission = ctx.service.start_sentiment_job(request).await?;
    let body = to_sorted_pretty(&submission)?;
    let key = ctx.config.result_key_for(&request.job_name);
    ctx.store.put_json(&key, body).await
}

async fn persist_failure(ctx: &HandlerContext, record: &FailureRecord) -> Result<StoredObject> {
    let body = to_sorted_pretty(record)?;
    let key = ctx.config.failure_key_for(&record.job_name);
    ctx.store.put_json(&key, body).await
}
