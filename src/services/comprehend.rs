//! Amazon Comprehend implementation.

use async_trait::async_trait;
use aws_sdk_comprehend::Client;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::operation::RequestId;
use aws_sdk_comprehend::operation::start_sentiment_detection_job::StartSentimentDetectionJobOutput;
use aws_sdk_comprehend::operation::start_sentiment_detection_job::builders::StartSentimentDetectionJobFluentBuilder;
use aws_sdk_comprehend::types::{InputDataConfig, InputFormat, LanguageCode, OutputDataConfig};
use tracing::{debug, instrument};

use crate::error::{AppError, Result};
use crate::models::{DocumentFormat, JobRequest, JobSubmission, ResponseMetadata};
use crate::services::SentimentService;

/// Sentiment service backed by `StartSentimentDetectionJob`.
#[derive(Clone)]
pub struct ComprehendService {
    client: Client,
}

impl ComprehendService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the service from a loaded AWS SDK configuration.
    pub fn from_sdk_config(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }

    /// Prepare the `StartSentimentDetectionJob` call for `request`.
    fn start_job_call(&self, request: &JobRequest) -> Result<StartSentimentDetectionJobFluentBuilder> {
        let input = InputDataConfig::builder()
            .s3_uri(&request.input_uri)
            .input_format(input_format(request.input_format))
            .build()
            .map_err(AppError::service)?;

        let output = OutputDataConfig::builder()
            .s3_uri(&request.output_uri)
            .build()
            .map_err(AppError::service)?;

        Ok(self
            .client
            .start_sentiment_detection_job()
            .input_data_config(input)
            .output_data_config(output)
            .job_name(&request.job_name)
            .language_code(LanguageCode::from(request.language_code.as_str()))
            .data_access_role_arn(&request.data_access_role_arn))
    }
}

fn input_format(format: DocumentFormat) -> InputFormat {
    match format {
        DocumentFormat::OneDocPerLine => InputFormat::OneDocPerLine,
    }
}

fn submission(output: &StartSentimentDetectionJobOutput) -> JobSubmission {
    JobSubmission {
        job_id: output.job_id().map(str::to_string),
        job_arn: output.job_arn().map(str::to_string),
        job_status: output.job_status().map(|s| s.as_str().to_string()),
        response_metadata: Some(ResponseMetadata {
            request_id: output.request_id().map(str::to_string),
        }),
    }
}

#[async_trait]
impl SentimentService for ComprehendService {
    #[instrument(skip(self, request), fields(job_name = %request.job_name))]
    async fn start_sentiment_job(&self, request: &JobRequest) -> Result<JobSubmission> {
        let response = self
            .start_job_call(request)?
            .send()
            .await
            .map_err(|e| AppError::service(DisplayErrorContext(&e)))?;

        debug!(job_id = ?response.job_id(), "Comprehend accepted job");
        Ok(submission(&response))
    }
}
