//! Offline sentiment service for local runs.

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::error::Result;
use crate::models::{JobRequest, JobSubmission, ResponseMetadata};
use crate::services::SentimentService;

const DRY_RUN_ACCOUNT: &str = "000000000000";

/// Acknowledges every job without contacting Comprehend.
///
/// The job id is derived from the job name, so replaying the same event in
/// the same minute yields the same acknowledgement.
#[derive(Debug, Clone)]
pub struct DryRunService {
    region: String,
}

impl DryRunService {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

impl Default for DryRunService {
    fn default() -> Self {
        Self::new("local")
    }
}

#[async_trait]
impl SentimentService for DryRunService {
    async fn start_sentiment_job(&self, request: &JobRequest) -> Result<JobSubmission> {
        let digest = hex::encode(Sha256::digest(request.job_name.as_bytes()));
        let job_id = digest[..32].to_string();

        info!(
            "Dry run: would start sentiment job {} for {}",
            request.job_name, request.input_uri
        );

        Ok(JobSubmission {
            job_arn: Some(format!(
                "arn:aws:comprehend:{}:{}:sentiment-detection-job/{}",
                self.region, DRY_RUN_ACCOUNT, job_id
            )),
            job_id: Some(job_id),
            job_status: Some("SUBMITTED".to_string()),
            response_metadata: Some(ResponseMetadata {
                request_id: Some(format!("dry-run-{}", &digest[32..40])),
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentFormat;

    fn request(job_name: &str) -> JobRequest {
        JobRequest {
            job_name: job_name.to_string(),
            input_uri: "s3://uploads/input/a.txt".to_string(),
            input_format: DocumentFormat::OneDocPerLine,
            output_uri: "s3://results/output/".to_string(),
            language_code: "fr".to_string(),
            data_access_role_arn: "arn:aws:iam::1:role/r".to_string(),
        }
    }

    #[tokio::test]
    async fn test_dry_run_is_deterministic() {
        let service = DryRunService::default();
        let a = service.start_sentiment_job(&request("job_a")).await.unwrap();
        let again = service.start_sentiment_job(&request("job_a")).await.unwrap();
        let b = service.start_sentiment_job(&request("job_b")).await.unwrap();

        assert_eq!(a, again);
        assert_ne!(a.job_id, b.job_id);
        assert_eq!(a.job_status.as_deref(), Some("SUBMITTED"));
        assert!(
            a.job_arn
                .as_deref()
                .unwrap()
                .starts_with("arn:aws:comprehend:local:000000000000:sentiment-detection-job/")
        );
    }
}
