//! Sentiment job request and submission response.

use serde::{Deserialize, Serialize};

use crate::models::{Config, UploadNotification};

/// How Comprehend splits the input object into documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentFormat {
    OneDocPerLine,
}

impl DocumentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneDocPerLine => "ONE_DOC_PER_LINE",
        }
    }
}

/// Everything needed to start one asynchronous sentiment job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    pub job_name: String,
    pub input_uri: String,
    pub input_format: DocumentFormat,
    pub output_uri: String,
    pub language_code: String,
    pub data_access_role_arn: String,
}

impl JobRequest {
    /// Request analysis of `notification`, one document per line.
    pub fn for_upload(
        config: &Config,
        notification: &UploadNotification,
        job_name: impl Into<String>,
    ) -> Self {
        Self {
            job_name: job_name.into(),
            input_uri: notification.source_uri(),
            input_format: DocumentFormat::OneDocPerLine,
            output_uri: config.output_uri(),
            language_code: config.language_code.clone(),
            data_access_role_arn: config.data_access_role_arn.clone(),
        }
    }
}

/// Acknowledgement returned when a job is accepted.
///
/// Passed through to the output bucket as-is, using the service's own
/// field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct JobSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_arn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_for_upload() {
        let config = Config::new("results", "arn:aws:iam::1:role/comprehend");
        let notification = UploadNotification {
            bucket: "uploads".to_string(),
            key: "input/reviews.txt".to_string(),
            event_name: None,
            size: None,
        };

        let request = JobRequest::for_upload(&config, &notification, "comprehend_job_x");
        assert_eq!(request.input_uri, "s3://uploads/input/reviews.txt");
        assert_eq!(request.output_uri, "s3://results/output/");
        assert_eq!(request.input_format.as_str(), "ONE_DOC_PER_LINE");
        assert_eq!(request.language_code, "fr");
        assert_eq!(request.data_access_role_arn, "arn:aws:iam::1:role/comprehend");
    }

    #[test]
    fn test_submission_uses_service_field_names() {
        let submission = JobSubmission {
            job_id: Some("abc".to_string()),
            job_status: Some("SUBMITTED".to_string()),
            response_metadata: Some(ResponseMetadata {
                request_id: Some("req-1".to_string()),
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["JobId"], "abc");
        assert_eq!(value["JobStatus"], "SUBMITTED");
        assert_eq!(value["ResponseMetadata"]["RequestId"], "req-1");
        assert!(value.get("JobArn").is_none());
    }
}
