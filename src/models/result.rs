//! Per-notification outcome returned by the handler.

use serde::{Deserialize, Serialize};

/// Outcome of submitting one sentiment job.
///
/// Serializes as `{"Status": "Success", "Info": ...}` or
/// `{"Status": "Failed", "Reason": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "Status")]
pub enum SentimentResult {
    Success {
        #[serde(rename = "Info")]
        info: String,
    },
    Failed {
        #[serde(rename = "Reason")]
        reason: String,
    },
}

impl SentimentResult {
    pub fn started(job_name: &str) -> Self {
        Self::Success {
            info: format!("Analysis Job {job_name} Started"),
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "Success",
            Self::Failed { .. } => "Failed",
        }
    }
}

/// Failed result as written to the output bucket when failures are persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FailureRecord {
    pub job_name: String,
    pub input_s3_uri: String,
    pub failed_at: String,
    #[serde(flatten)]
    pub result: SentimentResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shape() {
        let result = SentimentResult::started("comprehend_job_2024-05-01-10-30");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "Status": "Success",
                "Info": "Analysis Job comprehend_job_2024-05-01-10-30 Started"
            })
        );
        assert!(result.is_success());
    }

    #[test]
    fn test_failed_shape() {
        let result = SentimentResult::failed("AccessDeniedException");
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["Status"], "Failed");
        assert_eq!(value["Reason"], "AccessDeniedException");
        assert_eq!(result.status(), "Failed");
    }

    #[test]
    fn test_failure_record_flattens_result() {
        let record = FailureRecord {
            job_name: "job".to_string(),
            input_s3_uri: "s3://b/k".to_string(),
            failed_at: "2024-05-01T10:30:00+00:00".to_string(),
            result: SentimentResult::failed("boom"),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["JobName"], "job");
        assert_eq!(value["InputS3Uri"], "s3://b/k");
        assert_eq!(value["Status"], "Failed");
        assert_eq!(value["Reason"], "boom");
    }
}
