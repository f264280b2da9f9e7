// src/lambda/mod.rs

//! AWS Lambda handler for S3 upload notifications.
//!
//! The runtime deserializes the S3 event; this adapter logs it, runs the
//! shared handler and returns the last `SentimentResult` (or `null` for an
//! empty batch). Only a malformed event is reported as an invocation error.

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error as LambdaError, LambdaEvent};
use tracing::{error, info, instrument};

use crate::handler::{HandlerContext, handle_event};
use crate::models::SentimentResult;

/// Main Lambda handler function.
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn handler(
    ctx: &HandlerContext,
    event: LambdaEvent<S3Event>,
) -> std::result::Result<Option<SentimentResult>, LambdaError> {
    let (payload, _context) = event.into_parts();
    info!(event = ?payload, "Received S3 event");

    match handle_event(ctx, &payload).await {
        Ok(result) => {
            if let Some(result) = &result {
                info!(status = result.status(), "Invocation finished");
            }
            Ok(result)
        }
        Err(e) => {
            error!("Invocation failed: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use lambda_runtime::Context;
    use tempfile::TempDir;

    use crate::models::{Config, upload_event};
    use crate::services::DryRunService;
    use crate::storage::LocalStore;

    fn context(dir: &TempDir) -> HandlerContext {
        HandlerContext::new(
            Config::new("results", "arn:aws:iam::1:role/r"),
            Arc::new(DryRunService::default()),
            Arc::new(LocalStore::new(dir.path())),
        )
    }

    #[tokio::test]
    async fn test_handler_returns_last_result() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let payload: S3Event =
            serde_json::from_str(include_str!("../../fixtures/s3_put_event.json")).unwrap();

        let result = handler(&ctx, LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap()
            .unwrap();

        assert!(result.is_success());
        assert!(dir.path().join("output/comprehend_response.json").exists());
    }

    #[tokio::test]
    async fn test_handler_rejects_malformed_event() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let mut payload = upload_event(&[("uploads", "a.txt")]);
        payload.records[0].s3.object.key = None;

        let result = handler(&ctx, LambdaEvent::new(payload, Context::default())).await;

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_result_serializes_to_null() {
        let result: Option<SentimentResult> = None;
        assert_eq!(serde_json::to_string(&result).unwrap(), "null");
    }
}
