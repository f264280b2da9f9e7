//! AWS Lambda entry point for the sentiment trigger.
//!
//! Deploy with `cargo lambda build --release --features lambda`
//! and subscribe the function to `s3:ObjectCreated:*` notifications.
//!
//! Configuration is read from the environment once per cold start; see
//! `sentiment_trigger::config` for the variables.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error as LambdaError, LambdaEvent, service_fn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentiment_trigger::handler::HandlerContext;
use sentiment_trigger::{config, lambda};

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    // Initialize tracing for Lambda
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config = config::from_env()?;
    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let ctx = Arc::new(HandlerContext::from_sdk_config(config, &sdk_config));

    info!(
        output_bucket = %ctx.config().output_bucket,
        batch_mode = %ctx.config().batch_mode,
        job_naming = %ctx.config().job_naming,
        "Sentiment trigger starting..."
    );

    lambda_runtime::run(service_fn(move |event: LambdaEvent<S3Event>| {
        let ctx = Arc::clone(&ctx);
        async move { lambda::handler(&ctx, event).await }
    }))
    .await
}
