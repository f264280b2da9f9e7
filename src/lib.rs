// src/lib.rs

//! Sentiment Trigger Library
//!
//! Starts Amazon Comprehend sentiment detection jobs for objects uploaded to
//! S3 and records the submission response in an output bucket.

pub mod config;
pub mod error;
pub mod handler;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod services;
pub mod storage;
pub mod utils;
