// src/models/mod.rs

//! Domain models for the sentiment trigger.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod event;
mod job;
mod result;

// Re-export all public types
pub use config::{BatchMode, Config, JobNaming, MAX_JOB_NAME_LEN};
pub use event::UploadNotification;
#[cfg(test)]
pub(crate) use event::upload_event;
pub use job::{DocumentFormat, JobRequest, JobSubmission, ResponseMetadata};
pub use result::{FailureRecord, SentimentResult};
