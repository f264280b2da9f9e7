//! S3 upload notification payloads.
//!
//! The batch itself is `aws_lambda_events`' `S3Event`; this module turns one
//! of its records into the object the handler works on.

use aws_lambda_events::event::s3::S3EventRecord;

use crate::error::{AppError, Result};
use crate::utils::decode_key;

/// A single uploaded object, with its key decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadNotification {
    pub bucket: String,
    pub key: String,
    pub event_name: Option<String>,
    pub size: Option<i64>,
}

impl UploadNotification {
    /// Extract the notification from the record at position `index`.
    pub fn from_record(index: usize, record: &S3EventRecord) -> Result<Self> {
        let bucket = record
            .s3
            .bucket
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| AppError::event(index, "missing s3.bucket.name"))?;

        let object = &record.s3.object;
        let raw_key = object
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| AppError::event(index, "missing s3.object.key"))?;

        Ok(Self {
            bucket: bucket.to_string(),
            key: decode_key(raw_key),
            event_name: record.event_name.clone(),
            size: object.size,
        })
    }

    /// S3 URI of the uploaded object.
    pub fn source_uri(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[cfg(test)]
pub(crate) fn upload_event(objects: &[(&str, &str)]) -> aws_lambda_events::event::s3::S3Event {
    let mut event = aws_lambda_events::event::s3::S3Event::default();
    for (bucket, key) in objects {
        let mut record = S3EventRecord::default();
        record.event_name = Some("ObjectCreated:Put".to_string());
        record.s3.bucket.name = Some(bucket.to_string());
        record.s3.object.key = Some(key.to_string());
        event.records.push(record);
    }
    event
}
