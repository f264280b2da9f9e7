//! Job name generation.

use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};

use crate::models::{JobNaming, UploadNotification};

/// Build the job name for `notification` at time `now`.
///
/// Minute naming yields `prefix_YYYY-MM-DD-HH-MM`; two uploads in the same
/// minute get the same name. Unique naming appends seconds and the first
/// eight hex digits of a digest over bucket, key and the nanosecond
/// timestamp.
pub fn job_name(
    prefix: &str,
    naming: JobNaming,
    now: DateTime<Local>,
    notification: &UploadNotification,
) -> String {
    match naming {
        JobNaming::Minute => format!("{}_{}", prefix, now.format("%Y-%m-%d-%H-%M")),
        JobNaming::Unique => format!(
            "{}_{}-{}",
            prefix,
            now.format("%Y-%m-%d-%H-%M-%S"),
            digest_suffix(notification, now)
        ),
    }
}

fn digest_suffix(notification: &UploadNotification, now: DateTime<Local>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(notification.bucket.as_bytes());
    hasher.update([0u8]);
    hasher.update(notification.key.as_bytes());
    hasher.update([0u8]);
    hasher.update(now.timestamp_nanos_opt().unwrap_or_default().to_be_bytes());
    let digest = hex::encode(hasher.finalize());
    digest[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use regex::Regex;

    fn upload(key: &str) -> UploadNotification {
        UploadNotification {
            bucket: "uploads".to_string(),
            key: key.to_string(),
            event_name: None,
            size: None,
        }
    }

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, h, m, s).unwrap()
    }

    #[test]
    fn test_minute_name_format() {
        let name = job_name("comprehend_job", JobNaming::Minute, at(9, 5, 42), &upload("a.txt"));
        assert_eq!(name, "comprehend_job_2024-05-01-09-05");

        let pattern = Regex::new(r"^comprehend_job_\d{4}-\d{2}-\d{2}-\d{2}-\d{2}$").unwrap();
        let now_name = job_name("comprehend_job", JobNaming::Minute, Local::now(), &upload("a.txt"));
        assert!(pattern.is_match(&now_name), "{now_name}");
    }

    #[test]
    fn test_minute_names_collide_within_a_minute() {
        let first = job_name("comprehend_job", JobNaming::Minute, at(10, 30, 1), &upload("a.txt"));
        let second = job_name("comprehend_job", JobNaming::Minute, at(10, 30, 59), &upload("b.txt"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unique_names_differ() {
        let now = at(10, 30, 1);
        let a = job_name("comprehend_job", JobNaming::Unique, now, &upload("a.txt"));
        let b = job_name("comprehend_job", JobNaming::Unique, now, &upload("b.txt"));
        let later = job_name(
            "comprehend_job",
            JobNaming::Unique,
            now + Duration::milliseconds(1),
            &upload("a.txt"),
        );

        assert_ne!(a, b);
        assert_ne!(a, later);

        let pattern =
            Regex::new(r"^comprehend_job_2024-05-01-10-30-01-[0-9a-f]{8}$").unwrap();
        assert!(pattern.is_match(&a), "{a}");
    }
}
