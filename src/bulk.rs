//! Bulk company search jobs.
//!
//! There is no job table: submit hands back a fresh handle in `processing`,
//! and every status poll reports the job as `completed` over the whole
//! company catalog, whatever identifier it is given.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use uuid::Uuid;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{BulkJobStatus, BulkJobSubmitted, BulkSearchRequest, JobStatus};

pub const DEFAULT_JOB_NAME: &str = "Bulk Company Search";
pub const DEFAULT_MAX_RESULTS: u64 = 10_000;

/// How long before a poll the job claims to have been submitted.
const REPORTED_RUNTIME_SECS: i64 = 600;
/// Lifetime of the download link.
const DOWNLOAD_TTL_SECS: i64 = 86_400;

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Opaque job handle: submission time in millis plus a random suffix.
pub fn new_job_id(now: DateTime<Utc>) -> String {
    let suffix: String = Uuid::new_v4().simple().to_string().chars().take(7).collect();
    format!("job_{}_{}", now.timestamp_millis(), suffix)
}

pub fn submit(
    config: &Config,
    request: &BulkSearchRequest,
    now: DateTime<Utc>,
) -> Result<BulkJobSubmitted, AppError> {
    let job_name = request
        .job_name
        .clone()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_JOB_NAME.to_string());

    let eta = Duration::try_seconds(config.bulk_eta_secs)
        .and_then(|offset| now.checked_add_signed(offset))
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "bulk ETA of {}s is out of range",
                config.bulk_eta_secs
            ))
        })?;

    Ok(BulkJobSubmitted {
        success: true,
        job_id: new_job_id(now),
        job_name,
        status: JobStatus::Processing,
        submitted_at: timestamp(now),
        estimated_completion_time: timestamp(eta),
        max_results: request.max_results.unwrap_or(DEFAULT_MAX_RESULTS),
        message: "Bulk search job submitted successfully. Use GET /search/company/bulk/{jobId} to check status."
            .to_string(),
    })
}

pub fn status(config: &Config, job_id: &str, total_results: u64, now: DateTime<Utc>) -> BulkJobStatus {
    BulkJobStatus {
        success: true,
        job_id: job_id.to_string(),
        status: JobStatus::Completed,
        submitted_at: timestamp(now - Duration::seconds(REPORTED_RUNTIME_SECS)),
        completed_at: timestamp(now),
        total_results,
        download_url: format!("{}/{}", config.download_base_url, job_id),
        expires_at: timestamp(now + Duration::seconds(DOWNLOAD_TTL_SECS)),
    }
}
