//! Processing job submission.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Job submission failed: {0}")]
    SubmissionFailed(String),
}

/// Reference to a submitted processing job.
#[derive(Debug, Clone)]
pub struct JobRef {
    pub name: String,
}

/// Orchestration abstraction
///
/// Submitting a job is best-effort from the upload path: callers log
/// failures and never fail the upload over them.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Submit a processing job for an uploaded video.
    async fn submit_job(
        &self,
        video_id: Uuid,
        stored_path: &str,
    ) -> Result<JobRef, OrchestratorError>;
}

/// Job name for a video id: `video-processing-` plus the first 8 hex digits.
fn job_name_for(video_id: Uuid) -> String {
    let hex = video_id.simple().to_string();
    format!("video-processing-{}", &hex[..8])
}

/// Default orchestrator: names the job and does nothing else.
#[derive(Debug, Default, Clone)]
pub struct NoopOrchestrator;

#[async_trait]
impl Orchestrator for NoopOrchestrator {
    async fn submit_job(
        &self,
        video_id: Uuid,
        stored_path: &str,
    ) -> Result<JobRef, OrchestratorError> {
        let job = JobRef {
            name: job_name_for(video_id),
        };
        tracing::debug!(
            video_id = %video_id,
            stored_path = %stored_path,
            job = %job.name,
            "No orchestrator configured; job submission is a no-op"
        );
        Ok(job)
    }
}
