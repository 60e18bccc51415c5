//! One upload attempt, from simulated stages to the downloaded summary.
//!
//! The attempt is written against two seams so it runs the same way in
//! the browser and in tests:
//!
//! - [`StageTimeline`] paces the cosmetic stage messages
//! - [`ProcessingBackend`] performs the two HTTP calls
//!
//! Progress is reported through an `emit` callback, which the page wires
//! to [`crate::state::Processor::apply`].

use crate::config::STAGE_MESSAGES;
use crate::state::{Attempt, ProgressEvent};
use crate::types::{AppResult, ProcessResponse, ResultVideo};

/// Source of the delay between two simulated stages.
#[allow(async_fn_in_trait)]
pub trait StageTimeline {
    /// Wait before `stage` (1-based) counts as elapsed.
    async fn hold(&self, stage: usize);
}

/// The remote video-processing service.
#[allow(async_fn_in_trait)]
pub trait ProcessingBackend<F> {
    /// Upload the video and return its detection logs and summary path.
    async fn process_video(&self, file: &F) -> AppResult<ProcessResponse>;

    /// Download the summary video.
    ///
    /// `Ok(None)` means the service answered with a non-success status.
    async fn fetch_summary(&self, summary_video: &str) -> AppResult<Option<ResultVideo>>;
}

/// How an attempt ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Summary video downloaded
    Ready,
    /// Logs received but the download was refused
    VideoUnavailable,
    /// A request failed
    Failed,
}

/// Run one attempt to completion.
///
/// Always ends by emitting [`ProgressEvent::Finished`]. No retry is made.
pub async fn run_attempt<F, B, T>(
    attempt: Attempt<F>,
    backend: &B,
    timeline: &T,
    mut emit: impl FnMut(ProgressEvent),
) -> Outcome
where
    B: ProcessingBackend<F>,
    T: StageTimeline,
{
    let outcome = execute(&attempt.file, backend, timeline, &mut emit).await;
    emit(ProgressEvent::Finished);
    outcome
}

async fn execute<F, B, T>(
    file: &F,
    backend: &B,
    timeline: &T,
    emit: &mut impl FnMut(ProgressEvent),
) -> Outcome
where
    B: ProcessingBackend<F>,
    T: StageTimeline,
{
    for (i, message) in STAGE_MESSAGES.iter().enumerate() {
        emit(ProgressEvent::StageStarted(message.to_string()));
        timeline.hold(i + 1).await;
        emit(ProgressEvent::StageElapsed(i + 1));
    }

    emit(ProgressEvent::Submitting);
    let response = match backend.process_video(file).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("❌ Video processing failed: {}", e);
            emit(ProgressEvent::Failed);
            return Outcome::Failed;
        }
    };

    log::info!(
        "✅ Processing complete: {} detection logs, summary at {}",
        response.logs.len(),
        response.summary_video
    );
    let summary_video = response.summary_video;
    emit(ProgressEvent::Processed { logs: response.logs });

    match backend.fetch_summary(&summary_video).await {
        Ok(Some(video)) => {
            log::info!("🎬 Summary video ready");
            emit(ProgressEvent::VideoReady(video));
            Outcome::Ready
        }
        Ok(None) => {
            log::warn!("Summary video {} unavailable", summary_video);
            emit(ProgressEvent::VideoUnavailable);
            Outcome::VideoUnavailable
        }
        Err(e) => {
            log::error!("❌ Summary download failed: {}", e);
            emit(ProgressEvent::Failed);
            Outcome::Failed
        }
    }
}
