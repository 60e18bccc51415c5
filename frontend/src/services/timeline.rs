//! Timer-driven pacing of the simulated processing stages.

use gloo_timers::future::TimeoutFuture;

use crate::config::STAGE_DELAY_MS;
use crate::pipeline::StageTimeline;

/// Waits a fixed delay before every stage.
#[derive(Clone, Copy, Debug)]
pub struct TimerTimeline {
    delay_ms: u32,
}

impl TimerTimeline {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

impl Default for TimerTimeline {
    fn default() -> Self {
        Self::new(STAGE_DELAY_MS)
    }
}

impl StageTimeline for TimerTimeline {
    async fn hold(&self, stage: usize) {
        TimeoutFuture::new(self.delay_ms).await;
        log::debug!("Simulated stage {} elapsed", stage);
    }
}
