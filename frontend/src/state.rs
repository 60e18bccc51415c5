//! Upload-and-process controller state.
//!
//! All mutable page state lives in a single [`Processor`] value. UI events
//! call its operations directly; the asynchronous attempt (see
//! [`crate::pipeline`]) reports back through [`Processor::apply`].
//!
//! # Phases
//!
//! ```text
//! Idle ──drag──▶ Selecting
//!  │                │
//!  └──select/drop───┴──▶ Confirmed ──begin──▶ Processing(0..5)
//!                                                 │
//!                                            Submitting ──fail──▶ Error
//!                                                 │
//!                                           AwaitingVideo ──fail──▶ Error
//!                                             │        │
//!                                           Ready   VideoUnavailable
//! ```
//!
//! Selecting a video returns to `Confirmed` from any phase. Events of an
//! attempt started before that selection are discarded.

use crate::config::{COMPLETE_MESSAGE, DOWNLOAD_FILE_NAME, ERROR_MESSAGE};
use crate::types::{ActiveTab, ResultVideo, VideoSource};

/// Controller phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet
    #[default]
    Idle,
    /// A drag hovers the drop zone and nothing is selected yet
    Selecting,
    /// A video is selected and can be submitted
    Confirmed,
    /// Simulated stages are being shown
    Processing {
        /// Number of stages already elapsed
        stage: usize,
    },
    /// Upload request in flight
    Submitting,
    /// Detection logs received, summary video download in flight
    AwaitingVideo,
    /// Summary video downloaded
    Ready,
    /// Download endpoint answered with a non-success status
    VideoUnavailable,
    /// One of the two requests failed
    Error,
}

/// Identifier of one start of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// A started attempt: the id to report under and the file to upload.
#[derive(Clone, Debug)]
pub struct Attempt<F> {
    pub id: AttemptId,
    pub file: F,
}

/// Progress reported by a running attempt.
#[derive(Debug, PartialEq)]
pub enum ProgressEvent {
    /// A simulated stage message is shown
    StageStarted(String),
    /// The n-th simulated stage elapsed
    StageElapsed(usize),
    /// The upload request is issued
    Submitting,
    /// The backend returned its detection logs
    Processed { logs: Vec<String> },
    /// The summary video is available locally
    VideoReady(ResultVideo),
    /// The download endpoint refused the summary path
    VideoUnavailable,
    /// A request failed
    Failed,
    /// The attempt is over, whatever its outcome
    Finished,
}

/// Page controller, generic over the selected file type.
#[derive(Debug)]
pub struct Processor<F> {
    phase: Phase,
    selected: Option<F>,
    dragging: bool,
    /// Attempt whose events are applied
    live: Option<AttemptId>,
    /// Attempt that has not reported `Finished` yet
    in_flight: Option<AttemptId>,
    next_attempt: u64,
    stage: usize,
    steps: Vec<String>,
    logs: Vec<String>,
    result: Option<ResultVideo>,
    tab: ActiveTab,
}

impl<F> Default for Processor<F> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            selected: None,
            dragging: false,
            live: None,
            in_flight: None,
            next_attempt: 0,
            stage: 0,
            steps: Vec::new(),
            logs: Vec::new(),
            result: None,
            tab: ActiveTab::Upload,
        }
    }
}

impl<F: VideoSource> Processor<F> {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // File selection
    // -------------------------------------------------------------------------

    /// Update drag hover feedback.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.dragging = dragging;
        match (dragging, self.phase) {
            (true, Phase::Idle) => self.phase = Phase::Selecting,
            (false, Phase::Selecting) => self.phase = Phase::Idle,
            _ => {}
        }
    }

    /// Select a file from the picker.
    ///
    /// Non-video files are ignored and `false` is returned.
    pub fn select_file(&mut self, file: F) -> bool {
        if !file.is_video() {
            log::debug!("Ignoring non-video file {}", file.name());
            return false;
        }

        log::info!("🎞️ Selected {}", file.name());
        self.selected = Some(file);
        self.live = None;
        self.clear_results();
        self.tab = ActiveTab::Upload;
        self.phase = Phase::Confirmed;
        true
    }

    /// Handle a drop on the drop zone. Only the first file is considered.
    pub fn drop_files(&mut self, files: Vec<F>) -> bool {
        self.set_dragging(false);
        match files.into_iter().next() {
            Some(file) => self.select_file(file),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Attempt lifecycle
    // -------------------------------------------------------------------------

    /// Start an attempt with the selected file.
    ///
    /// Returns `None` when nothing is selected or an attempt is in flight.
    pub fn begin(&mut self) -> Option<Attempt<F>> {
        if self.in_flight.is_some() {
            return None;
        }
        let file = self.selected.clone()?;

        let id = AttemptId(self.next_attempt);
        self.next_attempt += 1;
        self.live = Some(id);
        self.in_flight = Some(id);
        self.clear_results();
        self.phase = Phase::Processing { stage: 0 };

        Some(Attempt { id, file })
    }

    /// Apply an event reported by attempt `id`.
    ///
    /// Returns `false` when the event was discarded.
    pub fn apply(&mut self, id: AttemptId, event: ProgressEvent) -> bool {
        if let ProgressEvent::Finished = event {
            if self.in_flight == Some(id) {
                self.in_flight = None;
                return true;
            }
            return false;
        }

        if self.live != Some(id) {
            log::debug!("Discarding {:?} from superseded attempt", event);
            return false;
        }

        match event {
            ProgressEvent::StageStarted(message) => {
                self.steps.push(message);
            }
            ProgressEvent::StageElapsed(stage) => {
                self.stage = stage;
                self.phase = Phase::Processing { stage };
            }
            ProgressEvent::Submitting => {
                self.phase = Phase::Submitting;
            }
            ProgressEvent::Processed { logs } => {
                self.logs = logs;
                self.steps.push(COMPLETE_MESSAGE.to_string());
                self.phase = Phase::AwaitingVideo;
            }
            ProgressEvent::VideoReady(video) => {
                self.result = Some(video);
                self.phase = Phase::Ready;
                self.tab = ActiveTab::Results;
            }
            ProgressEvent::VideoUnavailable => {
                self.phase = Phase::VideoUnavailable;
            }
            ProgressEvent::Failed => {
                self.steps.push(ERROR_MESSAGE.to_string());
                self.phase = Phase::Error;
            }
            ProgressEvent::Finished => {}
        }
        true
    }

    // -------------------------------------------------------------------------
    // Tabs
    // -------------------------------------------------------------------------

    /// Switch the visible panel. Results stay closed until something exists.
    pub fn select_tab(&mut self, tab: ActiveTab) -> bool {
        if tab == ActiveTab::Results && !self.results_available() {
            return false;
        }
        self.tab = tab;
        true
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Events of attempt `id` are still applied.
    pub fn is_live(&self, id: AttemptId) -> bool {
        self.live == Some(id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_file(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    /// An attempt is running.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The running attempt belongs to the selected file.
    ///
    /// False while a superseded attempt is still winding down.
    pub fn is_processing_live(&self) -> bool {
        self.in_flight.is_some() && self.in_flight == self.live
    }

    pub fn can_start(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Number of simulated stages elapsed in the current attempt.
    pub fn processing_stage(&self) -> usize {
        self.stage
    }

    pub fn process_steps(&self) -> &[String] {
        &self.steps
    }

    pub fn detection_logs(&self) -> &[String] {
        &self.logs
    }

    pub fn result_video(&self) -> Option<&ResultVideo> {
        self.result.as_ref()
    }

    /// Object URL and file name to save the result under, if any.
    pub fn download_target(&self) -> Option<(&str, &'static str)> {
        self.result
            .as_ref()
            .map(|video| (video.url(), DOWNLOAD_FILE_NAME))
    }

    pub fn is_video_ready(&self) -> bool {
        self.result.is_some()
    }

    /// The results panel can be opened.
    pub fn results_available(&self) -> bool {
        self.is_video_ready() || !self.logs.is_empty()
    }

    pub fn active_tab(&self) -> ActiveTab {
        self.tab
    }

    fn clear_results(&mut self) {
        self.stage = 0;
        self.steps.clear();
        self.logs.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::STAGE_MESSAGES;

    #[derive(Clone, Debug, PartialEq)]
    struct FakeFile {
        name: &'static str,
        mime: &'static str,
    }

    impl VideoSource for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> f64 {
            2048.0
        }

        fn mime_type(&self) -> String {
            self.mime.to_string()
        }
    }

    fn video(name: &'static str) -> FakeFile {
        FakeFile { name, mime: "video/mp4" }
    }

    fn image(name: &'static str) -> FakeFile {
        FakeFile { name, mime: "image/png" }
    }

    /// Drive an attempt through to a downloaded result.
    fn complete_run(p: &mut Processor<FakeFile>) -> AttemptId {
        let attempt = p.begin().expect("attempt should start");
        for (i, msg) in STAGE_MESSAGES.iter().enumerate() {
            p.apply(attempt.id, ProgressEvent::StageStarted(msg.to_string()));
            p.apply(attempt.id, ProgressEvent::StageElapsed(i + 1));
        }
        p.apply(attempt.id, ProgressEvent::Submitting);
        p.apply(
            attempt.id,
            ProgressEvent::Processed {
                logs: vec!["a".to_string(), "b".to_string()],
            },
        );
        p.apply(
            attempt.id,
            ProgressEvent::VideoReady(ResultVideo::from_object_url("blob:fake/1")),
        );
        p.apply(attempt.id, ProgressEvent::Finished);
        attempt.id
    }

    #[test]
    fn test_new_processor_is_idle() {
        let p: Processor<FakeFile> = Processor::new();
        assert_eq!(p.phase(), Phase::Idle);
        assert_eq!(p.active_tab(), ActiveTab::Upload);
        assert!(!p.can_start());
        assert!(!p.results_available());
    }

    #[test]
    fn test_non_video_selection_is_ignored() {
        let mut p = Processor::new();
        assert!(p.select_file(video("first.mp4")));
        complete_run(&mut p);

        assert!(!p.select_file(image("photo.png")));
        assert_eq!(p.selected_file(), Some(&video("first.mp4")));
        assert_eq!(p.detection_logs(), ["a", "b"]);
        assert_eq!(p.process_steps().len(), STAGE_MESSAGES.len() + 1);
        assert!(p.is_video_ready());
        assert_eq!(p.phase(), Phase::Ready);
    }

    #[test]
    fn test_non_video_drop_is_ignored() {
        let mut p: Processor<FakeFile> = Processor::new();
        assert!(!p.drop_files(vec![image("a.png"), video("b.mp4")]));
        assert!(p.selected_file().is_none());
        assert_eq!(p.phase(), Phase::Idle);

        assert!(!p.drop_files(Vec::new()));
        assert!(p.selected_file().is_none());
    }

    #[test]
    fn test_drop_uses_first_file_only() {
        let mut p = Processor::new();
        assert!(p.drop_files(vec![video("first.mp4"), video("second.mp4")]));
        assert_eq!(p.selected_file().map(|f| f.name), Some("first.mp4"));
        assert_eq!(p.phase(), Phase::Confirmed);
    }

    #[test]
    fn test_dragging_enters_and_leaves_selecting() {
        let mut p: Processor<FakeFile> = Processor::new();
        p.set_dragging(true);
        assert!(p.is_dragging());
        assert_eq!(p.phase(), Phase::Selecting);
        p.set_dragging(false);
        assert_eq!(p.phase(), Phase::Idle);

        p.select_file(video("clip.mp4"));
        p.set_dragging(true);
        assert_eq!(p.phase(), Phase::Confirmed);
        p.drop_files(vec![image("nope.png")]);
        assert!(!p.is_dragging());
        assert_eq!(p.phase(), Phase::Confirmed);
    }

    #[test]
    fn test_video_selection_confirms() {
        let mut p = Processor::new();
        assert!(p.select_file(video("clip.mp4")));
        assert_eq!(p.phase(), Phase::Confirmed);
        assert!(p.can_start());
        assert!(p.process_steps().is_empty());
        assert!(p.detection_logs().is_empty());
        assert!(!p.is_video_ready());
    }

    #[test]
    fn test_begin_requires_selection() {
        let mut p: Processor<FakeFile> = Processor::new();
        assert!(p.begin().is_none());
        assert_eq!(p.phase(), Phase::Idle);
    }

    #[test]
    fn test_begin_refused_while_in_flight() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        let attempt = p.begin().unwrap();
        assert_eq!(attempt.file, video("clip.mp4"));
        assert!(p.is_loading());
        assert!(p.begin().is_none());

        p.apply(attempt.id, ProgressEvent::Finished);
        assert!(!p.is_loading());
        assert!(p.begin().is_some());
    }

    #[test]
    fn test_stage_progression() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        let attempt = p.begin().unwrap();
        assert_eq!(p.phase(), Phase::Processing { stage: 0 });

        p.apply(attempt.id, ProgressEvent::StageStarted(STAGE_MESSAGES[0].to_string()));
        p.apply(attempt.id, ProgressEvent::StageElapsed(1));
        assert_eq!(p.processing_stage(), 1);
        assert_eq!(p.phase(), Phase::Processing { stage: 1 });
        assert_eq!(p.process_steps(), [STAGE_MESSAGES[0]]);
    }

    #[test]
    fn test_successful_run_switches_to_results() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        complete_run(&mut p);

        assert_eq!(p.phase(), Phase::Ready);
        assert_eq!(p.active_tab(), ActiveTab::Results);
        assert_eq!(p.detection_logs(), ["a", "b"]);
        assert_eq!(p.result_video().map(|v| v.url()), Some("blob:fake/1"));
        assert_eq!(p.process_steps().last().map(String::as_str), Some(COMPLETE_MESSAGE));
        assert!(!p.is_loading());
    }

    #[test]
    fn test_failure_appends_error_and_stays_on_upload() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        let attempt = p.begin().unwrap();
        for (i, msg) in STAGE_MESSAGES.iter().enumerate() {
            p.apply(attempt.id, ProgressEvent::StageStarted(msg.to_string()));
            p.apply(attempt.id, ProgressEvent::StageElapsed(i + 1));
        }
        p.apply(attempt.id, ProgressEvent::Submitting);
        p.apply(attempt.id, ProgressEvent::Failed);
        p.apply(attempt.id, ProgressEvent::Finished);

        assert_eq!(p.phase(), Phase::Error);
        assert!(p.detection_logs().is_empty());
        assert_eq!(p.process_steps().last().map(String::as_str), Some(ERROR_MESSAGE));
        assert_eq!(p.active_tab(), ActiveTab::Upload);
        assert!(!p.select_tab(ActiveTab::Results));
        assert!(p.can_start());
    }

    #[test]
    fn test_unavailable_video_keeps_logs_silently() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        let attempt = p.begin().unwrap();
        p.apply(attempt.id, ProgressEvent::Processed { logs: vec!["x".to_string()] });
        p.apply(attempt.id, ProgressEvent::VideoUnavailable);

        assert_eq!(p.phase(), Phase::VideoUnavailable);
        assert_eq!(p.process_steps(), [COMPLETE_MESSAGE]);
        assert!(!p.is_video_ready());
        assert_eq!(p.active_tab(), ActiveTab::Upload);
        assert!(p.select_tab(ActiveTab::Results));
    }

    #[test]
    fn test_second_selection_resets_results() {
        let mut p = Processor::new();
        p.select_file(video("first.mp4"));
        complete_run(&mut p);

        assert!(p.select_file(video("second.mp4")));
        assert_eq!(p.phase(), Phase::Confirmed);
        assert!(p.detection_logs().is_empty());
        assert!(p.process_steps().is_empty());
        assert!(p.result_video().is_none());
        assert!(!p.is_video_ready());
        assert_eq!(p.active_tab(), ActiveTab::Upload);
        assert_eq!(p.processing_stage(), 0);
    }

    #[test]
    fn test_events_from_superseded_attempt_are_discarded() {
        let mut p = Processor::new();
        p.select_file(video("first.mp4"));
        let stale = p.begin().unwrap();
        p.apply(stale.id, ProgressEvent::StageStarted("stage".to_string()));

        p.select_file(video("second.mp4"));
        assert!(p.is_loading());
        assert!(!p.can_start());

        assert!(!p.apply(stale.id, ProgressEvent::Processed { logs: vec!["old".to_string()] }));
        assert!(!p.apply(
            stale.id,
            ProgressEvent::VideoReady(ResultVideo::from_object_url("blob:stale"))
        ));
        assert!(p.detection_logs().is_empty());
        assert!(p.result_video().is_none());
        assert_eq!(p.phase(), Phase::Confirmed);

        assert!(!p.is_live(stale.id));
        assert!(p.apply(stale.id, ProgressEvent::Finished));
        assert!(p.can_start());
        let fresh = p.begin().unwrap();
        assert_ne!(fresh.id, stale.id);
        assert_eq!(fresh.file.name, "second.mp4");
    }

    #[test]
    fn test_download_target_names_the_optimized_video() {
        let mut p = Processor::new();
        assert_eq!(p.download_target(), None);

        p.select_file(video("clip.mp4"));
        assert_eq!(p.download_target(), None);

        complete_run(&mut p);
        assert_eq!(
            p.download_target(),
            Some(("blob:fake/1", "cctv_optimized_video.mp4"))
        );

        p.select_file(video("other.mp4"));
        assert_eq!(p.download_target(), None);
    }

    #[test]
    fn test_superseded_attempt_is_not_live_processing() {
        let mut p = Processor::new();
        p.select_file(video("first.mp4"));
        let stale = p.begin().unwrap();
        assert!(p.is_processing_live());

        p.select_file(video("second.mp4"));
        assert!(p.is_loading());
        assert!(!p.is_processing_live());
        assert!(!p.can_start());

        p.apply(stale.id, ProgressEvent::Finished);
        assert!(!p.is_processing_live());
        assert!(p.can_start());

        let fresh = p.begin().unwrap();
        assert!(p.is_processing_live());
        p.apply(fresh.id, ProgressEvent::Finished);
        assert!(!p.is_processing_live());
    }

    #[test]
    fn test_results_tab_requires_results() {
        let mut p = Processor::new();
        assert!(!p.select_tab(ActiveTab::Results));
        p.select_file(video("clip.mp4"));
        complete_run(&mut p);

        assert!(p.select_tab(ActiveTab::Upload));
        assert_eq!(p.active_tab(), ActiveTab::Upload);
        assert!(p.select_tab(ActiveTab::Results));
        assert_eq!(p.active_tab(), ActiveTab::Results);
    }

    #[test]
    fn test_restart_clears_previous_run() {
        let mut p = Processor::new();
        p.select_file(video("clip.mp4"));
        complete_run(&mut p);

        let _ = p.begin().unwrap();
        assert!(p.process_steps().is_empty());
        assert!(p.detection_logs().is_empty());
        assert!(!p.is_video_ready());
        assert_eq!(p.phase(), Phase::Processing { stage: 0 });
    }
}
