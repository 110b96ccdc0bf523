use {
    crate::*,
    base::*,
    futures_util::FutureExt,
    gesture::{Action, FrameInput, FrameOutcome, GestureKind, InteractionState, KeypointFrame, ScreenMapping},
    std::sync::Arc,
    store::{EventSink, GestureEvent, StoreError, SubmitOutcome},
    tokio::task::JoinHandle,
};

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameReport {
    /// The frame was classified. `submitted` names the event handed to the sink, if any.
    Processed {
        outcome: FrameOutcome,
        submitted: Option<GestureKind>,
    },
    /// The model failed on this frame; nothing changed.
    InferenceFailed(String),
    /// The frame or its hand could not be used; nothing changed.
    Skipped(String),
    /// The session was stopped while the model was running.
    Discarded,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub inference_failures: u64,
    pub skipped: u64,
    pub discarded: u64,
    pub actions: u64,
    pub submitted: u64,
    pub succeeded: u64,
    pub auth_failed: u64,
    pub transport_failed: u64,
}

impl SessionStats {
    fn count(&mut self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Succeeded => self.succeeded += 1,
            SubmitOutcome::AuthFailed => self.auth_failed += 1,
            SubmitOutcome::TransportFailed(_) => self.transport_failed += 1,
        }
    }
}

/// Stops a running session from outside the frame loop.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    epoch: Epoch,
    started: u64,
}

impl SessionHandle {
    pub fn stop(&self) {
        if self.is_running() {
            self.epoch.advance();
        }
    }

    pub fn is_running(&self) -> bool {
        self.epoch.is_current(self.started)
    }
}

/// One camera-driven detection session.
///
/// Owns the interaction state; frames are processed strictly one after
/// another. Gesture events are handed to the sink on spawned tasks and never
/// awaited by the frame loop.
pub struct DetectionSession<V, E, S, K>
where
    V: VideoSource,
    E: HandEstimator<V::Frame>,
    S: Surface,
    K: EventSink,
{
    video: V,
    estimator: E,
    surface: S,
    sink: K,
    clock: Arc<dyn Clock>,
    config: SessionConfig,
    state: InteractionState,
    epoch: Epoch,
    started: u64,
    submissions: Vec<JoinHandle<SubmitOutcome>>,
    stats: SessionStats,
}

impl<V, E, S, K> DetectionSession<V, E, S, K>
where
    V: VideoSource,
    E: HandEstimator<V::Frame>,
    S: Surface,
    K: EventSink,
{
    /// Start a session with fresh interaction state.
    pub fn start(
        video: V,
        estimator: E,
        surface: S,
        sink: K,
        clock: Arc<dyn Clock>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        config.gesture().validate()?;
        let epoch = Epoch::new();
        let started = epoch.current();
        Ok(Self {
            video,
            estimator,
            surface,
            sink,
            clock,
            config,
            state: InteractionState::new(),
            epoch,
            started,
            submissions: Vec::new(),
            stats: SessionStats::default(),
        })
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            epoch: self.epoch.clone(),
            started: self.started,
        }
    }

    pub fn is_running(&self) -> bool {
        self.epoch.is_current(self.started)
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Process one frame. `None` once the stream has ended or the session was stopped.
    pub async fn tick(&mut self) -> Option<FrameReport> {
        if !self.is_running() {
            return None;
        }
        let frame = self.video.recv().await?;
        if !self.is_running() {
            return None;
        }
        self.stats.frames += 1;

        let estimate = Stamped {
            epoch: self.started,
            inner: self.estimator.estimate_hands(&frame).await,
        };
        let Some(estimate) = estimate.fresh(&self.epoch) else {
            log_debug!("session stopped during inference, dropping frame");
            self.stats.discarded += 1;
            return Some(FrameReport::Discarded);
        };
        let hands = match estimate {
            Ok(hands) => hands,
            Err(error) => {
                log_error!("hand estimation failed: {}", error);
                self.stats.inference_failures += 1;
                return Some(FrameReport::InferenceFailed(error.to_string()));
            }
        };

        let mapping = match ScreenMapping::new(frame.size(), self.surface.viewport()) {
            Ok(mapping) => mapping,
            Err(error) => return Some(self.skip(error.into())),
        };

        // only the first hand steers the pointer
        let hand = match hands.first() {
            Some(hand) => match KeypointFrame::from_points(&hand.keypoints) {
                Ok(keypoints) => Some(keypoints),
                Err(error) => return Some(self.skip(error.into())),
            },
            None => None,
        };

        let (state, outcome) = gesture::step(
            self.config.gesture(),
            self.state,
            FrameInput {
                hand: hand.as_ref(),
                now_ms: self.clock.now_ms(),
                mapping,
            },
        );
        self.state = state;
        let submitted = self.apply(&outcome);
        Some(FrameReport::Processed { outcome, submitted })
    }

    /// Run until the stream ends or the session is stopped.
    pub async fn run(&mut self) -> SessionStats {
        log_info!("detection session {} started", self.started);
        while self.tick().await.is_some() {
            self.collect_finished();
            // give spawned submissions a turn before the next frame
            tokio::task::yield_now().await;
        }
        self.drain_submissions().await;
        log_info!(
            "detection session {} ended after {} frames, {} actions",
            self.started,
            self.stats.frames,
            self.stats.actions
        );
        self.stats.clone()
    }

    /// Wait for every submission still tracked and return their outcomes in
    /// dispatch order. Outcomes already collected by `run` only show in `stats`.
    pub async fn drain_submissions(&mut self) -> Vec<SubmitOutcome> {
        let mut outcomes = Vec::with_capacity(self.submissions.len());
        for submission in self.submissions.drain(..) {
            let outcome = submission
                .await
                .unwrap_or_else(|error| SubmitOutcome::TransportFailed(error.to_string()));
            self.stats.count(&outcome);
            outcomes.push(outcome);
        }
        outcomes
    }

    /// Recent gestures for whoever the sink is acting for.
    pub async fn recent_gestures(&self) -> Result<Vec<GestureEvent>, StoreError> {
        self.sink.fetch_recent_gestures().await
    }

    fn skip(&mut self, error: SessionError) -> FrameReport {
        log_warn!("skipping frame: {}", error);
        self.stats.skipped += 1;
        FrameReport::Skipped(error.to_string())
    }

    fn apply(&mut self, outcome: &FrameOutcome) -> Option<GestureKind> {
        let mut record = None;
        if let Some(action) = outcome.action {
            self.stats.actions += 1;
            match action {
                Action::ModeSwitch { to } => {
                    self.notify(&format!("Switched to {} mode", to));
                    record = Some(action);
                }
                Action::Scroll { dy, .. } => {
                    self.surface.scroll_by(dy);
                    record = Some(action);
                }
                Action::Click { at } => {
                    if self.surface.activate_at(at) {
                        self.notify("Click!");
                        record = Some(action);
                    } else {
                        log_debug!("nothing to click at {}", at);
                    }
                }
            }
        }
        if let Some(pointer) = outcome.pointer {
            self.surface
                .move_pointer(pointer, outcome.indicator, outcome.mode);
        }
        record.map(|action| {
            self.submit(&action);
            action.kind()
        })
    }

    fn notify(&mut self, message: &str) {
        if !self.config.quiet() {
            self.surface.notify(message);
        }
    }

    fn submit(&mut self, action: &Action) {
        let sink = self.sink.clone();
        let gesture = action.kind().as_str().to_string();
        let description = action.description();
        log_info!("gesture {}: {}", gesture, description);
        self.stats.submitted += 1;
        self.submissions.push(tokio::spawn(async move {
            let outcome = sink.record_gesture(gesture, description).await;
            if outcome != SubmitOutcome::Succeeded {
                log_warn!("gesture event not recorded: {}", outcome);
            }
            outcome
        }));
    }

    // fold finished submissions into the stats so the list stays short
    fn collect_finished(&mut self) {
        let mut pending = Vec::with_capacity(self.submissions.len());
        for mut submission in self.submissions.drain(..) {
            match (&mut submission).now_or_never() {
                Some(result) => {
                    let outcome = result
                        .unwrap_or_else(|error| SubmitOutcome::TransportFailed(error.to_string()));
                    self.stats.count(&outcome);
                }
                None => pending.push(submission),
            }
        }
        self.submissions = pending;
    }
}
