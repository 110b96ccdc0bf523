use {
    crate::*,
    base::*,
    std::{
        fmt,
        future::Future,
        sync::{Arc, Mutex},
    },
};

/// Result of handing one gesture event to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded,
    AuthFailed,
    TransportFailed(String),
}

impl fmt::Display for SubmitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitOutcome::Succeeded => write!(f, "succeeded"),
            SubmitOutcome::AuthFailed => write!(f, "authentication failed"),
            SubmitOutcome::TransportFailed(msg) => write!(f, "transport failed: {msg}"),
        }
    }
}

impl From<Result<GestureEvent, StoreError>> for SubmitOutcome {
    fn from(result: Result<GestureEvent, StoreError>) -> Self {
        match result {
            Ok(_) => SubmitOutcome::Succeeded,
            Err(StoreError::NotAuthenticated) => SubmitOutcome::AuthFailed,
            Err(error) => SubmitOutcome::TransportFailed(error.to_string()),
        }
    }
}

/// Where recognized gestures are logged.
///
/// Implementations are cloned into spawned tasks, so the returned futures
/// must be `Send`.
pub trait EventSink: Clone + Send + Sync + 'static {
    /// Record one event for the current identity. Never retried.
    fn record_gesture(
        &self,
        gesture: String,
        action: String,
    ) -> impl Future<Output = SubmitOutcome> + Send;

    /// Up to ten events for the current identity, newest first; empty when signed out.
    fn fetch_recent_gestures(
        &self,
    ) -> impl Future<Output = Result<Vec<GestureEvent>, StoreError>> + Send;
}

/// Store access on behalf of whoever is signed in. Clones share the sign-in state.
#[derive(Clone, Debug)]
pub struct StoreClient {
    handle: StoreHandle,
    identity: Arc<Mutex<Option<UserId>>>,
}

impl StoreClient {
    pub fn new(handle: StoreHandle) -> Self {
        Self {
            handle,
            identity: Arc::new(Mutex::new(None)),
        }
    }

    pub fn sign_in(&self, user_id: UserId) {
        log_info!("signed in as {}", user_id);
        *self.identity.lock().unwrap_or_else(|e| e.into_inner()) = Some(user_id);
    }

    pub fn sign_out(&self) {
        if let Some(user_id) = self
            .identity
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .take()
        {
            log_info!("signed out {}", user_id);
        }
    }

    pub fn identity(&self) -> Option<UserId> {
        self.identity
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }
}

impl EventSink for StoreClient {
    async fn record_gesture(&self, gesture: String, action: String) -> SubmitOutcome {
        let outcome = SubmitOutcome::from(self.handle.insert(self.identity(), gesture, action).await);
        if let SubmitOutcome::TransportFailed(ref msg) = outcome {
            log_error!("failed to record gesture: {}", msg);
        }
        outcome
    }

    async fn fetch_recent_gestures(&self) -> Result<Vec<GestureEvent>, StoreError> {
        self.handle.recent(self.identity()).await
    }
}
