use {
    crate::*,
    base::*,
    std::sync::Arc,
    tokio::{
        sync::{mpsc, oneshot},
        task::JoinHandle,
    },
};

// capacity of the request channel
const CHANNEL_CAPACITY: usize = 64;

enum Request {
    Insert {
        identity: Option<UserId>,
        gesture: String,
        action: String,
        reply: oneshot::Sender<Result<GestureEvent, StoreError>>,
    },
    Recent {
        identity: Option<UserId>,
        reply: oneshot::Sender<Vec<GestureEvent>>,
    },
    Shutdown {
        reply: oneshot::Sender<()>,
    },
}

/// Worker task that owns the gesture table and serializes all access to it.
pub struct StoreServer {
    table: GestureTable,
    clock: Arc<dyn Clock>,
    receiver: mpsc::Receiver<Request>,
}

impl StoreServer {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(clock: Arc<dyn Clock>) -> (StoreHandle, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        let server = StoreServer {
            table: GestureTable::new(),
            clock,
            receiver,
        };
        let join_handle = tokio::spawn(server.run());
        (StoreHandle { sender }, join_handle)
    }

    async fn run(mut self) {
        log_info!("gesture store: started");
        while let Some(request) = self.receiver.recv().await {
            match request {
                Request::Insert {
                    identity,
                    gesture,
                    action,
                    reply,
                } => {
                    let result = match identity {
                        Some(user_id) => {
                            let event = self.table.insert(
                                user_id,
                                gesture,
                                action,
                                self.clock.now_ms(),
                            );
                            log_debug!("gesture store: inserted {} for {}", event.id, event.user_id);
                            Ok(event)
                        }
                        None => {
                            log_warn!("gesture store: rejected {} event, not authenticated", gesture);
                            Err(StoreError::NotAuthenticated)
                        }
                    };
                    // caller may have given up waiting
                    let _ = reply.send(result);
                }
                Request::Recent { identity, reply } => {
                    let events = match identity {
                        Some(user_id) => self.table.recent(&user_id, RECENT_LIMIT),
                        None => Vec::new(),
                    };
                    let _ = reply.send(events);
                }
                Request::Shutdown { reply } => {
                    let _ = reply.send(());
                    break;
                }
            }
        }
        log_info!("gesture store: stopped with {} events", self.table.len());
    }
}

/// Cheap, cloneable handle for talking to the store worker.
#[derive(Clone, Debug)]
pub struct StoreHandle {
    sender: mpsc::Sender<Request>,
}

impl StoreHandle {
    /// Insert an event for `identity`. Fails with `NotAuthenticated` when there is none.
    pub async fn insert(
        &self,
        identity: Option<UserId>,
        gesture: String,
        action: String,
    ) -> Result<GestureEvent, StoreError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Request::Insert {
                identity,
                gesture,
                action,
                reply,
            })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)?
    }

    /// Up to ten most recent events for `identity`, newest first; empty when signed out.
    pub async fn recent(&self, identity: Option<UserId>) -> Result<Vec<GestureEvent>, StoreError> {
        let (reply, response) = oneshot::channel();
        self.sender
            .send(Request::Recent { identity, reply })
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Closed)
    }

    /// Stop the worker. Later requests fail with `Closed`.
    pub async fn shutdown(&self) {
        let (reply, response) = oneshot::channel();
        if self.sender.send(Request::Shutdown { reply }).await.is_ok() {
            let _ = response.await;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
