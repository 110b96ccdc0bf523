//! Gesture event log: an in-memory table keyed by user, owned by a worker
//! task, and an authenticated client that implements `EventSink`.

pub mod client;
pub use client::{EventSink, StoreClient, SubmitOutcome};

pub mod error;
pub use error::StoreError;

pub mod event;
pub use event::{GestureEvent, UserId};

pub mod server;
pub use server::{StoreHandle, StoreServer};

pub mod table;
pub use table::{GestureTable, RECENT_LIMIT};
