//! Hand-gesture classification and the cursor/scroll interaction state machine.
//!
//! Everything here is pure: a frame's keypoints and the previous
//! `InteractionState` go in, the next state and a `FrameOutcome` come out.

pub mod config;
pub use config::GestureConfig;

pub mod error;
pub use error::GestureError;

pub mod interactor;
pub use interactor::{
    Action, FrameInput, FrameOutcome, GestureKind, Indicator, ScrollDirection, step,
};

pub mod keypoint;
pub use keypoint::{HandLandmark, KEYPOINT_COUNT, KeypointFrame};

pub mod mapping;
pub use mapping::ScreenMapping;

pub mod shape;
pub use shape::{Gesture, HandShape, classify, classify_shape};

pub mod state;
pub use state::{InteractionState, Mode};
