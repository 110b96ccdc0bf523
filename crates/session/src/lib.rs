//! Per-frame detection loop: camera frames in, hand keypoints from the pose
//! model, gestures applied to the page, gesture events out to the store.

pub mod config;
pub use config::SessionConfig;

pub mod error;
pub use error::SessionError;

pub mod session;
pub use session::{DetectionSession, FrameReport, SessionHandle, SessionStats};

pub mod source;
pub use source::{Hand, HandEstimator, VideoFrame, VideoSource};

pub mod surface;
pub use surface::Surface;
