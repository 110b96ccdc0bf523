use {crate::*, base::Vec2};

/// A captured frame. Only its size matters to the session; the pixels are
/// the estimator's business.
pub trait VideoFrame {
    /// Width and height in the same units the estimator reports keypoints in.
    fn size(&self) -> Vec2<f32>;
}

/// Live camera stream.
#[allow(async_fn_in_trait)]
pub trait VideoSource {
    type Frame: VideoFrame;

    /// Wait for the next frame. `None` once the stream has stopped.
    async fn recv(&mut self) -> Option<Self::Frame>;
}

/// One detected hand as reported by the pose model.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    pub keypoints: Vec<Vec2<f32>>,
}

impl Hand {
    pub fn new(keypoints: Vec<Vec2<f32>>) -> Self {
        Self { keypoints }
    }
}

/// Hand-pose model.
#[allow(async_fn_in_trait)]
pub trait HandEstimator<F: VideoFrame> {
    /// Zero or more hands found in `frame`.
    async fn estimate_hands(&mut self, frame: &F) -> Result<Vec<Hand>, SessionError>;
}
