use {
    base::*,
    serde::Deserialize,
    session::{Hand, HandEstimator, SessionError, VideoFrame, VideoSource},
    std::{collections::VecDeque, fs, path::Path},
};

/// A recorded keypoint session.
#[derive(Debug, Deserialize)]
pub struct Script {
    pub frame: [f32; 2],
    pub viewport: [f32; 2],
    #[serde(default = "default_clickable")]
    pub clickable: bool,
    pub frames: Vec<ScriptFrame>,
}

fn default_clickable() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptFrame {
    /// Wall-clock time of the frame in milliseconds.
    pub t: u64,
    #[serde(default)]
    pub hand: Option<Vec<[f32; 2]>>,
    /// Simulated model failure for this frame.
    #[serde(default)]
    pub error: Option<String>,
}

impl Script {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn frame_size(&self) -> Vec2<f32> {
        Vec2::new(self.frame[0], self.frame[1])
    }

    pub fn viewport_size(&self) -> Vec2<f32> {
        Vec2::new(self.viewport[0], self.viewport[1])
    }
}

pub struct ReplayFrame {
    size: Vec2<f32>,
    script: ScriptFrame,
}

impl VideoFrame for ReplayFrame {
    fn size(&self) -> Vec2<f32> {
        self.size
    }
}

/// Plays the script back, moving the clock to each frame's time.
pub struct ReplayVideo {
    size: Vec2<f32>,
    frames: VecDeque<ScriptFrame>,
    clock: ManualClock,
}

impl ReplayVideo {
    pub fn new(script: &Script, clock: ManualClock) -> Self {
        Self {
            size: script.frame_size(),
            frames: script.frames.iter().cloned().collect(),
            clock,
        }
    }
}

impl VideoSource for ReplayVideo {
    type Frame = ReplayFrame;

    async fn recv(&mut self) -> Option<ReplayFrame> {
        let script = self.frames.pop_front()?;
        self.clock.set(script.t);
        Some(ReplayFrame {
            size: self.size,
            script,
        })
    }
}

/// Reports whatever hand the script recorded for the frame.
pub struct ReplayEstimator;

impl HandEstimator<ReplayFrame> for ReplayEstimator {
    async fn estimate_hands(&mut self, frame: &ReplayFrame) -> Result<Vec<Hand>, SessionError> {
        if let Some(error) = &frame.script.error {
            return Err(SessionError::Inference(error.clone()));
        }
        Ok(frame
            .script
            .hand
            .iter()
            .map(|points| Hand::new(points.iter().map(|[x, y]| Vec2::new(*x, *y)).collect()))
            .collect())
    }
}
