use {
    base::Vec2,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// How `point` and `grab` shapes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Cursor,
    Scroll,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Cursor => Mode::Scroll,
            Mode::Scroll => Mode::Cursor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Cursor => "cursor",
            Mode::Scroll => "scroll",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the interactor remembers between frames.
///
/// `last_action_ms` is shared by mode switches and clicks, so a mode switch
/// also delays the next click and vice versa. `None` until the first action
/// of the session, which passes either cooldown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pub mode: Mode,
    pub last_position: Vec2<f32>,
    pub last_action_ms: Option<u64>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when more than `cooldown_ms` has passed since the last accepted action.
    pub fn cooled_down(&self, now_ms: u64, cooldown_ms: u64) -> bool {
        match self.last_action_ms {
            Some(last) => now_ms.saturating_sub(last) > cooldown_ms,
            None => true,
        }
    }
}
