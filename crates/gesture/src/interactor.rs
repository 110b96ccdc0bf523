use {crate::*, base::Vec2, std::fmt};

/// Kind of event written to the gesture log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureKind {
    ModeSwitch,
    Scroll,
    Click,
}

impl GestureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GestureKind::ModeSwitch => "mode_switch",
            GestureKind::Scroll => "scroll",
            GestureKind::Click => "click",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Positive displacement (pointer moved down the screen) scrolls down.
    pub fn from_dy(dy: f32) -> Self {
        if dy > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollDirection::Up => "up",
            ScrollDirection::Down => "down",
        }
    }
}

/// An accepted interaction. At most one per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ModeSwitch { to: Mode },
    Scroll { dy: f32, direction: ScrollDirection },
    Click { at: Vec2<f32> },
}

impl Action {
    pub fn kind(&self) -> GestureKind {
        match self {
            Action::ModeSwitch { .. } => GestureKind::ModeSwitch,
            Action::Scroll { .. } => GestureKind::Scroll,
            Action::Click { .. } => GestureKind::Click,
        }
    }

    /// Human-readable action text stored with the event.
    pub fn description(&self) -> String {
        match self {
            Action::ModeSwitch { to } => format!("switched_to_{}_mode", to),
            Action::Scroll { direction, .. } => format!("scrolled_{}", direction.as_str()),
            Action::Click { at } => {
                format!("clicked_at_{},{}", round_half_up(at.x), round_half_up(at.y))
            }
        }
    }
}

// halves round toward positive infinity
fn round_half_up(value: f32) -> i64 {
    (value + 0.5).floor() as i64
}

/// How the on-screen pointer should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indicator {
    #[default]
    Idle,
    Pointing,
    Grabbing,
}

impl Indicator {
    fn of(shape: HandShape) -> Self {
        if shape.grabbing {
            Indicator::Grabbing
        } else if shape.pointing {
            Indicator::Pointing
        } else {
            Indicator::Idle
        }
    }
}

/// Per-frame input to `step`.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub hand: Option<&'a KeypointFrame>,
    pub now_ms: u64,
    pub mapping: ScreenMapping,
}

/// What `step` decided for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    pub gesture: Gesture,
    /// Screen position of the index fingertip, if a hand was present.
    pub pointer: Option<Vec2<f32>>,
    pub indicator: Indicator,
    /// Mode after this frame.
    pub mode: Mode,
    pub action: Option<Action>,
}

/// Advance the interaction by one frame.
///
/// Pure: the returned state replaces `state`, and the caller performs the
/// outcome's side effects (pointer move, scroll, activation, event log).
pub fn step(
    config: &GestureConfig,
    mut state: InteractionState,
    input: FrameInput<'_>,
) -> (InteractionState, FrameOutcome) {
    let Some(hand) = input.hand else {
        return (
            state,
            FrameOutcome {
                gesture: Gesture::None,
                pointer: None,
                indicator: Indicator::Idle,
                mode: state.mode,
                action: None,
            },
        );
    };

    let shape = HandShape::of(hand);
    let gesture = classify_shape(shape, state.mode);
    let position = input
        .mapping
        .to_screen(hand.point(HandLandmark::IndexTip));

    let action = match gesture {
        Gesture::FullHand => {
            if state.cooled_down(input.now_ms, config.mode_switch_cooldown_ms()) {
                state.last_action_ms = Some(input.now_ms);
                state.mode = state.mode.toggled();
                Some(Action::ModeSwitch { to: state.mode })
            } else {
                None
            }
        }
        Gesture::Grab => {
            let dy = position.y - state.last_position.y;
            Some(Action::Scroll {
                dy,
                direction: ScrollDirection::from_dy(dy),
            })
        }
        Gesture::Point => {
            let displacement = position.distance_to(state.last_position);
            if displacement > config.click_threshold_px()
                && state.cooled_down(input.now_ms, config.click_cooldown_ms())
            {
                state.last_action_ms = Some(input.now_ms);
                Some(Action::Click { at: position })
            } else {
                None
            }
        }
        Gesture::None => None,
    };

    state.last_position = position;

    (
        state,
        FrameOutcome {
            gesture,
            pointer: Some(position),
            indicator: Indicator::of(shape),
            mode: state.mode,
            action,
        },
    )
}
