use {crate::*, std::fmt};

/// Raw finger-pose flags for one frame. More than one may be set; `classify`
/// resolves them by priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandShape {
    pub pointing: bool,
    pub grabbing: bool,
    pub full_hand: bool,
}

impl HandShape {
    pub fn of(frame: &KeypointFrame) -> Self {
        use HandLandmark::*;

        let pointing = frame.is_raised(IndexTip) && frame.is_lowered(MiddleTip);
        let grabbing = frame.is_raised(ThumbTip)
            && frame.is_raised(IndexTip)
            && frame.is_raised(MiddleTip)
            && frame.is_lowered(RingTip)
            && frame.is_lowered(PinkyTip);
        let full_hand = HandLandmark::FINGERTIPS
            .iter()
            .all(|&tip| frame.is_raised(tip));

        Self {
            pointing,
            grabbing,
            full_hand,
        }
    }
}

/// The gesture that wins for a frame, given the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    FullHand,
    Grab,
    Point,
    None,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::FullHand => "full-hand",
            Gesture::Grab => "grab",
            Gesture::Point => "point",
            Gesture::None => "none",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority: full hand, then grab (scroll mode only), then point (cursor mode only).
pub fn classify(frame: Option<&KeypointFrame>, mode: Mode) -> Gesture {
    match frame {
        Some(frame) => classify_shape(HandShape::of(frame), mode),
        None => Gesture::None,
    }
}

pub fn classify_shape(shape: HandShape, mode: Mode) -> Gesture {
    if shape.full_hand {
        Gesture::FullHand
    } else if shape.grabbing && mode == Mode::Scroll {
        Gesture::Grab
    } else if shape.pointing && mode == Mode::Cursor {
        Gesture::Point
    } else {
        Gesture::None
    }
}
