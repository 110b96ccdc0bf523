use {crate::*, base::Vec2};

/// Number of keypoints the hand model reports per hand.
pub const KEYPOINT_COUNT: usize = 21;

/// Anatomical role of each keypoint, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const ALL: [HandLandmark; KEYPOINT_COUNT] = [
        HandLandmark::Wrist,
        HandLandmark::ThumbCmc,
        HandLandmark::ThumbMcp,
        HandLandmark::ThumbIp,
        HandLandmark::ThumbTip,
        HandLandmark::IndexMcp,
        HandLandmark::IndexPip,
        HandLandmark::IndexDip,
        HandLandmark::IndexTip,
        HandLandmark::MiddleMcp,
        HandLandmark::MiddlePip,
        HandLandmark::MiddleDip,
        HandLandmark::MiddleTip,
        HandLandmark::RingMcp,
        HandLandmark::RingPip,
        HandLandmark::RingDip,
        HandLandmark::RingTip,
        HandLandmark::PinkyMcp,
        HandLandmark::PinkyPip,
        HandLandmark::PinkyDip,
        HandLandmark::PinkyTip,
    ];

    /// The five fingertips, thumb first.
    pub const FINGERTIPS: [HandLandmark; 5] = [
        HandLandmark::ThumbTip,
        HandLandmark::IndexTip,
        HandLandmark::MiddleTip,
        HandLandmark::RingTip,
        HandLandmark::PinkyTip,
    ];

    /// Reference height for "raised" vs "lowered" comparisons.
    pub const REFERENCE: HandLandmark = HandLandmark::IndexMcp;
}

impl From<HandLandmark> for usize {
    fn from(landmark: HandLandmark) -> usize {
        landmark as usize
    }
}

impl TryFrom<usize> for HandLandmark {
    type Error = GestureError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        HandLandmark::ALL
            .get(value)
            .copied()
            .ok_or(GestureError::LandmarkIndex(value))
    }
}

/// One hand's 21 keypoints in image space for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeypointFrame {
    points: [Vec2<f32>; KEYPOINT_COUNT],
}

impl KeypointFrame {
    pub fn new(points: [Vec2<f32>; KEYPOINT_COUNT]) -> Self {
        Self { points }
    }

    pub fn from_points(points: &[Vec2<f32>]) -> Result<Self, GestureError> {
        let points: [Vec2<f32>; KEYPOINT_COUNT] =
            points
                .try_into()
                .map_err(|_| GestureError::KeypointCount {
                    expected: KEYPOINT_COUNT,
                    got: points.len(),
                })?;
        Ok(Self { points })
    }

    pub fn point(&self, landmark: HandLandmark) -> Vec2<f32> {
        self.points[usize::from(landmark)]
    }

    pub fn points(&self) -> &[Vec2<f32>; KEYPOINT_COUNT] {
        &self.points
    }

    /// Strictly above the index base (smaller y).
    pub fn is_raised(&self, landmark: HandLandmark) -> bool {
        self.point(landmark).y < self.point(HandLandmark::REFERENCE).y
    }

    /// Strictly below the index base (larger y).
    pub fn is_lowered(&self, landmark: HandLandmark) -> bool {
        self.point(landmark).y > self.point(HandLandmark::REFERENCE).y
    }
}

impl TryFrom<&[Vec2<f32>]> for KeypointFrame {
    type Error = GestureError;

    fn try_from(points: &[Vec2<f32>]) -> Result<Self, Self::Error> {
        KeypointFrame::from_points(points)
    }
}
