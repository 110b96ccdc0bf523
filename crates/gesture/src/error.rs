use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GestureError {
    KeypointCount { expected: usize, got: usize },
    LandmarkIndex(usize),
    InvalidDimensions(String),
    InvalidConfig(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::KeypointCount { expected, got } => {
                write!(f, "keypoint count error: expected {expected}, got {got}")
            }
            GestureError::LandmarkIndex(index) => {
                write!(f, "landmark index error: {index} is not in 0..21")
            }
            GestureError::InvalidDimensions(msg) => write!(f, "invalid dimensions: {msg}"),
            GestureError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {}
