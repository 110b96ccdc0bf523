use std::fmt;

#[derive(Debug)]
pub enum SessionError {
    Inference(String),
    Video(String),
    Gesture(gesture::GestureError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Inference(msg) => write!(f, "inference error: {msg}"),
            SessionError::Video(msg) => write!(f, "video error: {msg}"),
            SessionError::Gesture(err) => write!(f, "gesture error: {err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<gesture::GestureError> for SessionError {
    fn from(err: gesture::GestureError) -> Self {
        SessionError::Gesture(err)
    }
}
