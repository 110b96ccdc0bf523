use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotAuthenticated,
    Closed,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotAuthenticated => write!(f, "not authenticated"),
            StoreError::Closed => write!(f, "store closed"),
        }
    }
}

impl std::error::Error for StoreError {}
