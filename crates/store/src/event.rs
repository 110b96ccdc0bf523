use {
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// Identity of a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One logged gesture. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub id: u64,
    pub user_id: UserId,
    pub gesture: String,
    pub action: String,
    /// Milliseconds since the Unix epoch, stamped by the store.
    pub timestamp: u64,
}

impl fmt::Display for GestureEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → {} at {}",
            self.gesture,
            self.action,
            base::format_time_of_day(self.timestamp)
        )
    }
}
