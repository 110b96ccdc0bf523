use {
    crate::*,
    std::collections::HashMap,
};

/// Number of events returned by a recent-gestures query.
pub const RECENT_LIMIT: usize = 10;

/// In-memory gesture table with a per-user index.
#[derive(Debug, Default)]
pub struct GestureTable {
    rows: Vec<GestureEvent>,
    // row positions per user, in insertion order
    by_user: HashMap<UserId, Vec<usize>>,
    next_id: u64,
}

impl GestureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn insert(
        &mut self,
        user_id: UserId,
        gesture: String,
        action: String,
        timestamp: u64,
    ) -> GestureEvent {
        self.next_id += 1;
        let event = GestureEvent {
            id: self.next_id,
            user_id,
            gesture,
            action,
            timestamp,
        };
        self.by_user
            .entry(event.user_id.clone())
            .or_default()
            .push(self.rows.len());
        self.rows.push(event.clone());
        event
    }

    /// Up to `limit` events for `user_id`, newest first.
    pub fn recent(&self, user_id: &UserId, limit: usize) -> Vec<GestureEvent> {
        match self.by_user.get(user_id) {
            Some(positions) => positions
                .iter()
                .rev()
                .take(limit)
                .map(|&position| self.rows[position].clone())
                .collect(),
            None => Vec::new(),
        }
    }
}
