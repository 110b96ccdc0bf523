use gesture::GestureConfig;

/// Configuration for a detection session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    gesture: GestureConfig,
    quiet: bool,
}

impl SessionConfig {
    /// Set the interactor thresholds.
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Suppress on-screen notifications for mode switches and clicks.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    // Getters
    pub fn gesture(&self) -> &GestureConfig {
        &self.gesture
    }

    pub fn quiet(&self) -> bool {
        self.quiet
    }
}
