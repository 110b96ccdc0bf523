use {crate::*, serde::Deserialize};

/// Thresholds for the interactor.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    mode_switch_cooldown_ms: u64,
    click_cooldown_ms: u64,
    click_threshold_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            mode_switch_cooldown_ms: 1000,
            click_cooldown_ms: 500,
            click_threshold_px: 50.0,
        }
    }
}

impl GestureConfig {
    /// Minimum time since the last accepted action before a full hand toggles the mode.
    pub fn with_mode_switch_cooldown_ms(mut self, ms: u64) -> Self {
        self.mode_switch_cooldown_ms = ms;
        self
    }

    /// Minimum time since the last accepted action before a point move clicks.
    pub fn with_click_cooldown_ms(mut self, ms: u64) -> Self {
        self.click_cooldown_ms = ms;
        self
    }

    /// Pointer displacement, in screen pixels, that must be exceeded to click.
    pub fn with_click_threshold_px(mut self, px: f32) -> Self {
        self.click_threshold_px = px;
        self
    }

    pub fn validate(&self) -> Result<(), GestureError> {
        if !self.click_threshold_px.is_finite() || self.click_threshold_px < 0.0 {
            return Err(GestureError::InvalidConfig(format!(
                "click threshold must be a non-negative number, got {}",
                self.click_threshold_px
            )));
        }
        Ok(())
    }

    // Getters
    pub fn mode_switch_cooldown_ms(&self) -> u64 {
        self.mode_switch_cooldown_ms
    }

    pub fn click_cooldown_ms(&self) -> u64 {
        self.click_cooldown_ms
    }

    pub fn click_threshold_px(&self) -> f32 {
        self.click_threshold_px
    }
}
