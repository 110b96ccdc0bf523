use {crate::*, base::Vec2};

/// Maps image-space keypoints to viewport coordinates, mirrored in x so the
/// pointer follows the hand as seen in a selfie view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    frame: Vec2<f32>,
    viewport: Vec2<f32>,
}

impl ScreenMapping {
    pub fn new(frame: Vec2<f32>, viewport: Vec2<f32>) -> Result<Self, GestureError> {
        if !(frame.x > 0.0 && frame.y > 0.0 && frame.is_finite()) {
            return Err(GestureError::InvalidDimensions(format!(
                "frame size {frame} must be positive"
            )));
        }
        if !(viewport.x >= 0.0 && viewport.y >= 0.0 && viewport.is_finite()) {
            return Err(GestureError::InvalidDimensions(format!(
                "viewport size {viewport} must not be negative"
            )));
        }
        Ok(Self { frame, viewport })
    }

    pub fn frame(&self) -> Vec2<f32> {
        self.frame
    }

    pub fn viewport(&self) -> Vec2<f32> {
        self.viewport
    }

    pub fn to_screen(&self, point: Vec2<f32>) -> Vec2<f32> {
        Vec2::new(
            (1.0 - point.x / self.frame.x) * self.viewport.x,
            point.y / self.frame.y * self.viewport.y,
        )
    }
}
