use {
    base::Vec2,
    gesture::{Indicator, Mode},
};

/// The page the pointer lives on.
pub trait Surface {
    /// Current viewport size in screen pixels.
    fn viewport(&self) -> Vec2<f32>;

    /// Draw the pointer at `position`.
    fn move_pointer(&mut self, position: Vec2<f32>, indicator: Indicator, mode: Mode);

    /// Scroll the page vertically by `dy` pixels.
    fn scroll_by(&mut self, dy: f32);

    /// Activate the topmost interactive element at `position`.
    /// Returns false when there is nothing to activate.
    fn activate_at(&mut self, position: Vec2<f32>) -> bool;

    /// Show a short transient message.
    fn notify(&mut self, message: &str);
}
