use super::Color;

/// A 2D render target with canvas-like immediate-mode drawing.
///
/// Implementations are expected to be infallible from the caller's point of
/// view: the simulation never inspects a drawing result.
pub trait Surface {
    /// Current backing size in surface pixels, `(width, height)`.
    fn size(&self) -> (f64, f64);
    fn set_fill(&mut self, color: Color);
    /// Opacity multiplier applied to subsequent fills, in \[0, 1\].
    fn set_global_alpha(&mut self, alpha: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    /// Filled disc centred on `(x, y)`.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    /// Erase everything back to fully transparent.
    fn clear(&mut self);
}

/// Opaque id of a pending "before next repaint" callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host hook for scheduling the next animation frame.
///
/// `request_frame` arranges for the host to call back into the display once
/// before the next repaint and returns `None` if no callback could be
/// scheduled. `cancel_frame` withdraws a request that has not run yet.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}
