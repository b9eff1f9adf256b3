// Test doubles standing in for the canvas and requestAnimationFrame.

#![allow(dead_code)]

use face_fireworks::core::{Color, FrameHandle, FrameScheduler, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Fill(Color),
    Alpha(f64),
    Rect(f64, f64, f64, f64),
    Circle(f64, f64, f64),
    Clear,
}

/// Surface that records every call instead of drawing.
#[derive(Debug)]
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            calls: Vec::new(),
        }
    }

    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle(..)))
            .count()
    }

    pub fn last_is_clear(&self) -> bool {
        matches!(self.calls.last(), Some(DrawCall::Clear))
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn set_fill(&mut self, color: Color) {
        self.calls.push(DrawCall::Fill(color));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.calls.push(DrawCall::Alpha(alpha));
    }
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.calls.push(DrawCall::Rect(x, y, width, height));
    }
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.calls.push(DrawCall::Circle(x, y, radius));
    }
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }
}

/// Frame scheduler driven by hand: logs every request and cancellation so
/// tests can assert on loop ownership. Firing a frame means calling
/// `Display::frame` directly.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: i32,
    /// While set, every request is refused, as when the host throws.
    pub refuse: bool,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
}

impl ManualFrames {
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::default()
        }
    }

    pub fn last_requested(&self) -> Option<FrameHandle> {
        self.requested.last().copied()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
