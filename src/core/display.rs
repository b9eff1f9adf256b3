use super::burst::{draw_burst, update_burst, Burst};
use super::constants::TRAIL_FADE_ALPHA;
use super::{Color, FrameHandle, FrameScheduler, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TRAIL_FADE: Color = Color::rgba(0, 0, 0, TRAIL_FADE_ALPHA as f32);

/// Owns a batch of bursts and animates them on a surface, one pass per
/// display refresh, until stopped.
///
/// The host calls [`Display::frame`] whenever a frame requested through the
/// [`FrameScheduler`] comes due. Each frame repaints the surface with a
/// translucent black veil (leaving motion trails), then updates and draws
/// every burst in insertion order, then requests the next frame.
pub struct Display<S: Surface, F: FrameScheduler> {
    surface: S,
    frames: F,
    rng: StdRng,
    bursts: Vec<Burst>,
    running: bool,
    pending: Option<FrameHandle>,
    frame_count: u64,
}

impl<S: Surface, F: FrameScheduler> Display<S, F> {
    pub fn new(surface: S, frames: F) -> Self {
        Self::with_rng(surface, frames, StdRng::from_entropy())
    }

    /// Deterministic variant, used wherever runs must be reproducible.
    pub fn with_seed(surface: S, frames: F, seed: u64) -> Self {
        Self::with_rng(surface, frames, StdRng::seed_from_u64(seed))
    }

    fn with_rng(surface: S, frames: F, rng: StdRng) -> Self {
        Self {
            surface,
            frames,
            rng,
            bursts: Vec::new(),
            running: false,
            pending: None,
            frame_count: 0,
        }
    }

    /// Launch `count` fresh bursts and start animating. Ignored while running.
    pub fn start_display(&mut self, count: usize) {
        if self.running {
            log::debug!("start_display ignored: display already running");
            return;
        }
        let size = self.surface.size();
        self.bursts = (0..count)
            .map(|_| Burst::new(size, &mut self.rng))
            .collect();
        self.running = true;
        self.frame_count = 0;
        log::info!(
            "fireworks started: {} bursts on {:.0}x{:.0}",
            count,
            size.0,
            size.1
        );
        self.frame();
    }

    /// Cancel the pending frame, drop every burst and wipe the surface.
    /// Safe to call at any time.
    pub fn stop_display(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.frames.cancel_frame(handle);
        }
        if self.running {
            log::info!("fireworks stopped after {} frames", self.frame_count);
        }
        self.running = false;
        self.bursts.clear();
        self.surface.clear();
    }

    /// Run one animation pass and schedule the next. A callback that still
    /// fires after `stop_display` does nothing. If the host refuses to
    /// schedule another frame the display falls back to idle, so a later
    /// `start_display` can launch a new loop.
    pub fn frame(&mut self) {
        if !self.running {
            return;
        }
        // the request that brought us here has been consumed
        self.pending = None;

        let (width, height) = self.surface.size();
        self.surface.set_fill(TRAIL_FADE);
        self.surface.fill_rect(0.0, 0.0, width, height);

        for burst in self.bursts.iter_mut() {
            update_burst(burst, &mut self.rng);
            draw_burst(burst, &mut self.surface);
        }

        self.frame_count += 1;
        self.pending = self.frames.request_frame();
        if self.pending.is_none() {
            log::error!(
                "next frame could not be scheduled; halting after {} frames",
                self.frame_count
            );
            self.running = false;
            self.bursts.clear();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn bursts(&self) -> &[Burst] {
        &self.bursts
    }

    pub fn bursts_mut(&mut self) -> &mut [Burst] {
        &mut self.bursts
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn frames(&self) -> &F {
        &self.frames
    }
}
