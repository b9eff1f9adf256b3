//! Timed cue list for the reveal that follows a face detection.
//!
//! The timeline knows nothing about the DOM or the display; it only answers
//! "which cues are due by now". Whoever owns the timer feeds it the elapsed
//! time since the trigger and acts on what comes back.

use super::constants::{FIREWORKS_AT, FLASH_ON_AT, VIDEO_AT};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    FlashOn,
    FlashOff,
    FadeOutCamera,
    StartFireworks,
    FadeOutFireworks,
    StopFireworks,
    PlayVideo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Offset from the trigger at which the cue becomes due.
    pub at: Duration,
    pub cue: Cue,
}

impl Step {
    pub const fn new(at: Duration, cue: Cue) -> Self {
        Self { at, cue }
    }
}

#[derive(Clone, Debug)]
pub struct Timeline {
    steps: Vec<Step>,
    next: usize,
}

impl Timeline {
    /// Build a timeline; steps sharing an offset keep their given order.
    pub fn new(mut steps: Vec<Step>) -> Self {
        steps.sort_by_key(|s| s.at);
        Self { steps, next: 0 }
    }

    /// Flash, then fireworks over the fading camera, then the video.
    pub fn reveal() -> Self {
        Self::new(vec![
            Step::new(FLASH_ON_AT, Cue::FlashOn),
            Step::new(FIREWORKS_AT, Cue::FlashOff),
            Step::new(FIREWORKS_AT, Cue::FadeOutCamera),
            Step::new(FIREWORKS_AT, Cue::StartFireworks),
            Step::new(VIDEO_AT, Cue::FadeOutFireworks),
            Step::new(VIDEO_AT, Cue::StopFireworks),
            Step::new(VIDEO_AT, Cue::PlayVideo),
        ])
    }

    /// Every not-yet-fired cue due at or before `elapsed`, in order.
    pub fn advance(&mut self, elapsed: Duration) -> impl Iterator<Item = Cue> + '_ {
        let start = self.next;
        while self.next < self.steps.len() && self.steps[self.next].at <= elapsed {
            self.next += 1;
        }
        self.steps[start..self.next].iter().map(|s| s.cue)
    }

    /// Offset of the next cue still to fire.
    pub fn next_due(&self) -> Option<Duration> {
        self.steps.get(self.next).map(|s| s.at)
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}
