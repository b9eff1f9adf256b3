// Simulation and timeline tuning constants.
//
// Everything the fireworks display and the reveal sequence need is fixed at
// compile time; these names keep the magic numbers out of the logic.

use std::time::Duration;

// Display
pub const BURST_COUNT: usize = 15;
pub const TRAIL_FADE_ALPHA: f64 = 0.15; // black overlay alpha repainted every frame

// Launch
pub const LAUNCH_OFFSET_BELOW: f32 = 10.0; // start this far below the bottom edge
pub const BURST_RADIUS_MIN: f32 = 2.0;
pub const BURST_RADIUS_SPAN: f32 = 2.0; // radius in [2, 4)
pub const ASCENT_SPEED_MIN: f32 = 5.0;
pub const ASCENT_SPEED_SPAN: f32 = 3.0; // speed in [5, 8) px per frame

// Color (HSL)
pub const BURST_SATURATION: f32 = 100.0;
pub const BURST_LIGHTNESS: f32 = 70.0;

// Explosion
pub const PARTICLES_PER_BURST: usize = 40;
pub const PARTICLE_LIFE: i32 = 50; // frames
pub const PARTICLE_SPEED_MIN: f32 = 2.0;
pub const PARTICLE_SPEED_SPAN: f32 = 5.0; // speed in [2, 7)
pub const PARTICLE_RADIUS: f64 = 2.0;
pub const VELOCITY_DECAY: f32 = 0.95; // per axis, per frame

// Reveal sequence offsets, measured from the detection trigger
pub const FLASH_ON_AT: Duration = Duration::from_millis(1000);
pub const FIREWORKS_AT: Duration = Duration::from_millis(4000);
pub const VIDEO_AT: Duration = Duration::from_millis(7000);
