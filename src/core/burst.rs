//! A single firework: a rising shell that bursts into a fan of fading sparks.
//!
//! The burst is a plain record; behaviour lives in the free functions below so
//! the display can drive many of them without any dispatch. Positions use
//! surface pixels with y growing downwards, so ascending means y decreases.

use super::constants::*;
use super::{Color, Surface};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left to live; the particle is dropped once this reaches 0.
    pub life: i32,
}

pub type Particles = SmallVec<[Particle; PARTICLES_PER_BURST]>;

#[derive(Clone, Debug)]
pub struct Burst {
    pub pos: Vec2,
    pub target_y: f32,
    pub radius: f32,
    pub speed: f32,
    pub color: Color,
    pub exploded: bool,
    pub particles: Particles,
}

impl Burst {
    /// Create a freshly randomized shell for a surface of the given size.
    pub fn new(size: (f64, f64), rng: &mut impl Rng) -> Self {
        let mut burst = Burst {
            pos: Vec2::ZERO,
            target_y: 0.0,
            radius: BURST_RADIUS_MIN,
            speed: ASCENT_SPEED_MIN,
            color: Color::hsl(0.0, BURST_SATURATION, BURST_LIGHTNESS),
            exploded: false,
            particles: SmallVec::new(),
        };
        reset_burst(&mut burst, size, rng);
        burst
    }

    /// Exploded with every spark burnt out. Such a burst stays inert.
    pub fn is_spent(&self) -> bool {
        self.exploded && self.particles.is_empty()
    }
}

pub fn reset_burst(burst: &mut Burst, (width, height): (f64, f64), rng: &mut impl Rng) {
    let (width, height) = (width as f32, height as f32);
    burst.pos = Vec2::new(
        rng.gen::<f32>() * width,
        height + LAUNCH_OFFSET_BELOW,
    );
    burst.target_y = rng.gen::<f32>() * height / 2.0;
    burst.radius = BURST_RADIUS_MIN + rng.gen::<f32>() * BURST_RADIUS_SPAN;
    burst.speed = ASCENT_SPEED_MIN + rng.gen::<f32>() * ASCENT_SPEED_SPAN;
    burst.color = Color::hsl(
        rng.gen::<f32>() * 360.0,
        BURST_SATURATION,
        BURST_LIGHTNESS,
    );
    burst.exploded = false;
    burst.particles.clear();
}

/// Advance one frame. The rng is only consumed on the frame the shell bursts.
pub fn update_burst(burst: &mut Burst, rng: &mut impl Rng) {
    if !burst.exploded {
        burst.pos.y -= burst.speed;
        if burst.pos.y <= burst.target_y {
            explode_burst(burst, rng);
        }
        return;
    }

    for p in burst.particles.iter_mut() {
        p.pos += p.vel;
        p.vel *= VELOCITY_DECAY;
        p.life -= 1;
    }
    burst.particles.retain(|p| p.life > 0);
}

/// Turn the shell into sparks. Only the first call has any effect.
pub fn explode_burst(burst: &mut Burst, rng: &mut impl Rng) {
    if burst.exploded {
        return;
    }
    burst.exploded = true;
    let origin = burst.pos;
    burst.particles.extend((0..PARTICLES_PER_BURST).map(|_| {
        let angle = rng.gen::<f32>() * TAU;
        let speed = PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN;
        Particle {
            pos: origin,
            vel: Vec2::from_angle(angle) * speed,
            life: PARTICLE_LIFE,
        }
    }));
    log::debug!(
        "burst exploded at ({:.1}, {:.1}) color={}",
        origin.x,
        origin.y,
        burst.color
    );
}

pub fn draw_burst(burst: &Burst, surface: &mut impl Surface) {
    if !burst.exploded {
        surface.set_fill(burst.color);
        surface.fill_circle(
            burst.pos.x as f64,
            burst.pos.y as f64,
            burst.radius as f64,
        );
        return;
    }

    for p in &burst.particles {
        surface.set_fill(burst.color);
        surface.set_global_alpha(p.life as f64 / PARTICLE_LIFE as f64);
        surface.fill_circle(p.pos.x as f64, p.pos.y as f64, PARTICLE_RADIUS);
        surface.set_global_alpha(1.0);
    }
}
