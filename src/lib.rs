//! Face-triggered fireworks reveal.
//!
//! `core` holds the platform-free simulation (bursts, the frame-driven
//! display, the reveal timeline) and builds on any target. The remaining
//! modules are the browser shell and only exist on `wasm32`.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod camera;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod detect;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod sequence;

#[cfg(target_arch = "wasm32")]
pub use app::start;
