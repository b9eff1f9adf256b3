pub mod burst;
pub mod color;
pub mod constants;
pub mod display;
pub mod surface;
pub mod timeline;

pub use burst::*;
pub use color::*;
pub use constants::*;
pub use display::*;
pub use surface::*;
pub use timeline::*;
