//! Fill colors understood by a render surface. Canvas 2D takes CSS color
//! strings, so each variant formats as one through `fmt::Display`.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Hsl {
        hue: f32,
        saturation: f32,
        lightness: f32,
    },
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        a: f32,
    },
}

impl Color {
    pub const fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color {
        Color::Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Color {
        Color::Rgba { r, g, b, a }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({}, {}%, {}%)", hue, saturation, lightness),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({},{},{},{})", r, g, b, a),
        }
    }
}
