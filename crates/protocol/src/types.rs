use serde::{Deserialize, Serialize};

/// A point in chart data coordinates (x in microseconds, y in row units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner (smallest `x`
/// and `y`), with non-negative width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}

/// Linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// `#rrggbb` form, ignoring alpha.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(channel_to_u8);
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_8bit_channels() {
        assert_eq!(Color::rgb8(0x1f, 0x77, 0xb4).to_hex(), "#1f77b4");
        assert_eq!(Color::rgb8(0xff, 0x00, 0x00).to_hex(), "#ff0000");
    }

    #[test]
    fn hex_clamps_out_of_range() {
        let c = Color {
            r: 1.5,
            g: -0.2,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(c.to_hex(), "#ff0000");
    }

    #[test]
    fn hex_ignores_alpha() {
        let c = Color {
            a: 0.6,
            ..Color::rgb8(10, 20, 30)
        };
        assert_eq!(c.to_hex(), "#0a141e");
    }

    #[test]
    fn rect_edges() {
        let r = Rect::new(5.0, -1.05, 10.0, 2.1);
        assert!((r.right() - 15.0).abs() < f64::EPSILON);
        assert!((r.bottom() - 1.05).abs() < 1e-12);
    }
}
