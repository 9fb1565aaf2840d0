//! Categorical palettes and position-based sampling.

use swimlane_protocol::Color;

/// Tableau "tab20": ten hues, each as a dark/light pair.
pub const TAB20: [Color; 20] = [
    Color::rgb8(0x1f, 0x77, 0xb4),
    Color::rgb8(0xae, 0xc7, 0xe8),
    Color::rgb8(0xff, 0x7f, 0x0e),
    Color::rgb8(0xff, 0xbb, 0x78),
    Color::rgb8(0x2c, 0xa0, 0x2c),
    Color::rgb8(0x98, 0xdf, 0x8a),
    Color::rgb8(0xd6, 0x27, 0x28),
    Color::rgb8(0xff, 0x98, 0x96),
    Color::rgb8(0x94, 0x67, 0xbd),
    Color::rgb8(0xc5, 0xb0, 0xd5),
    Color::rgb8(0x8c, 0x56, 0x4b),
    Color::rgb8(0xc4, 0x9c, 0x94),
    Color::rgb8(0xe3, 0x77, 0xc2),
    Color::rgb8(0xf7, 0xb6, 0xd2),
    Color::rgb8(0x7f, 0x7f, 0x7f),
    Color::rgb8(0xc7, 0xc7, 0xc7),
    Color::rgb8(0xbc, 0xbd, 0x22),
    Color::rgb8(0xdb, 0xdb, 0x8d),
    Color::rgb8(0x17, 0xbe, 0xcf),
    Color::rgb8(0x9e, 0xda, 0xe5),
];

/// A fixed, non-empty list of colors addressed by a position in `[0, 1]`.
///
/// Sampling treats the list as a step function: the unit interval is cut
/// into `len()` equal bins and a position picks the bin it falls in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    colors: &'static [Color],
}

impl Palette {
    pub const fn tab20() -> Self {
        Self { colors: &TAB20 }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for item `index` of `total`, sampled at position `index / total`.
    ///
    /// Spreads `total` items evenly over the palette. With `total <= len()`
    /// every index lands in its own bin; beyond that colors repeat. An
    /// index past `total` clamps to the last color.
    pub fn sample(&self, index: usize, total: usize) -> Color {
        if total == 0 {
            return self.colors[0];
        }
        // floor(index / total * len) in integers, free of rounding error.
        let bin = index.saturating_mul(self.colors.len()) / total;
        self.colors[bin.min(self.colors.len() - 1)]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::tab20()
    }
}
