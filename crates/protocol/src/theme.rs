use serde::{Deserialize, Serialize};

use crate::types::Color;

/// Semantic color tokens resolved by the renderer's active [`Theme`].
///
/// Thread colors are concrete palette colors and never go through a token;
/// everything else a chart draws (backgrounds, axes, markers) does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeToken {
    Background,
    PlotBackground,
    GridLine,
    AxisText,
    AxisTitle,
    Marker,
}

/// Explicit visual theme handed to a renderer.
///
/// Themes are plain values: built in ([`Theme::dark`], [`Theme::light`]) or
/// deserialized from JSON. Missing fields fall back to the dark theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub background: Color,
    pub plot_background: Color,
    pub grid_line: Color,
    pub axis_text: Color,
    pub axis_title: Color,
    pub marker: Color,
    pub font_family: String,
    pub font_size: f64,
}

impl Theme {
    /// Dark purple theme with light-grey markers.
    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            background: Color::rgb8(0x1a, 0x1a, 0x2e),
            plot_background: Color::rgb8(0x21, 0x1f, 0x38),
            grid_line: Color::rgb8(0x3b, 0x38, 0x5e),
            axis_text: Color::rgb8(0xe0, 0xe0, 0xe0),
            axis_title: Color::rgb8(0xb8, 0xb4, 0xd4),
            marker: Color::rgb8(0xdd, 0xdd, 0xdd),
            font_family: "system-ui,-apple-system,sans-serif".into(),
            font_size: 11.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".into(),
            background: Color::rgb8(0xff, 0xff, 0xff),
            plot_background: Color::rgb8(0xf8, 0xf9, 0xfa),
            grid_line: Color::rgb8(0xde, 0xe2, 0xe6),
            axis_text: Color::rgb8(0x1a, 0x1a, 0x2e),
            axis_title: Color::rgb8(0x66, 0x66, 0x77),
            marker: Color::rgb8(0x44, 0x44, 0x44),
            font_family: "system-ui,-apple-system,sans-serif".into(),
            font_size: 11.0,
        }
    }

    /// Look up a built-in theme by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    pub fn resolve(&self, token: ThemeToken) -> Color {
        match token {
            ThemeToken::Background => self.background,
            ThemeToken::PlotBackground => self.plot_background,
            ThemeToken::GridLine => self.grid_line,
            ThemeToken::AxisText => self.axis_text,
            ThemeToken::AxisTitle => self.axis_title,
            ThemeToken::Marker => self.marker,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_markers_are_light_grey() {
        assert_eq!(Theme::dark().resolve(ThemeToken::Marker).to_hex(), "#dddddd");
    }

    #[test]
    fn builtin_lookup() {
        assert_eq!(Theme::builtin("light"), Some(Theme::light()));
        assert!(Theme::builtin("pitaya").is_none());
    }

    #[test]
    fn partial_json_falls_back_to_dark() {
        let json = r#"{"name":"custom","font_size":14.0}"#;
        let theme: Theme = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(theme.name, "custom");
        assert!((theme.font_size - 14.0).abs() < f64::EPSILON);
        assert_eq!(theme.background, Theme::dark().background);
    }
}
