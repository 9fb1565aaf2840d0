use serde::{Deserialize, Serialize};

/// Geometry and toggles for one swimlane layout pass.
///
/// All lengths are in vertical data units (one row band is `band_height`
/// tall). Every field has a default, so a partial JSON object is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of a row's bar band.
    pub band_height: f64,
    /// Extra height added around a band's bars.
    pub padding: f64,
    /// Gap between neighbouring bands.
    pub margin: f64,
    /// Emit interval bars in addition to midpoint markers.
    pub include_bars: bool,
    pub marker_size: f64,
    pub bar_opacity: f32,
}

impl LayoutConfig {
    /// Vertical distance between consecutive row centers.
    pub fn row_pitch(&self) -> f64 {
        self.band_height + 2.0 * self.padding + 2.0 * self.margin
    }

    pub fn row_center(&self, row_index: usize) -> f64 {
        row_index as f64 * self.row_pitch()
    }

    /// `(top, height)` of the bar band for `row_index`, centered on the row.
    pub fn bar_band(&self, row_index: usize) -> (f64, f64) {
        let top = self.row_center(row_index) - self.band_height / 2.0 - self.padding / 2.0;
        (top, self.band_height + self.padding)
    }

    pub fn with_bars(mut self, include_bars: bool) -> Self {
        self.include_bars = include_bars;
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            band_height: 2.0,
            padding: 0.1,
            margin: 0.1,
            include_bars: false,
            marker_size: 2.0,
            bar_opacity: 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_row_pitch() {
        assert!((LayoutConfig::default().row_pitch() - 2.4).abs() < 1e-12);
    }

    #[test]
    fn bar_band_is_centered_on_row() {
        let config = LayoutConfig::default();
        let (top, height) = config.bar_band(3);
        let center = config.row_center(3);
        assert!((top - (center - 1.05)).abs() < 1e-12);
        assert!((height - 2.1).abs() < 1e-12);
        assert!(((top + height / 2.0) - center).abs() < 1e-12);
    }

    #[test]
    fn bands_do_not_overlap() {
        let config = LayoutConfig::default();
        let (top0, h0) = config.bar_band(0);
        let (top1, _) = config.bar_band(1);
        assert!(top0 + h0 < top1);
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"include_bars":true}"#).unwrap_or_default();
        assert!(config.include_bars);
        assert!((config.band_height - 2.0).abs() < f64::EPSILON);
    }
}
