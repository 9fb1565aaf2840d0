use swimlane_protocol::{AxisTick, SharedStr};

const MIN_MAJOR_SPACING_PX: f64 = 80.0;
const MAX_TICKS: usize = 512;

/// Major ticks for a horizontal time axis.
///
/// `view_start` and `view_end` are in microseconds. Ticks sit on multiples
/// of a "nice" interval (1, 2 or 5 × 10ⁿ µs) chosen so that roughly one
/// tick falls every 80px of `width_px`. Tick positions are in microseconds.
pub fn time_ticks(view_start: f64, view_end: f64, width_px: f64) -> Vec<AxisTick> {
    let duration = view_end - view_start;
    if !duration.is_finite() || duration <= 0.0 || width_px <= 0.0 {
        return Vec::new();
    }

    let interval = nice_interval(duration, width_px);
    let first = (view_start / interval).ceil() * interval;
    // Tolerate float drift on the last tick.
    let limit = view_end + interval * 1e-9;

    (0..MAX_TICKS)
        .map(|i| first + i as f64 * interval)
        .take_while(|t| *t <= limit)
        .map(|t| AxisTick {
            position: t,
            label: SharedStr::from(format_time_label(t)),
        })
        .collect()
}

/// Smallest 1/2/5 × 10ⁿ interval yielding at most one tick per
/// `MIN_MAJOR_SPACING_PX` (and at least two ticks across the view).
fn nice_interval(duration_us: f64, width_px: f64) -> f64 {
    let target_count = (width_px / MIN_MAJOR_SPACING_PX).max(2.0);
    let raw = duration_us / target_count;
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= raw)
        .unwrap_or(10.0 * magnitude)
}

/// Format a timestamp in microseconds as a short label.
pub fn format_time_label(us: f64) -> String {
    let abs = us.abs();
    if abs == 0.0 {
        "0".to_string()
    } else if abs >= 60_000_000.0 {
        let mins = (us / 60_000_000.0).trunc();
        let secs = (us - mins * 60_000_000.0) / 1_000_000.0;
        format!("{mins:.0}m{secs:.1}s")
    } else if abs >= 1_000_000.0 {
        format!("{:.3}s", us / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.2}ms", us / 1_000.0)
    } else if abs >= 1.0 {
        format!("{us:.1}µs")
    } else {
        format!("{:.0}ns", us * 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_interval_selects_reasonable_value() {
        // 1 second across 800px → ~10 ticks → 100ms
        let interval = nice_interval(1_000_000.0, 800.0);
        assert!((interval - 100_000.0).abs() < 1e-6, "interval={interval}");
    }

    #[test]
    fn nice_interval_rounds_up_to_next_step() {
        // raw = 300µs → 500µs
        let interval = nice_interval(3_000.0, 800.0);
        assert!((interval - 500.0).abs() < 1e-9, "interval={interval}");
    }

    #[test]
    fn ticks_are_aligned_and_in_range() {
        let ticks = time_ticks(130.0, 2_470.0, 800.0);
        assert!(!ticks.is_empty());
        for tick in &ticks {
            assert!(tick.position >= 130.0 && tick.position <= 2_470.0);
            let steps = tick.position / 500.0;
            assert!((steps - steps.round()).abs() < 1e-9);
        }
        assert_eq!(ticks[0].label, "500.0µs");
    }

    #[test]
    fn degenerate_range_has_no_ticks() {
        assert!(time_ticks(5.0, 5.0, 800.0).is_empty());
        assert!(time_ticks(5.0, 1.0, 800.0).is_empty());
        assert!(time_ticks(0.0, f64::INFINITY, 800.0).is_empty());
    }

    #[test]
    fn format_labels() {
        assert_eq!(format_time_label(0.0), "0");
        assert_eq!(format_time_label(0.5), "500ns");
        assert_eq!(format_time_label(500.0), "500.0µs");
        assert_eq!(format_time_label(1_500.0), "1.50ms");
        assert_eq!(format_time_label(1_500_000.0), "1.500s");
        assert_eq!(format_time_label(90_000_000.0), "1m30.0s");
    }
}
