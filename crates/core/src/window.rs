use crate::error::LayoutError;
use crate::model::{IntervalRecord, validate_all};

/// Keep the records that start within the leading `ratio` of the trace.
///
/// The trace spans `[t0, t1]` (earliest start to latest end); a record is
/// kept when `start < t0 + (t1 - t0) * ratio`. A ratio of `1.0` keeps every
/// record. Useful for a close-up of the first moments of a run, where
/// individual polls are still visible.
///
/// Every record is validated first, including the ones outside the window.
pub fn zoom(records: &[IntervalRecord], ratio: f64) -> Result<Vec<IntervalRecord>, LayoutError> {
    if !ratio.is_finite() || ratio <= 0.0 || ratio > 1.0 {
        return Err(LayoutError::InvalidZoomRatio(ratio));
    }
    validate_all(records)?;
    if records.is_empty() || ratio >= 1.0 {
        return Ok(records.to_vec());
    }

    let (t0, t1) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.start), hi.max(r.end))
    });
    let threshold = t0 + (t1 - t0) * ratio;

    let kept: Vec<IntervalRecord> = records
        .iter()
        .filter(|r| r.start < threshold)
        .cloned()
        .collect();
    tracing::debug!(
        ratio,
        threshold,
        kept = kept.len(),
        dropped = records.len() - kept.len(),
        "zoomed trace"
    );
    Ok(kept)
}
