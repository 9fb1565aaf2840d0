use swimlane_protocol::{AxisTick, Bar, DrawPlan, Marker, Point, Rect, Row, ThemeToken};

use crate::color::ThreadColorTable;
use crate::error::LayoutError;
use crate::layout::LayoutConfig;
use crate::model::{IntervalRecord, layout_order, validate_all};

const BAR_Z_ORDER: i32 = 1;
const MARKER_Z_ORDER: i32 = 2;

/// Lay out interval records as swimlanes: one row per task name.
///
/// Records are sorted by `(task_name, start)`; distinct task names get rows
/// `0, 1, 2, …` in that order. Each record yields a marker at its midpoint,
/// lifted by its `value` inside the row, and (with `include_bars`) a bar
/// covering `[start, end]` filled with its thread's color.
///
/// Every record is validated first and every thread must have a color in
/// `colors`. Empty input gives an empty plan.
pub fn layout_swimlanes(
    records: &[IntervalRecord],
    colors: &ThreadColorTable,
    config: &LayoutConfig,
) -> Result<DrawPlan, LayoutError> {
    let _span = tracing::debug_span!("layout_swimlanes", records = records.len()).entered();

    validate_all(records)?;
    if records.is_empty() {
        return Ok(DrawPlan::default());
    }

    let mut rows: Vec<Row> = Vec::new();
    let mut markers = Vec::with_capacity(records.len());
    let mut bars = Vec::with_capacity(if config.include_bars { records.len() } else { 0 });

    for record in layout_order(records) {
        // Sorted by task name, so a new name always opens the next row.
        let same_row = rows
            .last()
            .is_some_and(|row| row.task_name == record.task_name);
        if !same_row {
            let index = rows.len();
            rows.push(Row {
                index,
                task_name: record.task_name.clone(),
                center_y: config.row_center(index),
                record_count: 0,
            });
        }
        let row = rows.len() - 1;
        rows[row].record_count += 1;

        let fill = colors
            .get(&record.thread_id)
            .ok_or_else(|| LayoutError::MissingColor {
                thread_id: record.thread_id.clone(),
            })?;

        markers.push(Marker {
            center: Point::new(record.midpoint(), config.row_center(row) + record.value),
            size: config.marker_size,
            color: ThemeToken::Marker,
            z_order: MARKER_Z_ORDER,
            row,
        });

        if config.include_bars {
            let (top, height) = config.bar_band(row);
            bars.push(Bar {
                rect: Rect::new(record.start, top, record.duration(), height),
                fill,
                opacity: config.bar_opacity,
                z_order: BAR_Z_ORDER,
                row,
                thread_id: record.thread_id.clone(),
            });
        }
    }

    let ticks = rows
        .iter()
        .map(|row| AxisTick {
            position: row.center_y,
            label: row.task_name.clone(),
        })
        .collect();

    let time_range = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.start), hi.max(r.end))
    });

    tracing::debug!(
        rows = rows.len(),
        markers = markers.len(),
        bars = bars.len(),
        "laid out swimlanes"
    );

    Ok(DrawPlan {
        y_extent: Some(vertical_extent(&rows, &markers, config)),
        rows,
        markers,
        bars,
        ticks,
        y_axis_inverted: true,
        time_range: Some(time_range),
    })
}

/// Span covering every row band and every (possibly jittered) marker.
fn vertical_extent(rows: &[Row], markers: &[Marker], config: &LayoutConfig) -> (f64, f64) {
    let half_pitch = config.row_pitch() / 2.0;
    let (bands_lo, bands_hi) = match (rows.first(), rows.last()) {
        (Some(first), Some(last)) => (first.center_y - half_pitch, last.center_y + half_pitch),
        _ => (0.0, 0.0),
    };
    markers
        .iter()
        .fold((bands_lo, bands_hi), |(lo, hi), m| (lo.min(m.center.y), hi.max(m.center.y)))
}
