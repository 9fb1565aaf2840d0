//! Thread → color assignment.

use std::collections::{HashMap, HashSet};

use swimlane_protocol::{Color, ThreadId};

use crate::model::{IntervalRecord, layout_order};
use crate::palette::Palette;

/// Immutable mapping from thread id to bar color.
///
/// Built once per trace and only read afterwards, so one table can be
/// shared across several layouts (e.g. a full chart and its zoomed view)
/// to keep thread colors consistent between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadColorTable {
    /// Threads in enumeration order.
    order: Vec<ThreadId>,
    colors: HashMap<ThreadId, Color>,
}

impl ThreadColorTable {
    /// Assign colors to threads in iteration order, ignoring repeats.
    ///
    /// Thread `i` of `N` distinct threads receives the palette color at
    /// position `i / N`.
    pub fn from_threads<I>(threads: I, palette: &Palette) -> Self
    where
        I: IntoIterator<Item = ThreadId>,
    {
        let mut seen = HashSet::new();
        let order: Vec<ThreadId> = threads
            .into_iter()
            .filter(|thread| seen.insert(thread.clone()))
            .collect();

        let total = order.len();
        if total > palette.len() {
            tracing::warn!(
                threads = total,
                palette = palette.len(),
                "more threads than palette colors; colors will repeat"
            );
        }

        let colors = order
            .iter()
            .enumerate()
            .map(|(i, thread)| {
                let color = palette.sample(i, total);
                tracing::trace!(thread = %thread, index = i, color = %color.to_hex(), "assigned thread color");
                (thread.clone(), color)
            })
            .collect();

        Self { order, colors }
    }

    /// Assign tab20 colors to the threads of `records`, enumerated in
    /// order of first appearance after sorting by `(task_name, start)`.
    pub fn from_records(records: &[IntervalRecord]) -> Self {
        Self::from_records_with(records, &Palette::tab20())
    }

    pub fn from_records_with(records: &[IntervalRecord], palette: &Palette) -> Self {
        let threads = layout_order(records)
            .into_iter()
            .map(|r| r.thread_id.clone());
        Self::from_threads(threads, palette)
    }

    pub fn get(&self, thread: &ThreadId) -> Option<Color> {
        self.colors.get(thread).copied()
    }

    /// Threads in the order colors were assigned.
    pub fn threads(&self) -> &[ThreadId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
