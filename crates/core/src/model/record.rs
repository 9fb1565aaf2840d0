use serde::{Deserialize, Serialize};
use swimlane_protocol::{SharedStr, ThreadId};

use crate::error::{InvalidReason, LayoutError};

/// One observed execution span of an async task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    /// Logical unit of work; one swimlane per distinct name.
    #[serde(alias = "fut_name")]
    pub task_name: SharedStr,
    /// Thread that polled the task during this span; drives bar color.
    pub thread_id: ThreadId,
    /// Start time in microseconds.
    pub start: f64,
    /// End time in microseconds (`>= start`).
    pub end: f64,
    /// Caller-supplied vertical offset inside the row. Opaque to layout.
    #[serde(default)]
    pub value: f64,
}

impl IntervalRecord {
    pub fn new(
        task_name: impl Into<SharedStr>,
        thread_id: impl Into<ThreadId>,
        start: f64,
        end: f64,
        value: f64,
    ) -> Self {
        Self {
            task_name: task_name.into(),
            thread_id: thread_id.into(),
            start,
            end,
            value,
        }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Check the record invariants. Identifiers are checked before numbers.
    pub fn validate(&self) -> Result<(), InvalidReason> {
        if self.task_name.is_blank() {
            return Err(InvalidReason::MissingTaskName);
        }
        if self.thread_id.is_blank() {
            return Err(InvalidReason::MissingThreadId);
        }
        for (field, v) in [
            ("start", self.start),
            ("end", self.end),
            ("value", self.value),
        ] {
            if !v.is_finite() {
                return Err(InvalidReason::NonFinite { field });
            }
        }
        if self.end < self.start {
            return Err(InvalidReason::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

/// Validate every record, reporting the first offender by its input index.
pub fn validate_all(records: &[IntervalRecord]) -> Result<(), LayoutError> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|reason| LayoutError::InvalidRecord { index, reason })?;
    }
    Ok(())
}

/// Records sorted by `(task_name, start)` ascending.
///
/// The sort is stable: records with the same task name and start keep
/// their input order. This order drives both row assignment and thread
/// enumeration for color assignment.
pub fn layout_order(records: &[IntervalRecord]) -> Vec<&IntervalRecord> {
    let mut sorted: Vec<&IntervalRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        a.task_name
            .cmp(&b.task_name)
            .then_with(|| a.start.total_cmp(&b.start))
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_and_duration() {
        let r = IntervalRecord::new("fut0", 1_u64, 5.0, 15.0, 0.2);
        assert!((r.midpoint() - 10.0).abs() < f64::EPSILON);
        assert!((r.duration() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_width_span_is_valid() {
        let r = IntervalRecord::new("tick", 1_u64, 7.0, 7.0, 0.0);
        assert_eq!(r.validate(), Ok(()));
    }

    #[test]
    fn rejects_end_before_start() {
        let r = IntervalRecord::new("fut0", 1_u64, 10.0, 4.0, 0.0);
        assert_eq!(
            r.validate(),
            Err(InvalidReason::EndBeforeStart {
                start: 10.0,
                end: 4.0
            })
        );
    }

    #[test]
    fn rejects_blank_identifiers() {
        let r = IntervalRecord::new(" ", 1_u64, 0.0, 1.0, 0.0);
        assert_eq!(r.validate(), Err(InvalidReason::MissingTaskName));
        let r = IntervalRecord::new("fut0", "", 0.0, 1.0, 0.0);
        assert_eq!(r.validate(), Err(InvalidReason::MissingThreadId));
    }

    #[test]
    fn rejects_non_finite_fields() {
        let r = IntervalRecord::new("fut0", 1_u64, 0.0, f64::INFINITY, 0.0);
        assert_eq!(r.validate(), Err(InvalidReason::NonFinite { field: "end" }));
        let r = IntervalRecord::new("fut0", 1_u64, 0.0, 1.0, f64::NAN);
        assert_eq!(r.validate(), Err(InvalidReason::NonFinite { field: "value" }));
    }

    #[test]
    fn validate_all_reports_index() {
        let records = vec![
            IntervalRecord::new("a", 1_u64, 0.0, 1.0, 0.0),
            IntervalRecord::new("a", 1_u64, 3.0, 2.0, 0.0),
        ];
        let err = validate_all(&records);
        assert!(matches!(err, Err(LayoutError::InvalidRecord { index: 1, .. })));
    }

    #[test]
    fn layout_order_sorts_by_name_then_start() {
        let records = vec![
            IntervalRecord::new("b", 1_u64, 0.0, 1.0, 0.0),
            IntervalRecord::new("a", 2_u64, 9.0, 10.0, 0.0),
            IntervalRecord::new("a", 3_u64, 2.0, 3.0, 0.0),
        ];
        let order: Vec<(&str, f64)> = layout_order(&records)
            .into_iter()
            .map(|r| (r.task_name.as_str(), r.start))
            .collect();
        assert_eq!(order, [("a", 2.0), ("a", 9.0), ("b", 0.0)]);
    }

    #[test]
    fn layout_order_is_stable_on_ties() {
        let records = vec![
            IntervalRecord::new("a", "first", 1.0, 2.0, 0.0),
            IntervalRecord::new("a", "second", 1.0, 3.0, 0.0),
        ];
        let threads: Vec<&str> = layout_order(&records)
            .into_iter()
            .map(|r| r.thread_id.as_str())
            .collect();
        assert_eq!(threads, ["first", "second"]);
    }

    #[test]
    fn accepts_fut_name_alias() {
        let json = r#"{"fut_name":"fut0","thread_id":3,"start":10,"end":20,"value":0.5}"#;
        let record: Result<IntervalRecord, _> = serde_json::from_str(json);
        assert!(record.is_ok());
        if let Ok(record) = record {
            assert_eq!(record.task_name, "fut0");
            assert_eq!(record.thread_id, ThreadId::from(3_u64));
        }
    }

    #[test]
    fn value_defaults_to_zero() {
        let json = r#"{"task_name":"a","thread_id":"w1","start":0,"end":1}"#;
        let record: Result<IntervalRecord, _> = serde_json::from_str(json);
        assert!(matches!(record, Ok(r) if r.value == 0.0));
    }
}
