pub mod record;

pub use record::{IntervalRecord, layout_order, validate_all};
