pub mod swimlane;
pub mod time_axis;
