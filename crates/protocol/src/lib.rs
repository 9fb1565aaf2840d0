pub mod commands;
pub mod plan;
pub mod shared_str;
pub mod theme;
pub mod types;

pub use commands::RenderCommand;
pub use plan::{AxisTick, Bar, DrawPlan, Marker, Row, ThreadId};
pub use shared_str::SharedStr;
pub use theme::{Theme, ThemeToken};
pub use types::{Color, Point, Rect};
