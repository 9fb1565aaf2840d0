//! Swimlane charts for asynchronous task traces.
//!
//! ```text
//!   records ─▶ window::zoom ─▶ ThreadColorTable ─▶ layout_swimlanes ─▶ DrawPlan ─▶ render_svg
//!              (optional)       (color.rs)          (views/swimlane)                (svg.rs)
//! ```

pub mod color;
pub mod error;
pub mod layout;
pub mod model;
pub mod palette;
pub mod svg;
pub mod views;
pub mod window;

pub use color::ThreadColorTable;
pub use error::{InvalidReason, LayoutError};
pub use layout::LayoutConfig;
pub use model::IntervalRecord;
pub use views::swimlane::layout_swimlanes;
