use serde::{Deserialize, Serialize};

use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// A single, stateless render instruction in chart data coordinates.
///
/// A `DrawPlan` flattens into a `Vec<RenderCommand>` already sorted by
/// z-order. Renderers consume the list sequentially; each command carries
/// all the data it needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RenderCommand {
    /// Filled rectangle spanning `rect`, blended at `opacity`.
    DrawBar {
        rect: Rect,
        fill: Color,
        opacity: f32,
        z_order: i32,
    },

    /// Point marker centered on `center`. `size` is the marker diameter
    /// in renderer units.
    DrawMarker {
        center: Point,
        size: f64,
        color: ThemeToken,
        z_order: i32,
    },

    /// Row label on the vertical axis at data position `y`, right-aligned
    /// against the plot.
    DrawTick { y: f64, label: SharedStr },

    /// Begin a logical group (e.g. a layer). Renderers may use this for
    /// batching or layer separation.
    BeginGroup {
        id: SharedStr,
        label: Option<SharedStr>,
    },

    /// End the current group.
    EndGroup,
}
