use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::commands::RenderCommand;
use crate::shared_str::SharedStr;
use crate::theme::ThemeToken;
use crate::types::{Color, Point, Rect};

/// Identifier of the thread (or worker) that executed a span.
///
/// Thread-id helpers usually hand out integers, other tracers use names;
/// both convert into the same string-backed id. Serialized as a string,
/// deserialized from either a string or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(SharedStr);

impl ThreadId {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_blank(&self) -> bool {
        self.0.is_blank()
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for ThreadId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<u64> for ThreadId {
    fn from(id: u64) -> Self {
        Self(id.to_string().into())
    }
}

impl From<usize> for ThreadId {
    fn from(id: usize) -> Self {
        Self(id.to_string().into())
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for ThreadId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ThreadId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ThreadIdVisitor;

        impl Visitor<'_> for ThreadIdVisitor {
            type Value = ThreadId;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a thread id string or integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<ThreadId, E> {
                Ok(ThreadId::from(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<ThreadId, E> {
                Ok(ThreadId::from(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<ThreadId, E> {
                Ok(ThreadId::from(v.to_string()))
            }
        }

        deserializer.deserialize_any(ThreadIdVisitor)
    }
}

/// One swimlane: the row assigned to a task name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub index: usize,
    pub task_name: SharedStr,
    /// Vertical center in data units (`index * row_pitch`).
    pub center_y: f64,
    /// Number of records laid out in this row.
    pub record_count: usize,
}

/// Midpoint marker of one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub center: Point,
    pub size: f64,
    pub color: ThemeToken,
    pub z_order: i32,
    pub row: usize,
}

/// Interval bar of one record, filled with its thread's color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub rect: Rect,
    pub fill: Color,
    pub opacity: f32,
    pub z_order: i32,
    pub row: usize,
    pub thread_id: ThreadId,
}

/// A labelled position on the vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: SharedStr,
}

/// Renderer-agnostic output of the swimlane layout.
///
/// Markers and bars are listed in layout order: rows top to bottom, and
/// within a row by ascending start time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub rows: Vec<Row>,
    pub markers: Vec<Marker>,
    pub bars: Vec<Bar>,
    pub ticks: Vec<AxisTick>,
    /// When set, row 0 is drawn at the top of the chart.
    pub y_axis_inverted: bool,
    /// `(earliest start, latest end)` over all laid-out records.
    pub time_range: Option<(f64, f64)>,
    /// `(min, max)` vertical extent covering every band and marker.
    pub y_extent: Option<(f64, f64)>,
}

impl DrawPlan {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.bars.is_empty() && self.ticks.is_empty()
    }

    /// Flatten the plan into sequential render commands.
    ///
    /// Drawables are emitted in ascending z-order (stable within equal
    /// z), so a renderer that paints in list order puts bars beneath
    /// markers. Axis ticks follow in their own group.
    pub fn to_commands(&self) -> Vec<RenderCommand> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut drawables: Vec<(i32, RenderCommand)> =
            Vec::with_capacity(self.bars.len() + self.markers.len());
        for bar in &self.bars {
            drawables.push((
                bar.z_order,
                RenderCommand::DrawBar {
                    rect: bar.rect,
                    fill: bar.fill,
                    opacity: bar.opacity,
                    z_order: bar.z_order,
                },
            ));
        }
        for marker in &self.markers {
            drawables.push((
                marker.z_order,
                RenderCommand::DrawMarker {
                    center: marker.center,
                    size: marker.size,
                    color: marker.color,
                    z_order: marker.z_order,
                },
            ));
        }
        drawables.sort_by_key(|(z, _)| *z);

        let mut commands = Vec::with_capacity(drawables.len() + self.ticks.len() + 4);
        commands.push(RenderCommand::BeginGroup {
            id: "swimlanes".into(),
            label: Some("Swimlanes".into()),
        });
        commands.extend(drawables.into_iter().map(|(_, cmd)| cmd));
        commands.push(RenderCommand::EndGroup);

        commands.push(RenderCommand::BeginGroup {
            id: "y-axis".into(),
            label: None,
        });
        for tick in &self.ticks {
            commands.push(RenderCommand::DrawTick {
                y: tick.position,
                label: tick.label.clone(),
            });
        }
        commands.push(RenderCommand::EndGroup);
        commands
    }
}
