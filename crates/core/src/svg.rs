//! SVG renderer: converts a `DrawPlan` into a standalone SVG document.

use serde::{Deserialize, Serialize};
use swimlane_protocol::{DrawPlan, RenderCommand, Theme, ThemeToken};

use crate::views::time_axis::time_ticks;

const X_AXIS_TITLE: &str = "Time (microseconds)";
const TICK_LENGTH: f64 = 4.0;
const MIN_BAR_WIDTH_PX: f64 = 0.5;
/// Fraction of the time range added on both sides of the plot.
const X_MARGIN: f64 = 0.05;

/// Figure geometry for [`render_svg`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgOptions {
    pub width_px: f64,
    /// Plot height per swimlane; the figure grows with the row count.
    pub row_height_px: f64,
    /// Space left of the plot for task-name labels.
    pub label_gutter_px: f64,
    pub top_px: f64,
    /// Space below the plot for time labels and the axis title.
    pub bottom_px: f64,
    pub right_px: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width_px: 800.0,
            row_height_px: 60.0,
            label_gutter_px: 120.0,
            top_px: 12.0,
            bottom_px: 48.0,
            right_px: 16.0,
        }
    }
}

impl SvgOptions {
    pub fn height_for(&self, rows: usize) -> f64 {
        self.top_px + rows as f64 * self.row_height_px + self.bottom_px
    }
}

/// Maps chart data coordinates onto the SVG canvas.
struct Canvas {
    x0: f64,
    x_scale: f64,
    y0: f64,
    y1: f64,
    y_scale: f64,
    inverted: bool,
    plot_left: f64,
    plot_top: f64,
}

impl Canvas {
    fn new(plan: &DrawPlan, options: &SvgOptions) -> Self {
        let (mut t0, mut t1) = plan.time_range.unwrap_or((0.0, 1.0));
        if t1 <= t0 {
            // Only instantaneous events: center them in a unit-wide view.
            t0 -= 0.5;
            t1 += 0.5;
        }
        let pad = (t1 - t0) * X_MARGIN;
        let (t0, t1) = (t0 - pad, t1 + pad);

        let (y0, mut y1) = plan.y_extent.unwrap_or((0.0, 1.0));
        if y1 <= y0 {
            y1 = y0 + 1.0;
        }

        let plot_width = (options.width_px - options.label_gutter_px - options.right_px).max(1.0);
        let plot_height = plan.rows.len().max(1) as f64 * options.row_height_px;

        Self {
            x0: t0,
            x_scale: plot_width / (t1 - t0),
            y0,
            y1,
            y_scale: plot_height / (y1 - y0),
            inverted: plan.y_axis_inverted,
            plot_left: options.label_gutter_px,
            plot_top: options.top_px,
        }
    }

    fn x(&self, t: f64) -> f64 {
        self.plot_left + (t - self.x0) * self.x_scale
    }

    fn y(&self, v: f64) -> f64 {
        let offset = if self.inverted { v - self.y0 } else { self.y1 - v };
        self.plot_top + offset * self.y_scale
    }

    fn time_at(&self, px: f64) -> f64 {
        self.x0 + (px - self.plot_left) / self.x_scale
    }
}

/// Render a draw plan as an SVG document string.
///
/// Bars, markers and row labels come from `plan.to_commands()` and are
/// painted in list order, so bars end up beneath markers. Time ticks are
/// computed here from the visible range.
pub fn render_svg(plan: &DrawPlan, theme: &Theme, options: &SvgOptions) -> String {
    let width = options.width_px;
    let height = options.height_for(plan.rows.len());
    let commands = plan.to_commands();
    let mut svg = String::with_capacity(512 + commands.len() * 120);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:{};font-size:{}px">"#,
        escape_xml(&theme.font_family),
        theme.font_size,
    ));
    svg.push_str(&format!(
        r#"<rect width="{width}" height="{height}" fill="{}"/>"#,
        hex(theme, ThemeToken::Background),
    ));

    if plan.is_empty() {
        svg.push_str("</svg>");
        return svg;
    }

    let canvas = Canvas::new(plan, options);
    let plot_right = width - options.right_px;
    let plot_bottom = options.top_px + plan.rows.len() as f64 * options.row_height_px;
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
        canvas.plot_left,
        canvas.plot_top,
        plot_right - canvas.plot_left,
        plot_bottom - canvas.plot_top,
        hex(theme, ThemeToken::PlotBackground),
    ));

    write_time_axis(&mut svg, &canvas, theme, plot_right, plot_bottom);

    for cmd in &commands {
        match cmd {
            RenderCommand::DrawBar {
                rect, fill, opacity, ..
            } => {
                let x = canvas.x(rect.x);
                let w = (canvas.x(rect.right()) - x).max(MIN_BAR_WIDTH_PX);
                let top = if canvas.inverted { rect.y } else { rect.bottom() };
                svg.push_str(&format!(
                    r#"<rect x="{x:.2}" y="{:.2}" width="{w:.2}" height="{:.2}" fill="{}" fill-opacity="{opacity}"/>"#,
                    canvas.y(top),
                    rect.h * canvas.y_scale,
                    fill.to_hex(),
                ));
            }
            RenderCommand::DrawMarker {
                center,
                size,
                color,
                ..
            } => {
                svg.push_str(&format!(
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
                    canvas.x(center.x),
                    canvas.y(center.y),
                    size / 2.0,
                    hex(theme, *color),
                ));
            }
            RenderCommand::DrawTick { y, label } => {
                let x = canvas.plot_left - TICK_LENGTH - 2.0;
                write_row_label(&mut svg, theme, x, canvas.y(*y), label);
            }
            RenderCommand::BeginGroup { id, .. } => {
                svg.push_str(&format!(r#"<g id="{}">"#, escape_xml(id)));
            }
            RenderCommand::EndGroup => svg.push_str("</g>"),
        }
    }

    svg.push_str(&format!(
        r#"<text x="{}" y="{}" fill="{}" font-style="italic" text-anchor="start">{X_AXIS_TITLE}</text>"#,
        canvas.plot_left,
        plot_bottom + options.bottom_px - 8.0,
        hex(theme, ThemeToken::AxisTitle),
    ));

    svg.push_str("</svg>");
    svg
}

fn write_time_axis(
    svg: &mut String,
    canvas: &Canvas,
    theme: &Theme,
    plot_right: f64,
    plot_bottom: f64,
) {
    let view_start = canvas.time_at(canvas.plot_left);
    let view_end = canvas.time_at(plot_right);
    let grid = hex(theme, ThemeToken::GridLine);
    let text = hex(theme, ThemeToken::AxisText);

    svg.push_str(r#"<g id="x-axis">"#);
    for tick in time_ticks(view_start, view_end, plot_right - canvas.plot_left) {
        let x = canvas.x(tick.position);
        svg.push_str(&format!(
            r#"<line x1="{x:.2}" y1="{}" x2="{x:.2}" y2="{}" stroke="{grid}" stroke-width="0.5"/>"#,
            canvas.plot_top,
            plot_bottom + TICK_LENGTH,
        ));
        svg.push_str(&format!(
            r#"<text x="{x:.2}" y="{}" fill="{text}" text-anchor="middle">{}</text>"#,
            plot_bottom + TICK_LENGTH + 12.0,
            escape_xml(&tick.label),
        ));
    }
    svg.push_str("</g>");
}

/// Right-aligned task name; embedded newlines become stacked lines
/// centered on the row.
fn write_row_label(svg: &mut String, theme: &Theme, x: f64, y: f64, label: &str) {
    let lines: Vec<&str> = label.split('\n').collect();
    let line_height = theme.font_size * 1.2;
    let first_y = y - (lines.len() as f64 - 1.0) * line_height / 2.0;
    svg.push_str(&format!(
        r#"<text x="{x}" y="{first_y:.2}" fill="{}" text-anchor="end" dominant-baseline="middle">"#,
        hex(theme, ThemeToken::AxisText),
    ));
    for (i, line) in lines.iter().enumerate() {
        let dy = if i == 0 { 0.0 } else { line_height };
        svg.push_str(&format!(
            r#"<tspan x="{x}" dy="{dy}">{}</tspan>"#,
            escape_xml(line)
        ));
    }
    svg.push_str("</text>");
}

fn hex(theme: &Theme, token: ThemeToken) -> String {
    theme.resolve(token).to_hex()
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
