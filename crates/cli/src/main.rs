mod output;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use swimlane_core::svg::{SvgOptions, render_svg};
use swimlane_core::{IntervalRecord, LayoutConfig, ThreadColorTable, layout_swimlanes, window};
use swimlane_protocol::Theme;
use tracing_subscriber::EnvFilter;

use crate::output::Target;

/// Render a swimlane chart from async task execution records.
///
/// INPUT is a JSON array of records:
/// `{"task_name": "fut0", "thread_id": 1, "start": 0, "end": 40, "value": 0.3}`.
#[derive(Debug, Parser)]
#[command(name = "swimlane", version, about)]
struct Args {
    /// Records file, or `-` for stdin.
    input: Target,

    /// Output file, or `-` for stdout.
    #[arg(short, long, default_value = "swimlane.svg")]
    output: Target,

    /// Draw a bar for every span, colored by thread.
    #[arg(long)]
    include_bars: bool,

    /// Only chart records starting in this leading fraction of the trace.
    #[arg(long, value_name = "RATIO")]
    zoom: Option<f64>,

    /// Built-in theme (`dark`, `light`) or a JSON theme file.
    #[arg(long, default_value = "dark")]
    theme: String,

    /// JSON layout configuration file.
    #[arg(long, value_name = "PATH")]
    layout: Option<Target>,

    /// Figure width in pixels.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Write the draw plan as JSON instead of an SVG image.
    #[arg(long)]
    emit_plan: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(&args)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: &Args) -> Result<()> {
    let records = parse_records(&args.input.read()?)
        .with_context(|| format!("invalid records in {}", args.input))?;
    tracing::info!(records = records.len(), input = %args.input, "loaded records");

    let records = match args.zoom {
        Some(ratio) => window::zoom(&records, ratio)?,
        None => records,
    };

    let mut config = match &args.layout {
        Some(path) => serde_json::from_slice::<LayoutConfig>(&path.read()?)
            .with_context(|| format!("invalid layout configuration in {path}"))?,
        None => LayoutConfig::default(),
    };
    config.include_bars |= args.include_bars;

    let colors = ThreadColorTable::from_records(&records);
    let plan = layout_swimlanes(&records, &colors, &config)?;
    if plan.is_empty() {
        tracing::warn!("no records to chart; writing an empty chart");
    }

    let bytes = if args.emit_plan {
        serde_json::to_vec_pretty(&plan).context("failed to serialize draw plan")?
    } else {
        let theme = load_theme(&args.theme)?;
        let options = SvgOptions {
            width_px: args.width,
            ..SvgOptions::default()
        };
        render_svg(&plan, &theme, &options).into_bytes()
    };

    args.output.write(&bytes)?;
    tracing::info!(
        rows = plan.rows.len(),
        threads = colors.len(),
        output = %args.output,
        "wrote chart"
    );
    Ok(())
}

fn parse_records(data: &[u8]) -> Result<Vec<IntervalRecord>> {
    Ok(serde_json::from_slice(data)?)
}

fn load_theme(name_or_path: &str) -> Result<Theme> {
    if let Some(theme) = Theme::builtin(name_or_path) {
        return Ok(theme);
    }
    let data = std::fs::read(name_or_path)
        .with_context(|| format!("unknown theme {name_or_path:?} and no such theme file"))?;
    serde_json::from_slice(&data).with_context(|| format!("invalid theme file {name_or_path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "swimlane",
            "trace.json",
            "-o",
            "-",
            "--include-bars",
            "--zoom",
            "0.05",
            "-vv",
        ]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.output, Target::Std);
            assert!(args.include_bars);
            assert_eq!(args.zoom, Some(0.05));
            assert_eq!(args.verbose, 2);
            assert_eq!(args.theme, "dark");
        }
    }

    #[test]
    fn input_is_required() {
        assert!(Args::try_parse_from(["swimlane"]).is_err());
    }

    #[test]
    fn parses_record_array() {
        let json = br#"[
            {"task_name": "fut0", "thread_id": 1, "start": 0, "end": 40, "value": 0.3},
            {"fut_name": "fut1", "thread_id": "worker-2", "start": 50, "end": 90}
        ]"#;
        let records = parse_records(json).unwrap_or_default();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].thread_id.as_str(), "worker-2");
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(parse_records(br#"[{"task_name": "fut0"}]"#).is_err());
    }

    #[test]
    fn builtin_themes_need_no_file() {
        assert!(load_theme("light").is_ok());
        assert!(load_theme("/nonexistent/theme.json").is_err());
    }
}
