// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted seating-chart session.
//!
//! Builds a chart, waits for the reveal, focuses a tribune, selects a few of its
//! seats and writes an overview and a focused frame as SVG.

mod svg;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use kurbo::{Point, Rect};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tribuna_view::{ChartConfig, ChartFrame, SeatingChart, TapOutcome};

/// Command line options for the seating chart demo.
#[derive(Parser, Debug)]
#[command(version, about = "Scripted stadium seating-chart session with SVG output")]
struct Args {
    /// Number of concentric sectors.
    #[arg(long, default_value_t = 4)]
    sectors: usize,

    /// Side length of the square canvas.
    #[arg(long, default_value_t = 400.0)]
    size: f64,

    /// Tribune to focus, by position among all tribunes.
    #[arg(long, default_value_t = 0)]
    tribune: usize,

    /// Number of seats to select in the focused tribune.
    #[arg(long, default_value_t = 3)]
    seats: usize,

    /// Simulated frame rate of the host clock.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Directory the SVG files are written to.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    run(&Args::parse())
}

/// Runs the scripted session described by `args`.
fn run(args: &Args) -> Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        bail!("--fps must be positive, got {}", args.fps);
    }
    let dt = 1.0 / args.fps;

    let mut chart = SeatingChart::new(ChartConfig::new(args.sectors, args.size));
    chart.tick(0.0);
    if !chart.is_ready() {
        let err = chart.config().stadium.validate().err();
        bail!("layout never became ready: {err:?}");
    }
    let reveal = chart.config().reveal_duration;
    run_for(&mut chart, reveal, dt);

    let view_box = Rect::new(0.0, 0.0, args.size, args.size);
    write_frame(&chart.frame(), view_box, &args.out_dir.join("tribuna_overview.svg"))?;

    let graph = chart.graph();
    let count = graph.tribune_count();
    let Some(target) = graph.tribunes().nth(args.tribune) else {
        bail!("tribune {} out of range, the layout has {count}", args.tribune);
    };
    let (tribune_id, tap) = (target.id, target.bounds.center());
    let seat_taps: Vec<Point> = target
        .seats
        .iter()
        .take(args.seats)
        .map(|seat| seat.bounds.center())
        .collect();

    let outcome = chart.on_tap(tap);
    tracing::info!(?tribune_id, ?outcome, "focus tap");
    if outcome != TapOutcome::TribuneSelected(tribune_id) {
        bail!("tapping the center of {tribune_id:?} gave {outcome:?}");
    }
    let settle = chart.config().zoom_duration + chart.config().focus_duration;
    run_for(&mut chart, settle, dt);

    for at in seat_taps {
        let outcome = chart.on_tap(at);
        tracing::info!(?outcome, "seat tap");
    }
    tracing::info!(
        selected = chart.selection().selected_count(),
        zoomed_in = chart.selection().zoomed_in(),
        "session done"
    );
    write_frame(&chart.frame(), view_box, &args.out_dir.join("tribuna_focus.svg"))?;
    Ok(())
}

/// Ticks the chart at `dt` intervals for `seconds`.
fn run_for(chart: &mut SeatingChart, seconds: f64, dt: f64) {
    let steps = (seconds / dt).ceil() as usize;
    for _ in 0..steps {
        chart.tick(dt);
    }
}

fn write_frame(frame: &ChartFrame, view_box: Rect, path: &Path) -> Result<()> {
    let svg = svg::SvgScene::new(frame, view_box).to_svg_string();
    std::fs::write(path, svg).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), items = frame.items.len(), "wrote frame");
    Ok(())
}
