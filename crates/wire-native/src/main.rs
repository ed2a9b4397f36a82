use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use wire_core::{
    Simulation, Viewport, WireConfig, GRAVITY, REST_LENGTH, SOLVER_ITERATIONS, WIRE_COUNT,
};

mod preview;

#[derive(Parser, Debug)]
#[command(
    name = "wire-preview",
    about = "Simulate the heading wires headlessly and write the last frame as SVG"
)]
struct Cli {
    /// Frames to simulate (one step per frame)
    #[arg(long, default_value_t = 240)]
    frames: u32,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 720.0)]
    height: f32,
    /// Scroll the page away from the heading from this frame on
    #[arg(long)]
    scroll_after: Option<u32>,
    #[arg(long, default_value_t = REST_LENGTH)]
    rest_length: f32,
    #[arg(long, default_value_t = SOLVER_ITERATIONS)]
    iterations: usize,
    #[arg(long, default_value_t = GRAVITY)]
    gravity: f32,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let cfg = WireConfig {
        rest_length: cli.rest_length,
        iterations: cli.iterations,
        gravity: cli.gravity,
        ..WireConfig::default()
    };
    let mut sim = Simulation::new(cfg, WIRE_COUNT).context("invalid wire configuration")?;
    let vp = Viewport::new(cli.width, cli.height);
    if vp.is_compact(sim.config().compact_max_width) {
        log::warn!(
            "[preview] {}px is a compact viewport; cables stay where they were seeded",
            vp.width
        );
    }

    let cables = preview::simulate(&mut sim, vp, cli.frames, cli.scroll_after);
    log::info!(
        "[preview] simulated {} frames, detached={}",
        sim.frame_counter(),
        sim.is_detached()
    );

    let svg = preview::render_svg(vp, &cables);
    match &cli.out {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", svg),
    }
    Ok(())
}
