mod cli;
mod scenes;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, SceneKind};
use glint_renderer::{Accumulator, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let mut settings = args.render_settings().context("invalid render settings")?;

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let demo = match args.scene {
        SceneKind::Random => scenes::random_scene(&mut rng),
        SceneKind::Showcase => scenes::showcase_scene(),
    };
    if args.vfov.is_none() {
        settings.vfov = demo.vfov;
    }

    log::info!(
        "Rendering {:?} scene at {}x{}, {} frames, {} bounces",
        args.scene,
        settings.width,
        settings.height,
        settings.max_frames,
        settings.max_bounces
    );

    let start = Instant::now();
    let scene = Scene::build(demo.objects, &mut rng).context("failed to build scene")?;
    log::info!("Scene built in {:?}", start.elapsed());

    let mut accumulator = Accumulator::from_settings(&settings);
    let start = Instant::now();
    let mut last_frame = accumulator.current_frame();
    while accumulator.update(&scene, &demo.view, &settings) {
        let frame = accumulator.current_frame();
        if frame != last_frame {
            last_frame = frame;
            log::info!(
                "Frame {}/{} ({:.1?} elapsed)",
                frame,
                settings.max_frames,
                start.elapsed()
            );
        }
    }
    log::info!("Rendered in {:?}", start.elapsed());

    accumulator
        .save_png(&args.output, settings.gamma_correction)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
