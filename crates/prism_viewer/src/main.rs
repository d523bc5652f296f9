use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use prism_renderer::{FrameBuffer, RayTracer, RenderConfig};

mod cli;
mod demo;
mod logger;

use cli::Args;
use logger::init_logger;

/// Merge the config file (if any) with command line overrides.
fn resolve_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => RenderConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path))?,
        None => RenderConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if let Some(samples) = args.anti_aliasing {
        config.anti_aliasing = samples;
    }

    config.validate().context("Invalid render settings")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let config = resolve_config(&args)?;

    let mut scene = demo::build_scene(
        config.width,
        config.height,
        args.texture.as_deref().map(Path::new),
    )?;
    scene.set_anti_aliasing(config.anti_aliasing)?;
    scene.set_num_reflections(config.depth);

    info!(
        "Scene: {} objects, {} lights",
        scene.object_count(),
        scene.lights().count()
    );
    info!(
        "Rendering {}x{} @ {}x{} samples, depth {}",
        config.width,
        config.height,
        config.anti_aliasing,
        config.anti_aliasing,
        config.depth
    );

    let tracer = RayTracer::new(config.background_color());
    let mut frame_buffer = FrameBuffer::new(config.width, config.height);

    let start = Instant::now();
    tracer.raytrace_scene(&mut frame_buffer, scene.num_reflections(), &scene);
    info!("Render time: {:.2}s", start.elapsed().as_secs_f64());

    frame_buffer
        .save_png(&args.output)
        .with_context(|| format!("Failed to write {}", args.output))?;
    info!("Saved {}", args.output);

    Ok(())
}
