use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use orb_core::{load_scene, Scene};
use orb_renderer::{render, write_ppm, Camera, ImageBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr: stdout may be carrying the image
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Orb {}", env!("CARGO_PKG_VERSION"));

    run(&args)
}

fn run(args: &Args) -> Result<()> {
    let scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => Scene::builtin(),
    };
    log::debug!("Scene has {} spheres", scene.len());

    let mut camera = Camera::new().with_resolution(args.width, args.height);
    camera.initialize();

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let image = render(&camera, &scene, &args.render_config(), &mut rng);
    write_image(&image, args.output.as_deref())
}

fn write_image(image: &ImageBuffer, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_ppm(image, &mut BufWriter::new(file))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_ppm(image, &mut BufWriter::new(stdout.lock()))
                .context("Failed to write image to stdout")?;
        }
    }
    Ok(())
}
