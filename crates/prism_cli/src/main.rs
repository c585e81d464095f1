use anyhow::{Context, Result};
use clap::Parser;
use prism_renderer::{render, render_parallel, ImageBuffer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};

/// Render a scene description file to a PNG image.
#[derive(Parser, Debug)]
#[command(name = "prism", version, about)]
struct Args {
    /// Scene description file
    scene: PathBuf,

    /// Directory the image is written to
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Base name of the image file
    #[arg(short, long, default_value = "raytracing")]
    name: String,

    /// Image width in pixels
    #[arg(short = 'W', long, default_value_t = 1000)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long, default_value_t = 1000)]
    height: u32,

    /// Jittered samples per pixel
    #[arg(short, long, default_value_t = 1)]
    samples: u32,

    /// Maximum recursion level for mirror and refraction rays
    #[arg(long, default_value_t = 4)]
    max_level: u32,

    /// Seed for jittered sampling
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Render on the calling thread only
    #[arg(long)]
    single_threaded: bool,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            samples_per_pixel: self.samples.max(1),
            max_level: self.max_level,
            seed: self.seed,
            ..RenderConfig::default()
        }
    }
}

/// First free path among `BASE.png`, `BASE_1.png`, `BASE_2.png`, ...
fn unique_output_path(dir: &Path, base: &str) -> PathBuf {
    let first = dir.join(format!("{base}.png"));
    if !first.exists() {
        return first;
    }

    (1..)
        .map(|n| dir.join(format!("{base}_{n}.png")))
        .find(|path| !path.exists())
        .unwrap_or(first)
}

fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        image.as_bytes(),
        image.width,
        image.height,
        image::ColorType::Rgb8,
    )
    .with_context(|| format!("Failed to write {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    log::info!("Starting Prism");

    let scene = prism_core::load_scene(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;

    let config = args.render_config();
    let image = if args.single_threaded {
        let mut rng = StdRng::seed_from_u64(config.seed);
        render(&scene, args.width, args.height, &config, &mut rng)
    } else {
        render_parallel(&scene, args.width, args.height, &config)
    };

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!("Failed to create output directory {}", args.output_dir.display())
    })?;

    let path = unique_output_path(&args.output_dir, &args.name);
    save_png(&image, &path)?;
    log::info!("Saved {}", path.display());

    Ok(())
}
