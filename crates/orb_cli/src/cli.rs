use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use orb_renderer::RenderConfig;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "orb")]
#[command(about = "Path trace spheres under a sky and write a binary PPM image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of jittered samples per pixel
    #[arg(long, short = 's', default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples_per_pixel: u32,

    /// Maximum number of diffuse bounces per path
    #[arg(long, default_value_t = 10)]
    pub max_depth: u32,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON scene file (built-in four-sphere scene when omitted)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output file (standard output when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Multiply bounced light by the surface color
    #[arg(long)]
    pub tint_by_albedo: bool,

    /// Logging level, written to standard error
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

impl Args {
    /// Renderer settings selected by these arguments.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            tint_by_albedo: self.tint_by_albedo,
        }
    }
}
