use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
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
///
/// Size and quality flags override the values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "prism")]
#[command(about = "Render the Prism demo scene with a Whitted-style ray tracer")]
pub struct Args {
    /// JSON render config (width, height, depth, anti_aliasing, background)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Reflection/refraction recursion depth
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Samples per pixel along each axis
    #[arg(short, long)]
    pub anti_aliasing: Option<u32>,

    /// Image wrapped around the closed cylinder
    #[arg(short, long)]
    pub texture: Option<String>,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: String,

    /// Set the logging level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,
}
