// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which sample application to run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// 360° photo on an inward-facing sphere
    Photo,
    /// Cubemap environments with tap cycling
    Cubemap,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "skybox-viewer")]
#[command(about = "Scene-graph viewer samples on a headless host", long_about = None)]
pub struct Cli {
    /// Sample to run
    #[arg(long, value_enum, default_value = "cubemap")]
    pub sample: Sample,

    /// Simulated screen taps after initialization
    #[arg(long, default_value_t = 0)]
    pub taps: u32,

    /// Simulated frames to step per scene
    #[arg(long, default_value_t = 1)]
    pub steps: u32,

    /// Directory scanned for storage override files
    #[arg(long)]
    pub storage_dir: Option<PathBuf>,
}
