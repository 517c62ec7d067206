pub mod apply;
pub mod run;

use clap::{Parser, Subcommand};

/// imgrid - Scripted raster image transforms
#[derive(Parser, Debug)]
#[command(name = "imgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Execute a transform script
    Run(run::RunArgs),

    /// Apply a single operation to an image file
    Apply(apply::ApplyArgs),
}
