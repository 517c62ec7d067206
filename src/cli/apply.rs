//! Apply command implementation.
//!
//! Loads one image, applies a single operation, saves the result.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::io::{load_image, save_image};
use crate::parser::parse_operation;

/// Apply a single operation to an image file
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Input image file
    pub input: PathBuf,

    /// Output image file
    pub output: PathBuf,

    /// Operation tokens, e.g. `filter blur`, `brighten 20`, `downscale 50 50`
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub operation: Vec<String>,
}

pub fn run(args: ApplyArgs) -> Result<()> {
    let tokens: Vec<&str> = args.operation.iter().map(|s| s.as_str()).collect();
    let op = parse_operation(&tokens)?;

    let (grid, alpha) = load_image(&args.input)?;
    let result = op.apply(&grid)?;
    save_image(&args.output, &result, alpha)?;

    println!(
        "Wrote {} ({}x{})",
        args.output.display(),
        result.width(),
        result.height()
    );

    Ok(())
}
