//! Run command implementation.
//!
//! Executes a transform script against a fresh session.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use crate::error::{ImgridError, Result};
use crate::io::{load_image, save_image};
use crate::parser::{parse_script, Statement};
use crate::session::Session;

/// Execute a transform script
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script file to execute (reads from stdin when omitted)
    pub script: Option<PathBuf>,
}

pub fn run(args: RunArgs) -> Result<()> {
    let source = match &args.script {
        Some(path) => fs::read_to_string(path).map_err(|e| ImgridError::Io {
            path: path.clone(),
            message: format!("Failed to read script: {}", e),
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let statements = parse_script(&source)?;

    let mut session = Session::new();
    let mut applied = 0;
    let mut saved = 0;

    for statement in statements {
        match statement {
            Statement::Load { path, name } => {
                let (grid, alpha) = load_image(&path)?;
                session.insert(name, grid, alpha);
            }
            Statement::Save { path, name } => {
                let image = session.get(&name)?;
                save_image(&path, &image.grid, image.alpha)?;
                saved += 1;
            }
            Statement::Apply { op, source, dest } => {
                session.apply(&op, &source, &dest)?;
                applied += 1;
            }
            Statement::Quit => break,
        }
    }

    println!(
        "Applied {} transform(s), saved {} file(s), {} image(s) in session",
        applied,
        saved,
        session.len()
    );

    Ok(())
}
