//! Statement and operation types produced by the script parser.

use std::path::PathBuf;

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{Component, FilterKind, TransformKind};

/// A single engine operation with its scalar arguments bound.
///
/// Operation names and their arguments are resolved to this enum at the
/// parse boundary; past this point nothing in the pipeline handles raw
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Add a (possibly negative) delta to every channel of every pixel.
    Brighten(i32),
    VerticalFlip,
    HorizontalFlip,
    /// Reduce every pixel to a channel or derived component.
    Greyscale(Component),
    ColorTransformation(TransformKind),
    Filter(FilterKind),
    Downscale {
        width_percent: u32,
        height_percent: u32,
    },
}

impl Operation {
    /// Run this operation against a grid, producing a new grid.
    pub fn apply(&self, grid: &Grid) -> Result<Grid> {
        match *self {
            Operation::Brighten(delta) => Ok(grid.brighten(delta)),
            Operation::VerticalFlip => Ok(grid.flip_vertical()),
            Operation::HorizontalFlip => Ok(grid.flip_horizontal()),
            Operation::Greyscale(component) => Ok(grid.channel_component(component)),
            Operation::ColorTransformation(kind) => Ok(grid.color_transformation(kind)),
            Operation::Filter(kind) => Ok(grid.filter(kind)),
            Operation::Downscale {
                width_percent,
                height_percent,
            } => grid.downscale(width_percent, height_percent),
        }
    }
}

/// One parsed script statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Decode an image file and bind it under a name.
    Load { path: PathBuf, name: String },

    /// Encode a named image to a file.
    Save { path: PathBuf, name: String },

    /// Apply one operation to `source` and bind the result as `dest`.
    Apply {
        op: Operation,
        source: String,
        dest: String,
    },

    /// Stop executing the script.
    Quit,
}
