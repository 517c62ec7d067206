//! imgrid - Scripted raster image transforms
//!
//! A library for applying a fixed catalogue of pixel-level transforms
//! (brightness, flips, channel extraction, convolution filters, color
//! matrices, percentage-based resampling) to immutable pixel grids, plus
//! the script interpreter and named-image session store that drive them.

pub mod cli;
pub mod error;
pub mod grid;
pub mod io;
pub mod parser;
pub mod session;
pub mod types;

pub use error::{ImgridError, Result};
pub use grid::{Grid, SEPIA_MATRIX};
pub use io::{load_image, save_image};
pub use parser::{parse_line, parse_operation, parse_script, Operation, Statement};
pub use session::{Session, StoredImage};
pub use types::{Component, FilterKind, Kernel, Pixel, TransformKind, MAX_CHANNEL_VALUE};
