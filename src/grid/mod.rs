//! The immutable pixel grid and its transform entry points.
//!
//! A [`Grid`] is a rectangular, row-major collection of [`Pixel`]s with
//! fixed dimensions. Every transform is a pure grid-to-grid function: the
//! receiver is never mutated, a fresh grid is always allocated, and the
//! original stays safe to read from any number of threads. Alpha, filenames
//! and named-image bindings live outside this type (see [`crate::session`]).

mod convolve;
mod resample;
mod transform;

pub use transform::SEPIA_MATRIX;

use crate::error::{ImgridError, Result};
use crate::types::{Component, FilterKind, Pixel, TransformKind};

/// An immutable rectangular grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major pixel storage, exactly `width * height` entries.
    pixels: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid from rows of pixels.
    ///
    /// Fails with `InvalidArgument` if there are no rows, a row is empty,
    /// or the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());

        if height == 0 || width == 0 {
            return Err(ImgridError::invalid("image data is empty"));
        }
        if let Some(bad) = rows.iter().position(|r| r.len() != width) {
            return Err(ImgridError::InvalidArgument {
                message: format!(
                    "image rows are not rectangular: row {} has {} pixels, expected {}",
                    bad,
                    rows[bad].len(),
                    width
                ),
                help: None,
            });
        }

        let pixels = rows.into_iter().flatten().collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Create a grid from rows of raw `(r, g, b)` triples, as supplied by
    /// an external codec.
    pub fn from_raw(rows: &[Vec<(u8, u8, u8)>]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&(r, g, b)| Pixel::rgb(r, g, b)).collect())
                .collect(),
        )
    }

    /// Create a grid from flat row-major pixel storage.
    pub fn from_pixels(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImgridError::invalid("grid dimensions must be at least 1x1"));
        }
        if pixels.len() != width * height {
            return Err(ImgridError::InvalidArgument {
                message: format!(
                    "pixel count {} does not match {}x{} grid",
                    pixels.len(),
                    width,
                    height
                ),
                help: None,
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds; callers inside the engine
    /// always index within the grid they were handed.
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        debug_assert!(row < self.height && col < self.width);
        self.pixels[row * self.width + col]
    }

    /// A defensive copy of the pixel data as rows of `(r, g, b)` triples.
    pub fn snapshot(&self) -> Vec<Vec<(u8, u8, u8)>> {
        self.pixels
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|p| (p.red, p.green, p.blue))
                    .collect()
            })
            .collect()
    }

    /// Apply a per-pixel function, producing a same-sized grid.
    pub(crate) fn map(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Build a same-sized grid from a per-position function.
    fn from_fn(&self, f: impl Fn(usize, usize) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in 0..self.height {
            for col in 0..self.width {
                pixels.push(f(row, col));
            }
        }
        Self {
            pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Brighten (or darken, for negative `delta`) every pixel.
    pub fn brighten(&self, delta: i32) -> Self {
        self.map(|p| p.brighten(delta))
    }

    /// Mirror the grid top-to-bottom.
    pub fn flip_vertical(&self) -> Self {
        self.from_fn(|row, col| self.get(self.height - 1 - row, col))
    }

    /// Mirror the grid left-to-right.
    pub fn flip_horizontal(&self) -> Self {
        self.from_fn(|row, col| self.get(row, self.width - 1 - col))
    }

    /// Reduce every pixel to the given channel or derived component.
    pub fn channel_component(&self, component: Component) -> Self {
        self.map(|p| p.reduce_to_component(component))
    }

    /// Apply a named convolution filter.
    pub fn filter(&self, kind: FilterKind) -> Self {
        convolve::convolve(self, &kind.kernel())
    }

    /// Apply a whole-grid color transformation.
    pub fn color_transformation(&self, kind: TransformKind) -> Self {
        transform::color_transform(self, kind)
    }

    /// Shrink the grid to the given width and height percentages using
    /// bilinear resampling.
    pub fn downscale(&self, width_percent: u32, height_percent: u32) -> Result<Self> {
        resample::downscale(self, width_percent, height_percent)
    }
}
