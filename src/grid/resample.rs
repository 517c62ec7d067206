//! Percentage-based bilinear downscale.
//!
//! The source-coordinate mapping is `curr = target_index / source_dim *
//! target_dim`: it scales by the TARGET dimension, not the inverse. The
//! golden outputs depend on this exact mapping, so it must not be swapped
//! for the textbook inverse form.

use crate::error::{ImgridError, Result};
use crate::types::Pixel;

use super::Grid;

/// Shrink `grid` to `width_percent` x `height_percent` of its size.
///
/// Percentages must be in `1..=100` and must not shrink a dimension to
/// zero; both cases fail with `InvalidArgument`.
pub(crate) fn downscale(grid: &Grid, width_percent: u32, height_percent: u32) -> Result<Grid> {
    for percent in [width_percent, height_percent] {
        if percent == 0 || percent > 100 {
            return Err(ImgridError::InvalidArgument {
                message: format!("downscale percentage {} is out of range", percent),
                help: Some("percentages must be between 1 and 100".to_string()),
            });
        }
    }

    let height = grid.height();
    let width = grid.width();
    let new_height = (height as f64 * (height_percent as f64 / 100.0)) as usize;
    let new_width = (width as f64 * (width_percent as f64 / 100.0)) as usize;

    if new_height == 0 || new_width == 0 {
        return Err(ImgridError::InvalidArgument {
            message: format!(
                "downscaling a {}x{} image by {}%x{}% leaves no pixels",
                width, height, width_percent, height_percent
            ),
            help: None,
        });
    }

    let mut pixels = Vec::with_capacity(new_width * new_height);
    for h in 0..new_height {
        for w in 0..new_width {
            pixels.push(sample(grid, h, w, new_height, new_width));
        }
    }

    Grid::from_pixels(pixels, new_width, new_height)
}

/// Bilinearly sample the source pixel for target cell `(h, w)`.
fn sample(grid: &Grid, h: usize, w: usize, new_height: usize, new_width: usize) -> Pixel {
    let height = grid.height() as isize;
    let width = grid.width() as isize;

    let curr_h = h as f64 / height as f64 * new_height as f64;
    let curr_w = w as f64 / width as f64 * new_width as f64;

    let mut floor_h = curr_h.floor() as isize;
    let mut ceil_h = floor_h + 1;
    let mut floor_w = curr_w.floor() as isize;
    let mut ceil_w = floor_w + 1;

    // Clamp the corner coordinates into the source extent before sampling.
    if floor_h >= height {
        floor_h = height - 1;
    }
    if ceil_h >= height {
        ceil_h = height - 1;
    }
    if floor_w >= width {
        floor_w = width - 1;
    }
    if ceil_w >= width {
        ceil_w = width - 1;
    }

    let top_left = grid.get(floor_h as usize, floor_w as usize);
    let bottom_left = grid.get(ceil_h as usize, floor_w as usize);
    let top_right = grid.get(floor_h as usize, ceil_w as usize);
    let bottom_right = grid.get(ceil_h as usize, ceil_w as usize);

    // A ceil coordinate that landed exactly on the fractional coordinate
    // would zero both weights; bump it after sampling, not before.
    if curr_h == ceil_h as f64 {
        ceil_h += 1;
    }
    if curr_w == ceil_w as f64 {
        ceil_w += 1;
    }

    let blend = |tl: u8, bl: u8, tr: u8, br: u8| -> i32 {
        let left =
            bl as f64 * (curr_h - floor_h as f64) + tl as f64 * (ceil_h as f64 - curr_h);
        let right =
            br as f64 * (curr_h - floor_h as f64) + tr as f64 * (ceil_h as f64 - curr_h);
        (right * (curr_w - floor_w as f64) + left * (ceil_w as f64 - curr_w)) as i32
    };

    Pixel::new(
        blend(
            top_left.red,
            bottom_left.red,
            top_right.red,
            bottom_right.red,
        ),
        blend(
            top_left.green,
            bottom_left.green,
            top_right.green,
            bottom_right.green,
        ),
        blend(
            top_left.blue,
            bottom_left.blue,
            top_right.blue,
            bottom_right.blue,
        ),
    )
}
