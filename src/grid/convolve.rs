//! Kernel convolution over a pixel grid.

use crate::types::{Kernel, Pixel};

use super::Grid;

/// Convolve every pixel of `grid` with `kernel`.
///
/// Neighbors that fall outside the grid contribute zero to the channel sums;
/// edge-of-grid geometry is not an error. Each in-grid term is truncated to
/// an integer before being added to its channel sum. That order is
/// load-bearing: truncate-then-sum differs from sum-then-truncate by one in
/// some pixels, and the engine's golden outputs depend on it.
///
/// Every output pixel depends only on fixed read-only positions in the
/// input, so the traversal order carries no meaning.
pub(crate) fn convolve(grid: &Grid, kernel: &Kernel) -> Grid {
    let size = kernel.size();
    let radius = kernel.radius() as isize;
    let height = grid.height();
    let width = grid.width();

    let mut pixels = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let mut red = 0i32;
            let mut green = 0i32;
            let mut blue = 0i32;

            for kh in 0..size {
                for kw in 0..size {
                    let src_row = row as isize + kh as isize - radius;
                    let src_col = col as isize + kw as isize - radius;
                    if src_row < 0
                        || src_row >= height as isize
                        || src_col < 0
                        || src_col >= width as isize
                    {
                        continue;
                    }

                    let neighbor = grid.get(src_row as usize, src_col as usize);
                    let weight = kernel.weight(kh, kw);
                    red += (neighbor.red as f64 * weight) as i32;
                    green += (neighbor.green as f64 * weight) as i32;
                    blue += (neighbor.blue as f64 * weight) as i32;
                }
            }

            pixels.push(Pixel::new(red, green, blue));
        }
    }

    Grid {
        pixels,
        width,
        height,
    }
}
