//! Image file loading and saving.
//!
//! All format work is delegated to the `image` crate; this module only
//! converts between decoded buffers and [`Grid`]s. Alpha is carried as one
//! uniform scalar per image: loading takes the alpha of the first pixel
//! (255 for formats without an alpha channel), saving applies the stored
//! scalar to every pixel.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{ImgridError, Result};
use crate::grid::Grid;
use crate::types::Pixel;

/// Decode an image file into a grid and its opacity scalar.
pub fn load_image(path: &Path) -> Result<(Grid, u8)> {
    let decoded = image::open(path).map_err(|e| ImgridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to decode image: {}", e),
    })?;
    let rgba = decoded.to_rgba8();

    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(ImgridError::invalid(format!(
            "image {} has no pixels",
            path.display()
        )));
    }

    let alpha = rgba.get_pixel(0, 0).0[3];
    let pixels = rgba
        .pixels()
        .map(|p| Pixel::rgb(p.0[0], p.0[1], p.0[2]))
        .collect();

    let grid = Grid::from_pixels(pixels, width as usize, height as usize)?;
    Ok((grid, alpha))
}

/// Encode a grid to an image file, applying `alpha` uniformly.
///
/// The output format is inferred from the file extension by the codec.
pub fn save_image(path: &Path, grid: &Grid, alpha: u8) -> Result<()> {
    let mut img: RgbaImage = ImageBuffer::new(grid.width() as u32, grid.height() as u32);

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pixel = grid.get(row, col);
            img.put_pixel(
                col as u32,
                row as u32,
                Rgba([pixel.red, pixel.green, pixel.blue, alpha]),
            );
        }
    }

    img.save(path).map_err(|e| ImgridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write image: {}", e),
    })?;

    Ok(())
}
