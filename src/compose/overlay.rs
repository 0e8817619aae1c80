use image::{
    RgbImage, RgbaImage,
    imageops::{self, FilterType},
};
use rayon::prelude::*;

use crate::{
    compose::blend::over_straight,
    foundation::core::{PixelPoint, PixelSize},
    foundation::error::{DrapeError, DrapeResult},
};

/// Alpha-composite a garment raster onto a photo.
///
/// The garment is resized to `target` with bilinear resampling, then
/// blended pixel by pixel at `position` (top-left offset, may be
/// negative). Pixels that land outside the background are skipped; the
/// overlay is best-effort, never a bounds failure. The background is
/// not mutated; a new canvas is returned so composites chain as a
/// deterministic pipeline.
///
/// Rows of the output are blended in parallel; each row only touches
/// its own disjoint slice of the canvas.
#[tracing::instrument(skip(background, garment))]
pub fn composite(
    background: &RgbImage,
    garment: &RgbaImage,
    position: PixelPoint,
    target: PixelSize,
) -> DrapeResult<RgbImage> {
    if background.width() == 0 || background.height() == 0 {
        return Err(DrapeError::empty_input("background raster is empty"));
    }
    if garment.width() == 0 || garment.height() == 0 {
        return Err(DrapeError::empty_input("garment raster is empty"));
    }
    if target.is_empty() {
        return Err(DrapeError::empty_input("target size is empty"));
    }

    let resized = imageops::resize(garment, target.width, target.height, FilterType::Triangle);

    let mut output = background.clone();
    let bg_w = background.width() as i32;
    let fg_w = resized.width() as i32;
    let fg_h = resized.height() as i32;
    let row_stride = background.width() as usize * 3;

    output
        .par_chunks_exact_mut(row_stride)
        .enumerate()
        .for_each(|(bg_y, row)| {
            let fg_y = bg_y as i32 - position.y;
            if fg_y < 0 || fg_y >= fg_h {
                return;
            }
            for fg_x in 0..fg_w {
                let bg_x = position.x + fg_x;
                if bg_x < 0 || bg_x >= bg_w {
                    continue;
                }
                let src = resized.get_pixel(fg_x as u32, fg_y as u32).0;
                let base = bg_x as usize * 3;
                let dst = [row[base], row[base + 1], row[base + 2]];
                row[base..base + 3].copy_from_slice(&over_straight(dst, src));
            }
        });

    Ok(output)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overlay.rs"]
mod tests;
