use anyhow::Context;
use image::{RgbImage, RgbaImage};

use crate::foundation::error::{DrapeError, DrapeResult};

/// Decode encoded photo bytes into an opaque RGB raster.
pub fn decode_photo(bytes: &[u8]) -> DrapeResult<RgbImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode photo from memory")?;
    let rgb = dyn_img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(DrapeError::empty_input("decoded photo has zero size"));
    }
    Ok(rgb)
}

/// Decode encoded garment bytes into an RGBA raster.
///
/// A garment without an alpha channel is a format error, never silently
/// treated as opaque.
pub fn decode_garment(bytes: &[u8]) -> DrapeResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode garment from memory")?;
    if !dyn_img.color().has_alpha() {
        return Err(DrapeError::format(
            "garment image must carry an alpha channel",
        ));
    }
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        return Err(DrapeError::empty_input("decoded garment has zero size"));
    }
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
