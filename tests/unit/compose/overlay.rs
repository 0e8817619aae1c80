use super::*;

use image::{Rgb, Rgba};

fn solid_rgb(w: u32, h: u32, px: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(w, h, Rgb(px))
}

fn solid_rgba(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}

#[test]
fn opaque_red_square_lands_at_position() {
    let background = solid_rgb(400, 400, [128, 128, 128]);
    let garment = solid_rgba(100, 100, [255, 0, 0, 255]);

    let out = composite(
        &background,
        &garment,
        PixelPoint::new(50, 50),
        PixelSize::new(100, 100),
    )
    .unwrap();

    for (x, y, px) in out.enumerate_pixels() {
        let inside = (50..150).contains(&x) && (50..150).contains(&y);
        let expected = if inside { [255, 0, 0] } else { [128, 128, 128] };
        assert_eq!(px.0, expected, "pixel ({x}, {y})");
    }
}

#[test]
fn background_is_not_mutated() {
    let background = solid_rgb(64, 64, [10, 20, 30]);
    let garment = solid_rgba(16, 16, [255, 255, 255, 255]);

    let _ = composite(
        &background,
        &garment,
        PixelPoint::new(0, 0),
        PixelSize::new(16, 16),
    )
    .unwrap();
    assert!(background.pixels().all(|p| p.0 == [10, 20, 30]));
}

#[test]
fn fully_transparent_garment_is_an_identity() {
    let background = solid_rgb(64, 64, [10, 20, 30]);
    let garment = solid_rgba(32, 32, [255, 255, 255, 0]);

    let out = composite(
        &background,
        &garment,
        PixelPoint::new(8, 8),
        PixelSize::new(32, 32),
    )
    .unwrap();
    assert_eq!(out.as_raw(), background.as_raw());
}

#[test]
fn fully_off_canvas_position_is_an_identity() {
    let background = solid_rgb(64, 64, [10, 20, 30]);
    let garment = solid_rgba(32, 32, [255, 0, 0, 255]);

    for position in [
        PixelPoint::new(1000, 1000),
        PixelPoint::new(-200, -200),
        PixelPoint::new(64, 0),
        PixelPoint::new(0, 64),
    ] {
        let out = composite(&background, &garment, position, PixelSize::new(32, 32)).unwrap();
        assert_eq!(out.as_raw(), background.as_raw(), "position {position:?}");
    }
}

#[test]
fn partially_off_canvas_garment_is_clipped_per_pixel() {
    let background = solid_rgb(100, 100, [0, 0, 0]);
    let garment = solid_rgba(40, 40, [0, 255, 0, 255]);

    let out = composite(
        &background,
        &garment,
        PixelPoint::new(-20, -20),
        PixelSize::new(40, 40),
    )
    .unwrap();

    assert_eq!(out.get_pixel(0, 0).0, [0, 255, 0]);
    assert_eq!(out.get_pixel(19, 19).0, [0, 255, 0]);
    assert_eq!(out.get_pixel(20, 20).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(0, 20).0, [0, 0, 0]);
}

#[test]
fn garment_is_resized_to_the_target_size() {
    let background = solid_rgb(100, 100, [0, 0, 0]);
    let garment = solid_rgba(10, 10, [255, 255, 0, 255]);

    let out = composite(
        &background,
        &garment,
        PixelPoint::new(0, 0),
        PixelSize::new(60, 30),
    )
    .unwrap();

    assert_eq!(out.get_pixel(59, 29).0, [255, 255, 0]);
    assert_eq!(out.get_pixel(60, 29).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(59, 30).0, [0, 0, 0]);
}

#[test]
fn empty_rasters_and_empty_target_are_rejected() {
    let background = solid_rgb(64, 64, [0, 0, 0]);
    let garment = solid_rgba(16, 16, [255, 0, 0, 255]);

    let err = composite(
        &RgbImage::new(0, 0),
        &garment,
        PixelPoint::new(0, 0),
        PixelSize::new(16, 16),
    )
    .unwrap_err();
    assert!(matches!(err, DrapeError::EmptyInput(_)));

    let err = composite(
        &background,
        &RgbaImage::new(0, 0),
        PixelPoint::new(0, 0),
        PixelSize::new(16, 16),
    )
    .unwrap_err();
    assert!(matches!(err, DrapeError::EmptyInput(_)));

    let err = composite(
        &background,
        &garment,
        PixelPoint::new(0, 0),
        PixelSize::new(0, 16),
    )
    .unwrap_err();
    assert!(matches!(err, DrapeError::EmptyInput(_)));
}
