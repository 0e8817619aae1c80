//! Debug landmark markers. Purely additive: nothing in the pipeline
//! requires this module.

use image::{Rgb, RgbImage};

use crate::pose::keypoints::{KeypointSet, body25};

/// Landmarks the default placement table reads; drawn darker so a human
/// can eyeball the inputs that actually moved a garment.
const PLACEMENT_LANDMARKS: [usize; 5] = [
    body25::NECK,
    body25::R_SHOULDER,
    body25::L_SHOULDER,
    body25::MID_HIP,
    body25::R_HEEL,
];

const MARKER_RADIUS: i32 = 5;
const USED_COLOR: Rgb<u8> = Rgb([0, 0, 0]);
const OTHER_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Draw a filled disc at every detected landmark.
///
/// Placement-relevant landmarks are black, the rest white. Writes are
/// bounds-checked, so markers near the border are clipped.
pub fn draw_keypoint_markers(image: &mut RgbImage, keypoints: &KeypointSet) {
    for (index, kp) in keypoints.points().iter().enumerate() {
        if !kp.is_valid() {
            continue;
        }
        let color = if PLACEMENT_LANDMARKS.contains(&index) {
            USED_COLOR
        } else {
            OTHER_COLOR
        };
        fill_disc(image, kp.x, kp.y, MARKER_RADIUS, color);
    }
}

fn fill_disc(image: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    let w = image.width() as i32;
    let h = image.height() as i32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let x = cx + dx;
            let y = cy + dy;
            if x < 0 || x >= w || y < 0 || y >= h {
                continue;
            }
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/annotate.rs"]
mod tests;
