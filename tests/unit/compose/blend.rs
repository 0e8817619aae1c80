use super::*;

#[test]
fn zero_alpha_leaves_background_bit_identical() {
    let dst = [13, 77, 201];
    assert_eq!(over_straight(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn full_alpha_replaces_background_bit_identical() {
    let dst = [13, 77, 201];
    assert_eq!(over_straight(dst, [200, 10, 0, 255]), [200, 10, 0]);
}

#[test]
fn half_alpha_mixes_channels_independently() {
    let out = over_straight([10, 20, 30], [200, 100, 50, 128]);
    // a = 128/255; rounded per channel.
    assert_eq!(out, [105, 60, 40]);
}

#[test]
fn blend_saturates_into_u8_range() {
    let out = over_straight([255, 255, 255], [255, 255, 255, 200]);
    assert_eq!(out, [255, 255, 255]);
}
