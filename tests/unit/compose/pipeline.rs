use super::*;

use image::{Rgb, Rgba};

use crate::pose::keypoints::{KEYPOINT_COUNT, Keypoint};

fn gray_photo() -> RgbImage {
    RgbImage::from_pixel(400, 400, Rgb([128, 128, 128]))
}

fn solid_garment(w: u32, h: u32, px: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(px))
}

fn all_sentinel() -> KeypointSet {
    KeypointSet::from_points(&[Keypoint::SENTINEL; KEYPOINT_COUNT]).unwrap()
}

#[test]
fn layer_order_is_a_fixed_policy() {
    assert_eq!(
        LAYER_ORDER,
        [
            GarmentKind::UpperBody,
            GarmentKind::LowerBody,
            GarmentKind::Headwear,
            GarmentKind::Eyewear,
        ]
    );
}

#[test]
fn all_assets_missing_passes_the_photo_through() {
    let photo = gray_photo();
    let (out, report) = dress_with_report(
        &photo,
        &all_sentinel(),
        &Outfit::default(),
        &PlacementPolicy::default(),
    )
    .unwrap();

    assert_eq!(out.as_raw(), photo.as_raw());
    assert_eq!(report.layers.len(), 4);
    assert!(
        report
            .layers
            .iter()
            .all(|l| l.status == LayerStatus::NoAsset)
    );
}

#[test]
fn undetected_landmarks_degrade_to_intrinsic_at_origin() {
    let photo = gray_photo();
    let outfit = Outfit {
        upper_body: Some(solid_garment(60, 60, [255, 0, 0, 255])),
        ..Outfit::default()
    };

    let (out, report) = dress_with_report(
        &photo,
        &all_sentinel(),
        &outfit,
        &PlacementPolicy::default(),
    )
    .unwrap();

    // Degraded placement: intrinsic 60x60 at (0, 0).
    assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(out.get_pixel(59, 59).0, [255, 0, 0]);
    assert_eq!(out.get_pixel(60, 60).0, [128, 128, 128]);

    let upper = &report.layers[0];
    assert_eq!(upper.status, LayerStatus::Applied);
    let placement = upper.placement.as_ref().unwrap();
    assert_eq!(placement.size, PixelSize::new(60, 60));
    assert_eq!(placement.position, PixelPoint::new(0, 0));
    assert!(matches!(
        placement.size_fallback,
        Some(FallbackCause::MissingLandmark { .. })
    ));
    assert!(matches!(
        placement.position_fallback,
        Some(FallbackCause::MissingLandmark { .. })
    ));
}

#[test]
fn later_layers_draw_over_earlier_ones() {
    let photo = gray_photo();
    let outfit = Outfit {
        upper_body: Some(solid_garment(60, 60, [255, 0, 0, 255])),
        headwear: Some(solid_garment(60, 60, [0, 0, 255, 255])),
        ..Outfit::default()
    };

    // Both fall back to (0, 0); headwear composites after upper-body.
    let out = dress(
        &photo,
        &all_sentinel(),
        &outfit,
        &PlacementPolicy::default(),
    )
    .unwrap();
    assert_eq!(out.get_pixel(10, 10).0, [0, 0, 255]);
}

#[test]
fn zero_sized_garment_skips_only_its_layer() {
    let photo = gray_photo();
    let outfit = Outfit {
        upper_body: Some(RgbaImage::new(0, 0)),
        eyewear: Some(solid_garment(40, 40, [0, 255, 0, 255])),
        ..Outfit::default()
    };

    let (out, report) = dress_with_report(
        &photo,
        &all_sentinel(),
        &outfit,
        &PlacementPolicy::default(),
    )
    .unwrap();

    assert!(matches!(
        report.layers[0].status,
        LayerStatus::Skipped { .. }
    ));
    assert_eq!(report.layers[3].status, LayerStatus::Applied);
    // The eyewear layer still landed.
    assert_eq!(out.get_pixel(10, 10).0, [0, 255, 0]);
}

#[test]
fn empty_photo_is_unrecoverable() {
    let err = dress(
        &RgbImage::new(0, 0),
        &all_sentinel(),
        &Outfit::default(),
        &PlacementPolicy::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DrapeError::EmptyInput(_)));
}

#[test]
fn invalid_policy_is_rejected_up_front() {
    let mut policy = PlacementPolicy::default();
    policy.upper_body.min_size = -5;

    let err = dress(&gray_photo(), &all_sentinel(), &Outfit::default(), &policy).unwrap_err();
    assert!(matches!(err, DrapeError::Validation(_)));
}

#[test]
fn report_serializes_to_json() {
    let outfit = Outfit {
        headwear: Some(solid_garment(30, 30, [0, 0, 255, 255])),
        ..Outfit::default()
    };
    let (_, report) = dress_with_report(
        &gray_photo(),
        &all_sentinel(),
        &outfit,
        &PlacementPolicy::default(),
    )
    .unwrap();

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"headwear\""));
    assert!(json.contains("missing_landmark"));
}
