//! Fixed-order layering: estimators feed the compositor once per
//! garment kind, each layer's output becoming the next layer's
//! background.

use image::{RgbImage, RgbaImage};

use crate::{
    compose::overlay::composite,
    foundation::core::{GarmentKind, PixelPoint, PixelSize},
    foundation::error::{DrapeError, DrapeResult},
    placement::estimator::FallbackCause,
    placement::policy::PlacementPolicy,
    pose::keypoints::KeypointSet,
};

/// The compositing order. Later layers draw over earlier ones; this is
/// a policy constant of the pipeline, not a per-call parameter.
pub const LAYER_ORDER: [GarmentKind; 4] = [
    GarmentKind::UpperBody,
    GarmentKind::LowerBody,
    GarmentKind::Headwear,
    GarmentKind::Eyewear,
];

/// The garment rasters to apply, one optional slot per kind.
#[derive(Clone, Debug, Default)]
pub struct Outfit {
    /// Torso garment with alpha.
    pub upper_body: Option<RgbaImage>,
    /// Hip-to-knee garment with alpha.
    pub lower_body: Option<RgbaImage>,
    /// Headwear with alpha.
    pub headwear: Option<RgbaImage>,
    /// Eyewear with alpha.
    pub eyewear: Option<RgbaImage>,
}

impl Outfit {
    /// The raster for one garment kind, if provided.
    pub fn garment(&self, kind: GarmentKind) -> Option<&RgbaImage> {
        match kind {
            GarmentKind::UpperBody => self.upper_body.as_ref(),
            GarmentKind::LowerBody => self.lower_body.as_ref(),
            GarmentKind::Headwear => self.headwear.as_ref(),
            GarmentKind::Eyewear => self.eyewear.as_ref(),
        }
    }

    /// True when no garment slot is filled.
    pub fn is_empty(&self) -> bool {
        LAYER_ORDER.iter().all(|&k| self.garment(k).is_none())
    }
}

/// Resolved placement for one applied or attempted layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerPlacement {
    /// Resolved target size.
    pub size: PixelSize,
    /// Resolved top-left draw position.
    pub position: PixelPoint,
    /// Fallback recorded by size estimation, if any.
    pub size_fallback: Option<FallbackCause>,
    /// Fallback recorded by position estimation, if any.
    pub position_fallback: Option<FallbackCause>,
}

/// What happened to one layer of the pipeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerStatus {
    /// The garment was composited onto the canvas.
    Applied,
    /// No asset was provided for this kind; canvas passed through.
    NoAsset,
    /// The compositor rejected the layer; canvas passed through.
    Skipped {
        /// The per-layer error rendered as text.
        reason: String,
    },
}

/// Structured outcome for one garment kind, in layer order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LayerOutcome {
    /// The garment kind of this layer.
    pub kind: GarmentKind,
    /// Applied, passed through, or skipped.
    pub status: LayerStatus,
    /// Placement details when estimation ran for this layer.
    pub placement: Option<LayerPlacement>,
}

/// Structured per-layer diagnostics for one `dress` run.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DressReport {
    /// One outcome per garment kind, in [`LAYER_ORDER`].
    pub layers: Vec<LayerOutcome>,
}

/// Apply an outfit to a photo; the report-free variant of
/// [`dress_with_report`].
pub fn dress(
    photo: &RgbImage,
    keypoints: &KeypointSet,
    outfit: &Outfit,
    policy: &PlacementPolicy,
) -> DrapeResult<RgbImage> {
    dress_with_report(photo, keypoints, outfit, policy).map(|(image, _)| image)
}

/// Apply an outfit to a photo, threading the canvas through the four
/// garment layers in [`LAYER_ORDER`], and report per-layer outcomes.
///
/// Failure policy: an empty photo is unrecoverable for the image;
/// per-layer `EmptyInput`/`Format` failures skip only that layer and
/// leave the canvas unchanged; estimator fallbacks are recorded in the
/// report and the pipeline continues with the degraded placement.
#[tracing::instrument(skip(photo, keypoints, outfit, policy))]
pub fn dress_with_report(
    photo: &RgbImage,
    keypoints: &KeypointSet,
    outfit: &Outfit,
    policy: &PlacementPolicy,
) -> DrapeResult<(RgbImage, DressReport)> {
    if photo.width() == 0 || photo.height() == 0 {
        return Err(DrapeError::empty_input("photo raster is empty"));
    }
    policy.validate()?;

    let mut canvas = photo.clone();
    let mut layers = Vec::with_capacity(LAYER_ORDER.len());

    for kind in LAYER_ORDER {
        let Some(garment) = outfit.garment(kind) else {
            layers.push(LayerOutcome {
                kind,
                status: LayerStatus::NoAsset,
                placement: None,
            });
            continue;
        };
        if garment.width() == 0 || garment.height() == 0 {
            let err = DrapeError::empty_input("garment raster is empty");
            tracing::warn!(kind = kind.name(), error = %err, "layer skipped");
            layers.push(LayerOutcome {
                kind,
                status: LayerStatus::Skipped {
                    reason: err.to_string(),
                },
                placement: None,
            });
            continue;
        }

        let rule = policy.rule(kind);
        let intrinsic = PixelSize::new(garment.width(), garment.height());
        let size = rule.estimate_size(keypoints, intrinsic);
        let position = rule.estimate_position(keypoints, size.size);
        let placement = LayerPlacement {
            size: size.size,
            position: position.position,
            size_fallback: size.fallback,
            position_fallback: position.fallback,
        };

        match composite(&canvas, garment, placement.position, placement.size) {
            Ok(next) => {
                canvas = next;
                layers.push(LayerOutcome {
                    kind,
                    status: LayerStatus::Applied,
                    placement: Some(placement),
                });
            }
            Err(err @ (DrapeError::EmptyInput(_) | DrapeError::Format(_))) => {
                tracing::warn!(kind = kind.name(), error = %err, "layer skipped, canvas unchanged");
                layers.push(LayerOutcome {
                    kind,
                    status: LayerStatus::Skipped {
                        reason: err.to_string(),
                    },
                    placement: Some(placement),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok((canvas, DressReport { layers }))
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;
