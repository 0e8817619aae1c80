//! Drape is a keypoint-driven garment overlay and compositing engine.
//!
//! Given one photo of a person, a BODY-25 landmark set from an external
//! pose source, and up to four transparent garment rasters, Drape
//! resolves where and how large each garment should be and alpha-blends
//! them onto the photo in a fixed layer order.
//!
//! # Pipeline overview
//!
//! 1. **Detect** (external): a [`PoseSource`] produces the sentinel-coded
//!    [`KeypointSet`] for one photo.
//! 2. **Place**: per garment kind, the [`PlacementPolicy`] rule turns
//!    landmarks + intrinsic garment size into a clamped target size and
//!    a top-left position ([`PlacementRule::estimate_size`] /
//!    [`PlacementRule::estimate_position`]).
//! 3. **Composite**: [`composite`] resizes the garment and blends it
//!    onto the canvas with straight alpha, clipping per pixel.
//! 4. **Layer**: [`dress`] threads the canvas through the four kinds in
//!    [`LAYER_ORDER`], skipping absent assets.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: estimation and compositing are pure for a given
//!   input; each canvas version is immutable once produced.
//! - **Fail soft where the domain allows it**: undetected landmarks
//!   degrade to documented fallback placements with structured
//!   diagnostics; only an empty photo or an empty detection result is
//!   fatal for an image.
//! - **Policy is data**: the empirical placement table serializes and
//!   can be tuned without touching estimator code.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod annotate;
mod assets;
mod compose;
mod foundation;
mod placement;
mod pose;

pub use annotate::draw_keypoint_markers;
pub use assets::decode::{decode_garment, decode_photo};
pub use compose::blend::over_straight;
pub use compose::overlay::composite;
pub use compose::pipeline::{
    DressReport, LAYER_ORDER, LayerOutcome, LayerPlacement, LayerStatus, Outfit, dress,
    dress_with_report,
};
pub use foundation::core::{GarmentKind, PixelPoint, PixelSize};
pub use foundation::error::{DrapeError, DrapeResult};
pub use placement::estimator::{FallbackCause, PositionEstimate, SizeEstimate};
pub use placement::policy::{
    AnchorRule, PlacementPolicy, PlacementRule, ReferenceSpan, SpanAxis, SpanRule, VerticalShift,
};
pub use pose::keypoints::{KEYPOINT_COUNT, Keypoint, KeypointSet, SENTINEL_COORD, body25};
pub use pose::source::PoseSource;
