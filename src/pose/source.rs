use image::RgbImage;

use crate::{foundation::error::DrapeResult, pose::keypoints::KeypointSet};

/// Upstream landmark detector boundary.
///
/// The engine never runs pose estimation itself; a `PoseSource`
/// implementation wraps whatever network or fixture produces the
/// BODY-25 array. Implementations signal detection failure through
/// [`crate::DrapeError::Detection`] (typically by building the set via
/// [`KeypointSet::from_points`] on an empty result).
pub trait PoseSource {
    /// Detect the landmark set for one photo.
    fn detect(&mut self, photo: &RgbImage) -> DrapeResult<KeypointSet>;
}
