use crate::foundation::error::{DrapeError, DrapeResult};

/// Coordinate value signaling "landmark not detected".
pub const SENTINEL_COORD: i32 = -1;

/// Number of landmarks in a BODY-25 pose.
pub const KEYPOINT_COUNT: usize = 25;

/// BODY-25 landmark indices.
///
/// The placement rules refer to landmarks through these names so the
/// empirical index choices read as domain constants. Several rules
/// deliberately keep index choices inherited from field tuning even
/// where the name looks surprising for the stated intent (for example
/// body garments center on [`L_EYE`]); see DESIGN.md.
pub mod body25 {
    /// Nose.
    pub const NOSE: usize = 0;
    /// Neck (shoulder midpoint).
    pub const NECK: usize = 1;
    /// Right shoulder.
    pub const R_SHOULDER: usize = 2;
    /// Right elbow.
    pub const R_ELBOW: usize = 3;
    /// Right wrist.
    pub const R_WRIST: usize = 4;
    /// Left shoulder.
    pub const L_SHOULDER: usize = 5;
    /// Left elbow.
    pub const L_ELBOW: usize = 6;
    /// Left wrist.
    pub const L_WRIST: usize = 7;
    /// Mid hip (pelvis).
    pub const MID_HIP: usize = 8;
    /// Right hip.
    pub const R_HIP: usize = 9;
    /// Right knee.
    pub const R_KNEE: usize = 10;
    /// Right ankle.
    pub const R_ANKLE: usize = 11;
    /// Left hip.
    pub const L_HIP: usize = 12;
    /// Left knee.
    pub const L_KNEE: usize = 13;
    /// Left ankle.
    pub const L_ANKLE: usize = 14;
    /// Right eye.
    pub const R_EYE: usize = 15;
    /// Left eye.
    pub const L_EYE: usize = 16;
    /// Right ear.
    pub const R_EAR: usize = 17;
    /// Left ear.
    pub const L_EAR: usize = 18;
    /// Left big toe.
    pub const L_BIG_TOE: usize = 19;
    /// Left small toe.
    pub const L_SMALL_TOE: usize = 20;
    /// Left heel.
    pub const L_HEEL: usize = 21;
    /// Right big toe.
    pub const R_BIG_TOE: usize = 22;
    /// Right small toe.
    pub const R_SMALL_TOE: usize = 23;
    /// Right heel.
    pub const R_HEEL: usize = 24;
}

/// One anatomical landmark: a pixel coordinate or the sentinel pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Keypoint {
    /// Horizontal pixel coordinate, or [`SENTINEL_COORD`].
    pub x: i32,
    /// Vertical pixel coordinate, or [`SENTINEL_COORD`].
    pub y: i32,
}

impl Keypoint {
    /// The undetected-landmark sentinel, `(-1, -1)`.
    pub const SENTINEL: Keypoint = Keypoint {
        x: SENTINEL_COORD,
        y: SENTINEL_COORD,
    };

    /// Construct a landmark from raw pixel coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True when both coordinates differ from the sentinel value.
    pub fn is_valid(self) -> bool {
        self.x != SENTINEL_COORD && self.y != SENTINEL_COORD
    }
}

/// Immutable BODY-25 landmark array produced once per photo.
///
/// Index-addressed; consumers must check validity of the specific
/// indices they depend on before reading coordinates.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KeypointSet {
    points: [Keypoint; KEYPOINT_COUNT],
}

impl KeypointSet {
    /// Build a landmark set from the pose source output.
    ///
    /// An empty slice is the detector's failure signal and yields
    /// [`DrapeError::Detection`]; so does any other length mismatch,
    /// since the BODY-25 contract is exactly 25 points.
    pub fn from_points(points: &[Keypoint]) -> DrapeResult<Self> {
        if points.is_empty() {
            return Err(DrapeError::detection("pose source returned no keypoints"));
        }
        if points.len() != KEYPOINT_COUNT {
            return Err(DrapeError::detection(format!(
                "pose source returned {} landmarks, expected {KEYPOINT_COUNT}",
                points.len()
            )));
        }
        let mut arr = [Keypoint::SENTINEL; KEYPOINT_COUNT];
        arr.copy_from_slice(points);
        Ok(Self { points: arr })
    }

    /// Landmark at `index`.
    ///
    /// # Panics
    /// Panics when `index >= KEYPOINT_COUNT`; rules are validated
    /// against that bound before use.
    pub fn point(&self, index: usize) -> Keypoint {
        self.points[index]
    }

    /// True when the landmark at `index` was detected.
    pub fn is_valid(&self, index: usize) -> bool {
        self.points[index].is_valid()
    }

    /// Subset of `indices` whose landmarks are undetected.
    pub fn missing(&self, indices: &[usize]) -> Vec<usize> {
        indices
            .iter()
            .copied()
            .filter(|&i| !self.is_valid(i))
            .collect()
    }

    /// All 25 landmarks in index order.
    pub fn points(&self) -> &[Keypoint; KEYPOINT_COUNT] {
        &self.points
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/keypoints.rs"]
mod tests;
