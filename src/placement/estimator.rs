//! Size and position estimation from the landmark set.
//!
//! Both operations are pure; the only side effect is a `tracing` event
//! on each fallback. Estimation never fails hard: undetected landmarks
//! degrade to the garment's intrinsic size and the origin position, as
//! the pipeline documents.

use crate::{
    foundation::core::{PixelPoint, PixelSize},
    foundation::error::DrapeError,
    foundation::math::midpoint_i32,
    placement::policy::{PlacementRule, ReferenceSpan, SpanAxis},
    pose::keypoints::KeypointSet,
};

/// Why an estimator produced its degraded-mode output.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackCause {
    /// One or more required landmarks were undetected.
    MissingLandmark {
        /// The undetected landmark indices.
        indices: Vec<usize>,
    },
    /// A measured anatomical span collapsed to zero or negative.
    DegenerateMeasurement {
        /// Measured width span in pixels.
        width_span: i32,
        /// Measured height span in pixels, when the rule has one.
        height_span: Option<i32>,
    },
}

impl FallbackCause {
    /// The taxonomy error this cause corresponds to. Used for
    /// diagnostics only; these errors are always recovered locally.
    pub fn as_error(&self) -> DrapeError {
        match self {
            Self::MissingLandmark { indices } => {
                DrapeError::missing_landmark(format!("landmarks {indices:?} undetected"))
            }
            Self::DegenerateMeasurement {
                width_span,
                height_span,
            } => DrapeError::degenerate_measurement(format!(
                "width span {width_span}px, height span {height_span:?}"
            )),
        }
    }
}

/// Resolved garment size plus the fallback that produced it, if any.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SizeEstimate {
    /// Target size, clamped into the rule's range on the measured path.
    pub size: PixelSize,
    /// Present when the estimate is the degraded-mode output.
    pub fallback: Option<FallbackCause>,
}

/// Resolved garment position plus the fallback that produced it, if any.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PositionEstimate {
    /// Top-left draw offset on the photo.
    pub position: PixelPoint,
    /// Present when the estimate is the degraded-mode output.
    pub fallback: Option<FallbackCause>,
}

impl ReferenceSpan {
    /// Measure the span in pixels, premultiplier truncated through i32.
    fn measure(&self, keypoints: &KeypointSet) -> i32 {
        let a = keypoints.point(self.a);
        let b = keypoints.point(self.b);
        let raw = match self.axis {
            SpanAxis::X => (a.x - b.x).abs(),
            SpanAxis::Y => (a.y - b.y).abs(),
        };
        (raw as f32 * self.premultiplier) as i32
    }
}

impl PlacementRule {
    /// Estimate the target size for a garment of `intrinsic` pixel size.
    ///
    /// Degraded mode: any required landmark undetected, or a degenerate
    /// measured span under a guarded rule, yields the intrinsic size
    /// unchanged together with the [`FallbackCause`].
    pub fn estimate_size(&self, keypoints: &KeypointSet, intrinsic: PixelSize) -> SizeEstimate {
        let missing = keypoints.missing(&self.size_required);
        if !missing.is_empty() {
            let cause = FallbackCause::MissingLandmark { indices: missing };
            tracing::warn!(
                error = %cause.as_error(),
                "size estimation falling back to intrinsic garment size"
            );
            return SizeEstimate {
                size: intrinsic,
                fallback: Some(cause),
            };
        }

        let width_span = self.width.span.measure(keypoints);
        let height_span = self.height.as_ref().map(|h| h.span.measure(keypoints));
        if self.reject_degenerate && (width_span <= 0 || height_span.unwrap_or(1) <= 0) {
            let cause = FallbackCause::DegenerateMeasurement {
                width_span,
                height_span,
            };
            tracing::warn!(
                error = %cause.as_error(),
                "size estimation falling back to intrinsic garment size"
            );
            return SizeEstimate {
                size: intrinsic,
                fallback: Some(cause),
            };
        }

        // Preserve the f32 operation order: scale first, then re-expand
        // the intrinsic dimension through the scale.
        let scale_w = width_span as f32 / intrinsic.width as f32 * self.width.multiplier;
        let scale_h = match (&self.height, height_span) {
            (Some(h), Some(span)) => span as f32 / intrinsic.height as f32 * h.multiplier,
            _ => scale_w,
        };
        let w = (intrinsic.width as f32 * scale_w) as i32;
        let h = (intrinsic.height as f32 * scale_h) as i32;

        SizeEstimate {
            size: PixelSize::new(
                w.clamp(self.min_size, self.max_size) as u32,
                h.clamp(self.min_size, self.max_size) as u32,
            ),
            fallback: None,
        }
    }

    /// Estimate the top-left draw position for the resolved size.
    ///
    /// Degraded mode: any required landmark undetected yields `(0, 0)`
    /// together with the [`FallbackCause`].
    pub fn estimate_position(
        &self,
        keypoints: &KeypointSet,
        resolved: PixelSize,
    ) -> PositionEstimate {
        let missing = keypoints.missing(&self.position_required);
        if !missing.is_empty() {
            let cause = FallbackCause::MissingLandmark { indices: missing };
            tracing::warn!(
                error = %cause.as_error(),
                "position estimation falling back to origin"
            );
            return PositionEstimate {
                position: PixelPoint::default(),
                fallback: Some(cause),
            };
        }

        let w = resolved.width as i32;
        let h = resolved.height as i32;
        let center_x = match self.anchor.center_b {
            Some(b) => midpoint_i32(
                keypoints.point(self.anchor.center_a).x,
                keypoints.point(b).x,
            ),
            None => keypoints.point(self.anchor.center_a).x,
        };
        let x = center_x - w / 2;
        let y = keypoints.point(self.anchor.row).y - self.anchor.shift.amount(h);

        PositionEstimate {
            position: PixelPoint::new(x, y),
            fallback: None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/estimator.rs"]
mod tests;
