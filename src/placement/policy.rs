//! Placement policy: the per-garment empirical table driving size and
//! position estimation.
//!
//! The numbers here are field-tuned against the BODY-25 landmark model
//! and are data, not code: the whole table serializes, so a policy can
//! be loaded from JSON and tuned without touching the estimators. The
//! index choices are kept literally as tuned, including the ones whose
//! landmark names look surprising for the stated intent (body garments
//! center on `L_EYE`, eyewear measures `L_EAR`↔`NOSE`); changing any of
//! them changes placement on real photos and needs a domain owner's
//! sign-off. See DESIGN.md.

use anyhow::Context;

use crate::{
    foundation::core::GarmentKind,
    foundation::error::{DrapeError, DrapeResult},
    pose::keypoints::{KEYPOINT_COUNT, body25},
};

/// Coordinate axis a reference span is measured along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanAxis {
    /// Horizontal distance between two landmark x coordinates.
    X,
    /// Vertical distance between two landmark y coordinates.
    Y,
}

/// An anatomical reference distance between two landmarks.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReferenceSpan {
    /// First landmark index.
    pub a: usize,
    /// Second landmark index.
    pub b: usize,
    /// Axis the absolute difference is taken along.
    pub axis: SpanAxis,
    /// Multiplier baked into the measurement itself, truncated through
    /// integer pixels (headwear measures `|x16-x17| * 2.5` as one span).
    #[serde(default = "default_premultiplier")]
    pub premultiplier: f32,
}

fn default_premultiplier() -> f32 {
    1.0
}

/// One dimension's scaling rule: a reference span and its empirical
/// multiplier.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpanRule {
    /// The measured anatomical span.
    pub span: ReferenceSpan,
    /// Garment-specific empirical multiplier applied to the scale.
    pub multiplier: f32,
}

/// Upward shift applied from the anchor row when positioning.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalShift {
    /// The garment starts at the anchor row.
    None,
    /// Shift up by the full resolved height (sits above the anchor).
    FullHeight,
    /// Shift up by `height / n`, integer division.
    IntQuotient(i32),
    /// Shift up by `trunc(height / q)`, computed in f32.
    FloatQuotient(f32),
}

impl VerticalShift {
    /// Shift in pixels for a resolved garment height.
    pub fn amount(self, height: i32) -> i32 {
        match self {
            Self::None => 0,
            Self::FullHeight => height,
            Self::IntQuotient(n) => height / n,
            Self::FloatQuotient(q) => (height as f32 / q) as i32,
        }
    }
}

/// How a garment anchors to the landmark set once its size is known.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorRule {
    /// Landmark whose x coordinate centers the garment.
    pub center_a: usize,
    /// Optional second landmark; when present the garment centers on
    /// the integer midpoint of the two x coordinates.
    pub center_b: Option<usize>,
    /// Landmark whose y coordinate anchors the garment vertically.
    pub row: usize,
    /// Upward shift from the anchor row.
    pub shift: VerticalShift,
}

/// Complete placement rule for one garment kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRule {
    /// Landmarks that must be detected before size estimation runs.
    pub size_required: Vec<usize>,
    /// Landmarks that must be detected before position estimation runs.
    pub position_required: Vec<usize>,
    /// Width scaling rule.
    pub width: SpanRule,
    /// Height scaling rule; `None` scales height uniformly with width.
    pub height: Option<SpanRule>,
    /// Lower clamp bound for each resolved dimension, pixels.
    pub min_size: i32,
    /// Upper clamp bound for each resolved dimension, pixels.
    pub max_size: i32,
    /// Treat a zero-or-negative measured span as a degenerate
    /// measurement and fall back to the intrinsic size.
    pub reject_degenerate: bool,
    /// Position anchor.
    pub anchor: AnchorRule,
}

/// The full placement table, one rule per garment kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementPolicy {
    /// Rule for torso garments.
    pub upper_body: PlacementRule,
    /// Rule for hip-to-knee garments.
    pub lower_body: PlacementRule,
    /// Rule for headwear.
    pub headwear: PlacementRule,
    /// Rule for eyewear.
    pub eyewear: PlacementRule,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        use body25::*;

        Self {
            upper_body: PlacementRule {
                size_required: vec![R_SHOULDER, L_SHOULDER, MID_HIP],
                position_required: vec![NECK, R_SHOULDER, L_SHOULDER],
                width: SpanRule {
                    span: ReferenceSpan {
                        a: L_SHOULDER,
                        b: R_SHOULDER,
                        axis: SpanAxis::X,
                        premultiplier: 1.0,
                    },
                    multiplier: 2.2,
                },
                height: Some(SpanRule {
                    span: ReferenceSpan {
                        a: MID_HIP,
                        b: NECK,
                        axis: SpanAxis::Y,
                        premultiplier: 1.0,
                    },
                    multiplier: 1.2,
                }),
                min_size: 50,
                max_size: 1000,
                reject_degenerate: true,
                anchor: AnchorRule {
                    center_a: MID_HIP,
                    center_b: Some(L_EYE),
                    row: NECK,
                    shift: VerticalShift::IntQuotient(10),
                },
            },
            lower_body: PlacementRule {
                size_required: vec![R_HIP, L_HIP, R_KNEE, L_KNEE],
                position_required: vec![MID_HIP, R_HIP, L_HIP],
                width: SpanRule {
                    span: ReferenceSpan {
                        a: L_SHOULDER,
                        b: R_SHOULDER,
                        axis: SpanAxis::X,
                        premultiplier: 1.0,
                    },
                    multiplier: 1.6,
                },
                height: Some(SpanRule {
                    span: ReferenceSpan {
                        a: R_KNEE,
                        b: R_HEEL,
                        axis: SpanAxis::Y,
                        premultiplier: 1.0,
                    },
                    multiplier: 2.0,
                }),
                min_size: 50,
                max_size: 1000,
                reject_degenerate: true,
                anchor: AnchorRule {
                    center_a: MID_HIP,
                    center_b: Some(L_EYE),
                    row: MID_HIP,
                    shift: VerticalShift::None,
                },
            },
            headwear: PlacementRule {
                size_required: vec![NOSE, NECK],
                position_required: vec![NOSE],
                width: SpanRule {
                    span: ReferenceSpan {
                        a: L_EYE,
                        b: R_EAR,
                        axis: SpanAxis::X,
                        premultiplier: 2.5,
                    },
                    multiplier: 1.0,
                },
                height: None,
                min_size: 50,
                max_size: 500,
                reject_degenerate: false,
                anchor: AnchorRule {
                    center_a: L_EYE,
                    center_b: None,
                    row: L_EYE,
                    shift: VerticalShift::FullHeight,
                },
            },
            eyewear: PlacementRule {
                size_required: vec![NECK, R_SHOULDER, L_SHOULDER],
                position_required: vec![NECK, R_SHOULDER, L_SHOULDER],
                width: SpanRule {
                    span: ReferenceSpan {
                        a: L_EAR,
                        b: NOSE,
                        axis: SpanAxis::X,
                        premultiplier: 1.0,
                    },
                    multiplier: 2.2,
                },
                height: None,
                min_size: 30,
                max_size: 300,
                reject_degenerate: false,
                anchor: AnchorRule {
                    center_a: NOSE,
                    center_b: Some(L_EAR),
                    row: L_EAR,
                    shift: VerticalShift::FloatQuotient(3.5),
                },
            },
        }
    }
}

impl PlacementPolicy {
    /// Rule for one garment kind.
    pub fn rule(&self, kind: GarmentKind) -> &PlacementRule {
        match kind {
            GarmentKind::UpperBody => &self.upper_body,
            GarmentKind::LowerBody => &self.lower_body,
            GarmentKind::Headwear => &self.headwear,
            GarmentKind::Eyewear => &self.eyewear,
        }
    }

    /// Parse a policy from its JSON representation.
    pub fn from_json(json: &str) -> DrapeResult<Self> {
        let policy: Self =
            serde_json::from_str(json).context("parse placement policy json")?;
        policy.validate()?;
        Ok(policy)
    }

    /// Serialize the policy to pretty JSON.
    pub fn to_json(&self) -> DrapeResult<String> {
        serde_json::to_string_pretty(self)
            .context("serialize placement policy json")
            .map_err(DrapeError::from)
    }

    /// Check structural invariants of every rule: landmark indices in
    /// bounds, clamp ranges ordered, multipliers finite and positive.
    pub fn validate(&self) -> DrapeResult<()> {
        for kind in [
            GarmentKind::UpperBody,
            GarmentKind::LowerBody,
            GarmentKind::Headwear,
            GarmentKind::Eyewear,
        ] {
            self.rule(kind).validate(kind)?;
        }
        Ok(())
    }
}

impl PlacementRule {
    fn validate(&self, kind: GarmentKind) -> DrapeResult<()> {
        let name = kind.name();
        let mut indices: Vec<usize> = Vec::new();
        indices.extend(&self.size_required);
        indices.extend(&self.position_required);
        indices.extend([self.width.span.a, self.width.span.b]);
        if let Some(h) = &self.height {
            indices.extend([h.span.a, h.span.b]);
        }
        indices.extend([self.anchor.center_a, self.anchor.row]);
        if let Some(b) = self.anchor.center_b {
            indices.push(b);
        }
        if let Some(bad) = indices.iter().find(|&&i| i >= KEYPOINT_COUNT) {
            return Err(DrapeError::validation(format!(
                "{name}: landmark index {bad} out of range 0..{KEYPOINT_COUNT}"
            )));
        }

        if self.min_size <= 0 || self.min_size > self.max_size {
            return Err(DrapeError::validation(format!(
                "{name}: clamp range [{}, {}] must satisfy 0 < min <= max",
                self.min_size, self.max_size
            )));
        }

        let mut factors = vec![self.width.multiplier, self.width.span.premultiplier];
        if let Some(h) = &self.height {
            factors.extend([h.multiplier, h.span.premultiplier]);
        }
        if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
            return Err(DrapeError::validation(format!(
                "{name}: span multipliers must be finite and positive"
            )));
        }

        match self.anchor.shift {
            VerticalShift::IntQuotient(n) if n == 0 => Err(DrapeError::validation(format!(
                "{name}: integer shift quotient must be non-zero"
            ))),
            VerticalShift::FloatQuotient(q) if !q.is_finite() || q == 0.0 => {
                Err(DrapeError::validation(format!(
                    "{name}: float shift quotient must be finite and non-zero"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/policy.rs"]
mod tests;
