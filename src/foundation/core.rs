/// Top-left pixel offset at which a resized garment is drawn.
///
/// Coordinates may be negative: a garment is allowed to hang partly or
/// fully off the photo, and the compositor clips per pixel.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelPoint {
    /// Horizontal offset in pixels.
    pub x: i32,
    /// Vertical offset in pixels.
    pub y: i32,
}

impl PixelPoint {
    /// Construct a point from raw coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Target width/height of a garment raster in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size from raw dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// The four garment kinds the engine places and composites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentKind {
    /// Torso garment (t-shirt, jacket).
    UpperBody,
    /// Hip-to-knee garment (pants, skirt).
    LowerBody,
    /// Hat or other head covering.
    Headwear,
    /// Glasses.
    Eyewear,
}

impl GarmentKind {
    /// Stable lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::UpperBody => "upper_body",
            Self::LowerBody => "lower_body",
            Self::Headwear => "headwear",
            Self::Eyewear => "eyewear",
        }
    }
}
