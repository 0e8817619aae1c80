/// Convenience result type used across Drape.
pub type DrapeResult<T> = Result<T, DrapeError>;

/// Top-level error taxonomy used by engine APIs.
///
/// `MissingLandmark` and `DegenerateMeasurement` are produced by the
/// placement estimators and always recovered locally into documented
/// fallback outputs; they never cross the pipeline boundary.
#[derive(thiserror::Error, Debug)]
pub enum DrapeError {
    /// Background, garment, or target raster is absent or zero-sized.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A garment raster lacks the required alpha channel.
    #[error("format error: {0}")]
    Format(String),

    /// The pose source returned no usable landmark set.
    #[error("detection error: {0}")]
    Detection(String),

    /// A required landmark for an estimator is undetected.
    #[error("missing landmark: {0}")]
    MissingLandmark(String),

    /// A measured anatomical span is zero or negative.
    #[error("degenerate measurement: {0}")]
    DegenerateMeasurement(String),

    /// Invalid placement policy or other user-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DrapeError {
    /// Build a [`DrapeError::EmptyInput`] value.
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    /// Build a [`DrapeError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`DrapeError::Detection`] value.
    pub fn detection(msg: impl Into<String>) -> Self {
        Self::Detection(msg.into())
    }

    /// Build a [`DrapeError::MissingLandmark`] value.
    pub fn missing_landmark(msg: impl Into<String>) -> Self {
        Self::MissingLandmark(msg.into())
    }

    /// Build a [`DrapeError::DegenerateMeasurement`] value.
    pub fn degenerate_measurement(msg: impl Into<String>) -> Self {
        Self::DegenerateMeasurement(msg.into())
    }

    /// Build a [`DrapeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
