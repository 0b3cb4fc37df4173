use thiserror::Error;

/// Errors produced by strict parsing of wire value forms.
///
/// The typed query accessors never surface these: they degrade malformed
/// input to absence instead. Strict `FromStr` entry points return them so
/// callers that want to reject bad input early can do so.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid geo point: {0:?}")]
    InvalidGeoPoint(String),

    #[error("invalid geo rectangle: {0:?}")]
    InvalidGeoRect(String),
}

impl ValueError {
    /// Create a new InvalidGeoPoint error
    pub fn invalid_geo_point(raw: impl Into<String>) -> Self {
        Self::InvalidGeoPoint(raw.into())
    }

    /// Create a new InvalidGeoRect error
    pub fn invalid_geo_rect(raw: impl Into<String>) -> Self {
        Self::InvalidGeoRect(raw.into())
    }
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, ValueError>;
