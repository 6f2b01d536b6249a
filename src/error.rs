//! Errors reported while reading or converting a color.

use thiserror::Error;

use crate::{models::Rgb, ModelKind};

/// Everything that can go wrong when building or converting a color.
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The input is missing, malformed, names an unknown color or an unknown
    /// color model.
    #[error("invalid color: {0}")]
    InvalidColor(String),
    /// The target model has no way to represent the color.
    #[error("the {kind} color model can't represent {rgb}")]
    ConversionUnsupported {
        /// The model the color was being converted to.
        kind: ModelKind,
        /// The color that could not be converted.
        rgb: Rgb,
    },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!("rejected color input: {}", reason);
        Self::InvalidColor(reason)
    }
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, Error>;
