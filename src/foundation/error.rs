/// Convenience result type used across fxconfig.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy used by the configuration model APIs.
///
/// Most anomalies in effect configurations degrade gracefully (opaque fields, logged
/// warnings). The variants here are the cases that must block the calling operation.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A resolution key that is not present in the profile catalog.
    #[error("unknown resolution '{key}'")]
    UnknownResolution {
        /// The key (or alias) that failed to resolve.
        key: String,
    },

    /// The configuration authority could not produce a default instance.
    #[error("configuration authority error for effect '{effect}': {message}")]
    Authority {
        /// Effect identifier the request was made for.
        effect: String,
        /// Authority-provided failure description.
        message: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::UnknownResolution`] value.
    pub fn unknown_resolution(key: impl Into<String>) -> Self {
        Self::UnknownResolution { key: key.into() }
    }

    /// Build a [`FxError::Authority`] value.
    pub fn authority(effect: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Authority {
            effect: effect.into(),
            message: msg.into(),
        }
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
