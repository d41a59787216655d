use std::io;

use thiserror::Error;

// -----------------------------------------------------------------------------
// PatternError

/// A malformed field pattern, reported when a serializer is configured.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PatternError {
    #[error("pattern `{pattern}` contains an empty segment")]
    EmptySegment { pattern: String },

    #[error("segment `{segment}` is an empty group")]
    EmptyGroup { segment: String },

    #[error("segment `{segment}` opens a group that is never closed")]
    UnclosedGroup { segment: String },

    #[error("segment `{segment}` contains an empty name")]
    EmptyName { segment: String },

    #[error("segment `{segment}` lists several names outside of a group, use `({segment})`")]
    UnbracketedList { segment: String },
}

// -----------------------------------------------------------------------------
// SerializeError

/// A failure while writing a value.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("serializer expected {expected}, received `{received}`")]
    Mismatch {
        expected: &'static str,
        received: &'static str,
    },

    #[error("{0}")]
    Custom(String),
}

impl SerializeError {
    /// Creates a [`SerializeError::Custom`] for user-defined serializers.
    ///
    /// ```
    /// use sift_json::SerializeError;
    ///
    /// let err = SerializeError::custom("negative price");
    /// assert_eq!(err.to_string(), "negative price");
    /// ```
    pub fn custom(msg: impl core::fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }

    /// Creates a [`SerializeError::Mismatch`] for `value`.
    pub(crate) fn mismatch(expected: &'static str, value: &dyn sift_reflect::Reflect) -> Self {
        Self::Mismatch {
            expected,
            received: value.reflect_type_info().type_name(),
        }
    }
}
