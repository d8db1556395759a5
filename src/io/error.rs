//! Error types and path context for loading, composing and exporting grids

use std::fmt;
use std::path::{Path, PathBuf};

use crate::loading::source::SourceId;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// A source could not be decoded as a raster image
    Decode {
        /// Identity of the failing source
        source_id: SourceId,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// A source decoded to an image with no pixels
    EmptyImage {
        /// Identity of the failing source
        source_id: SourceId,
    },

    /// The target canvas could not be acquired
    SurfaceUnavailable {
        /// Requested canvas width in pixels
        width: u32,
        /// Requested canvas height in pixels
        height: u32,
        /// Why the surface was refused
        reason: String,
    },

    /// Encoding the finished canvas failed
    Encode {
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal bookkeeping produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl CollageError {
    /// Identity of the source responsible for this error, if any
    pub const fn source_id(&self) -> Option<&SourceId> {
        match self {
            Self::Decode { source_id, .. } | Self::EmptyImage { source_id } => Some(source_id),
            _ => None,
        }
    }

    /// Whether this error came from decoding a source
    pub const fn is_decode_failure(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::EmptyImage { .. })
    }
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { source_id, source } => {
                write!(f, "Failed to decode image {source_id}: {source}")
            }
            Self::EmptyImage { source_id } => {
                write!(f, "Image {source_id} has no pixels")
            }
            Self::SurfaceUnavailable {
                width,
                height,
                reason,
            } => {
                write!(f, "Canvas {width}x{height} is unavailable: {reason}")
            }
            Self::Encode { source } => {
                write!(f, "Failed to encode canvas: {source}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } | Self::Encode { source } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

/// Attaches a path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`CollageError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| CollageError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> CollageError {
    CollageError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
