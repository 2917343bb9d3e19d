//! Error types for autotile compilation, drawing and layer encoding

use std::fmt;
use std::path::PathBuf;

/// Main error type for all autotile operations
#[derive(Debug)]
pub enum AutotileError {
    /// Failed to load an autotile source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a compiled strip or preview to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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

    /// Source image is smaller than the quadrant layout requires
    ///
    /// Raised by `compile` before any pixel is written.
    MalformedSource {
        /// Name of the autotile
        name: String,
        /// Actual source dimensions (width, height)
        actual: (u32, u32),
        /// Minimum dimensions required by the layout and padding
        required: (u32, u32),
    },

    /// Variant index outside `0..=255`
    VariantOutOfRange {
        /// The rejected variant
        variant: usize,
    },

    /// The autotile strip was read before `compile` ran
    NotCompiled {
        /// Name of the autotile
        name: String,
    },

    /// `compile` was called on an autotile whose strip is already populated
    AlreadyCompiled {
        /// Name of the autotile
        name: String,
    },

    /// A copy touched pixels outside the source or destination surface
    RegionOutOfBounds {
        /// Which side of the copy was out of bounds
        surface: &'static str,
        /// Requested rectangle (x, y, width, height)
        region: (u32, u32, u32, u32),
        /// Dimensions of the offending surface
        bounds: (u32, u32),
    },

    /// Flat layer data does not match `width * height`
    LayerSizeMismatch {
        /// Expected number of cells
        expected: usize,
        /// Number of cells provided
        actual: usize,
    },

    /// Slot ordinal cannot be represented in the packed index space
    SlotOverflow {
        /// The rejected ordinal
        ordinal: usize,
    },

    /// No autotile is attached at the given slot
    UnknownSlot {
        /// The requested slot
        slot: u32,
        /// Number of attached autotiles
        attached: usize,
    },

    /// An autotile with the same name is already attached
    DuplicateAutotile {
        /// Name of the autotile
        name: String,
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
}

impl fmt::Display for AutotileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::MalformedSource {
                name,
                actual,
                required,
            } => {
                write!(
                    f,
                    "Autotile '{name}' source is {}x{}, layout requires at least {}x{}",
                    actual.0, actual.1, required.0, required.1
                )
            }
            Self::VariantOutOfRange { variant } => {
                write!(f, "Variant {variant} is out of range (expected 0..=255)")
            }
            Self::NotCompiled { name } => {
                write!(f, "Autotile '{name}' has not been compiled")
            }
            Self::AlreadyCompiled { name } => {
                write!(f, "Autotile '{name}' is already compiled")
            }
            Self::RegionOutOfBounds {
                surface,
                region,
                bounds,
            } => {
                write!(
                    f,
                    "Region {}x{} at ({}, {}) exceeds {surface} surface of {}x{}",
                    region.2, region.3, region.0, region.1, bounds.0, bounds.1
                )
            }
            Self::LayerSizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Layer holds {actual} cells but its size requires {expected}"
                )
            }
            Self::SlotOverflow { ordinal } => {
                write!(
                    f,
                    "Autotile slot {ordinal} does not fit in the packed index space"
                )
            }
            Self::UnknownSlot { slot, attached } => {
                write!(
                    f,
                    "No autotile at slot {slot} ({attached} autotiles attached)"
                )
            }
            Self::DuplicateAutotile { name } => {
                write!(f, "Autotile '{name}' is already attached")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for AutotileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for autotile results
pub type Result<T> = std::result::Result<T, AutotileError>;

impl From<image::ImageError> for AutotileError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for AutotileError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AutotileError {
    AutotileError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
