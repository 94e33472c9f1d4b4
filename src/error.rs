//! Error type for icon rendering and icon-set generation.

use thiserror::Error;

/// Errors produced while rendering the icon or writing the icon set.
///
/// Rendering itself can only fail on an invalid size; everything else comes
/// from the file-system and encoding boundary in
/// [`IconSetBuilder`](crate::IconSetBuilder).
#[derive(Debug, Error)]
pub enum Error {
    /// The requested render size was zero.
    #[error("icon size must be positive")]
    InvalidSize,

    /// A file or directory could not be created or written.
    #[error("icon set I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A raster could not be encoded or saved.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// The manifest could not be serialized.
    #[error("manifest serialization failed: {0}")]
    Manifest(#[from] serde_json::Error),
}
