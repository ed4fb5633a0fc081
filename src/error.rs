//! Error types for the luma-mask crate.

/// Errors that can occur while loading, masking, or saving images.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A transform was requested before any image was loaded.
    #[error("no image loaded")]
    NoSourceImage,

    /// A save was requested before any transform produced a mask.
    #[error("no transformed image to save")]
    NoResultImage,

    /// The output format is not supported (only PNG carries the alpha channel).
    #[error("unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error occurred during image decoding or encoding.
    #[error("image processing error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Whether this error is a benign precondition violation rather than an
    /// I/O or codec failure. Warnings never mutate session state.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        matches!(self, Error::NoSourceImage | Error::NoResultImage)
    }
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
