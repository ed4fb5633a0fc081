//! Session state and command handlers for the mask editor.
//!
//! [`MaskSession`] owns the currently loaded source image and the most recent
//! mask derived from it. Each handler maps one user action; a failed handler
//! leaves the session exactly as it was, so the caller can report the error
//! and the user can retry.

use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};
use log::{debug, info};

use crate::error::{Error, Result};
use crate::mask::{self, Polarity};

/// Two-slot mutable state: the loaded source and the mask derived from it.
///
/// The session starts empty. Loading installs a source and discards any
/// previous mask; applying a transform installs a mask. A mask, when present,
/// always has the dimensions of the source it was derived from.
#[derive(Debug, Default)]
pub struct MaskSession {
    source: Option<RgbImage>,
    result: Option<RgbaImage>,
}

impl MaskSession {
    /// Create an empty session with no image loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently loaded source image, if any.
    #[must_use]
    pub fn source(&self) -> Option<&RgbImage> {
        self.source.as_ref()
    }

    /// The most recent mask, if a transform has run since the last load.
    #[must_use]
    pub fn result(&self) -> Option<&RgbaImage> {
        self.result.as_ref()
    }

    /// Decode an image file and make it the current source.
    ///
    /// Any previous mask is discarded since it was derived from the old
    /// source. On failure the session keeps its previous state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`] when the file cannot be read or decoded.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let decoded = image::open(path)?.to_rgb8();
        info!(
            "loaded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        self.source = Some(decoded);
        self.result = None;
        Ok(())
    }

    /// Run the luminance-alpha transform and store the mask.
    ///
    /// Reapplying replaces the previous mask; with the same polarity the
    /// replacement is bit-identical.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSourceImage`] when nothing is loaded.
    pub fn apply(&mut self, polarity: Polarity) -> Result<&RgbaImage> {
        let source = self.source.as_ref().ok_or(Error::NoSourceImage)?;
        debug!(
            "applying {polarity:?} to {}x{} source",
            source.width(),
            source.height()
        );
        Ok(self.result.insert(mask::apply(source, polarity)))
    }

    /// Encode the current mask as PNG at `path`.
    ///
    /// Only PNG is accepted, so the alpha channel round-trips losslessly.
    /// The mask is kept on failure and a retry is possible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoResultImage`] when no mask exists,
    /// [`Error::UnsupportedFormat`] when `path` does not name a PNG file, and
    /// [`Error::Image`] when encoding or writing fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let result = self.result.as_ref().ok_or(Error::NoResultImage)?;

        let format =
            ImageFormat::from_path(path).map_err(|e| Error::UnsupportedFormat(e.to_string()))?;
        if format != ImageFormat::Png {
            return Err(Error::UnsupportedFormat(format!("{format:?}")));
        }

        result.save_with_format(path, ImageFormat::Png)?;
        info!("saved mask to {}", path.display());
        Ok(())
    }
}

/// Check if a file has a loadable source extension (PNG or JPEG).
#[must_use]
pub fn is_supported_source(path: &Path) -> bool {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg"),
        None => false,
    }
}
