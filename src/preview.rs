//! Preview scaling helpers.
//!
//! The display area is bounded; large images are downsampled to fit while
//! small images are shown at their native size. Upsampling never happens.

use image::imageops::{self, FilterType};
use image::{ImageBuffer, Pixel};

/// Largest size fitting in `max_width` x `max_height` that preserves the
/// aspect ratio. Never exceeds the original dimensions.
#[must_use]
pub fn fit_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let scale =
        (f64::from(max_width) / f64::from(width)).min(f64::from(max_height) / f64::from(height));
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fitted = |dim: u32| ((f64::from(dim) * scale).round() as u32).max(1);
    (fitted(width), fitted(height))
}

/// Downsample an image to fit the given bounds.
///
/// Returns an unscaled copy when the image already fits. Oversized images are
/// resized with the Triangle (bilinear) filter.
#[must_use]
pub fn thumbnail<P>(
    img: &ImageBuffer<P, Vec<u8>>,
    max_width: u32,
    max_height: u32,
) -> ImageBuffer<P, Vec<u8>>
where
    P: Pixel<Subpixel = u8> + 'static,
{
    let (w, h) = fit_dimensions(img.width(), img.height(), max_width, max_height);
    if (w, h) == (img.width(), img.height()) {
        return img.clone();
    }
    imageops::resize(img, w, h, FilterType::Triangle)
}
