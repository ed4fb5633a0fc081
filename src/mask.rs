//! Luminance-to-alpha mask math.
//!
//! A mask is built in two steps: per-pixel luminance by the ITU-R BT.601
//! weighting `L = 0.299*R + 0.587*G + 0.114*B`, then an affine map from
//! luminance to alpha selected by [`Polarity`]. The result is the polarity's
//! fixed background color broadcast across every pixel with the derived alpha
//! attached; only the alpha channel varies.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

/// BT.601 luma weight: red.
const LUMA_R: f32 = 0.299;
/// BT.601 luma weight: green.
const LUMA_G: f32 = 0.587;
/// BT.601 luma weight: blue.
const LUMA_B: f32 = 0.114;

/// Which tonal extreme of the source becomes transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// White pixels become transparent, black pixels opaque.
    /// The mask is filled with opaque white.
    WhiteTransparent,
    /// Black pixels become transparent, white pixels opaque.
    /// The mask is filled with opaque black.
    BlackTransparent,
}

impl Polarity {
    /// Map a luminance value to the alpha for this polarity.
    ///
    /// The two polarities are exact complements:
    /// `WhiteTransparent` yields `255 - L`, `BlackTransparent` yields `L`.
    #[must_use]
    pub fn alpha_for(self, luma: u8) -> u8 {
        match self {
            Polarity::WhiteTransparent => 255 - luma,
            Polarity::BlackTransparent => luma,
        }
    }

    /// The fixed background color broadcast across the mask.
    #[must_use]
    pub fn background(self) -> Rgb<u8> {
        match self {
            Polarity::WhiteTransparent => Rgb([255, 255, 255]),
            Polarity::BlackTransparent => Rgb([0, 0, 0]),
        }
    }
}

/// Per-pixel BT.601 luminance, rounded to the nearest 8-bit value.
///
/// Rounding (not truncation) is the rule used throughout the crate, so
/// equal-channel grays map to themselves exactly. Deterministic in the pixel
/// value alone.
#[must_use]
pub fn luminance(px: Rgb<u8>) -> u8 {
    let luma = LUMA_R * f32::from(px[0]) + LUMA_G * f32::from(px[1]) + LUMA_B * f32::from(px[2]);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        luma.round().clamp(0.0, 255.0) as u8
    }
}

/// Build an alpha mask from a source image.
///
/// Every output pixel is the polarity's background color with alpha
/// `polarity.alpha_for(luminance(source_pixel))`. The source is not modified
/// and the output has the same dimensions. This is a background-color fill
/// carried by alpha, not an alpha-blend of the source colors.
#[must_use]
pub fn apply(source: &RgbImage, polarity: Polarity) -> RgbaImage {
    let Rgb([bg_r, bg_g, bg_b]) = polarity.background();
    let mut mask = RgbaImage::new(source.width(), source.height());
    for (src, dst) in source.pixels().zip(mask.pixels_mut()) {
        let alpha = polarity.alpha_for(luminance(*src));
        *dst = Rgba([bg_r, bg_g, bg_b, alpha]);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn luminance_of_equal_channel_gray_is_identity() {
        for v in [0u8, 1, 10, 127, 128, 200, 254, 255] {
            assert_eq!(luminance(Rgb([v, v, v])), v);
        }
    }

    #[test]
    fn luminance_matches_bt601_weights() {
        assert_eq!(luminance(Rgb([255, 0, 0])), 76);
        assert_eq!(luminance(Rgb([0, 255, 0])), 150);
        assert_eq!(luminance(Rgb([0, 0, 255])), 29);
    }

    #[test]
    fn polarities_are_exact_complements_for_every_luma() {
        for luma in 0..=255u8 {
            let white = Polarity::WhiteTransparent.alpha_for(luma);
            let black = Polarity::BlackTransparent.alpha_for(luma);
            assert_eq!(u16::from(white) + u16::from(black), 255);
        }
    }

    #[test]
    fn white_transparent_extremes() {
        assert_eq!(Polarity::WhiteTransparent.alpha_for(luminance(Rgb([255, 255, 255]))), 0);
        assert_eq!(Polarity::WhiteTransparent.alpha_for(luminance(Rgb([0, 0, 0]))), 255);
    }

    #[test]
    fn black_transparent_extremes() {
        assert_eq!(Polarity::BlackTransparent.alpha_for(luminance(Rgb([0, 0, 0]))), 0);
        assert_eq!(Polarity::BlackTransparent.alpha_for(luminance(Rgb([255, 255, 255]))), 255);
    }

    #[test]
    fn reference_scenario_2x2_white_transparent() {
        let mut source = RgbImage::new(2, 2);
        source.put_pixel(0, 0, Rgb([255, 255, 255]));
        source.put_pixel(1, 0, Rgb([0, 0, 0]));
        source.put_pixel(0, 1, Rgb([128, 128, 128]));
        source.put_pixel(1, 1, Rgb([10, 10, 10]));

        let mask = apply(&source, Polarity::WhiteTransparent);

        let alphas: Vec<u8> = mask.pixels().map(|p| p[3]).collect();
        assert_eq!(alphas, [0, 255, 127, 245]);
        for p in mask.pixels() {
            assert_eq!([p[0], p[1], p[2]], [255, 255, 255]);
        }
    }

    #[test]
    fn apply_preserves_dimensions() {
        for (w, h) in [(1, 1), (2, 2), (64, 33), (1, 500)] {
            let source = RgbImage::from_pixel(w, h, Rgb([90, 12, 240]));
            let mask = apply(&source, Polarity::BlackTransparent);
            assert_eq!((mask.width(), mask.height()), (w, h));
        }
    }

    #[test]
    fn result_rgb_is_constant_background() {
        let source = RgbImage::from_fn(16, 16, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = ((x * 16 + y) % 256) as u8;
            Rgb([v, 255 - v, v.wrapping_mul(7)])
        });

        let white = apply(&source, Polarity::WhiteTransparent);
        assert!(white.pixels().all(|p| [p[0], p[1], p[2]] == [255, 255, 255]));

        let black = apply(&source, Polarity::BlackTransparent);
        assert!(black.pixels().all(|p| [p[0], p[1], p[2]] == [0, 0, 0]));
    }

    #[test]
    fn repeated_apply_is_bit_identical() {
        let source = RgbImage::from_fn(9, 7, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = ((x * 31 + y * 17) % 256) as u8;
            Rgb([v, v / 2, 255 - v])
        });
        let first = apply(&source, Polarity::WhiteTransparent);
        let second = apply(&source, Polarity::WhiteTransparent);
        assert_eq!(first.as_raw(), second.as_raw());
    }

    proptest! {
        #[test]
        fn polarities_complement_for_any_pixel(r: u8, g: u8, b: u8) {
            let luma = luminance(Rgb([r, g, b]));
            prop_assert_eq!(
                u16::from(Polarity::WhiteTransparent.alpha_for(luma))
                    + u16::from(Polarity::BlackTransparent.alpha_for(luma)),
                255
            );
        }

        #[test]
        fn luminance_stays_within_channel_range(r: u8, g: u8, b: u8) {
            let luma = luminance(Rgb([r, g, b]));
            let lo = r.min(g).min(b);
            let hi = r.max(g).max(b);
            prop_assert!(luma >= lo && luma <= hi);
        }
    }
}
