//! Turn a raster image into a luminance-derived transparency mask.
//!
//! The mask is an alpha-channel PNG: per-pixel BT.601 luminance is mapped to
//! alpha by one of two fixed [`Polarity`] conventions, and the color channels
//! are filled with the polarity's flat background color. `WhiteTransparent`
//! makes bright areas see-through on a white fill; `BlackTransparent` makes
//! dark areas see-through on a black fill.
//!
//! # Quick Start
//!
//! ```no_run
//! use luma_mask::{MaskSession, Polarity};
//!
//! let mut session = MaskSession::new();
//! session.load("photo.png".as_ref()).expect("failed to load");
//! session.apply(Polarity::WhiteTransparent).expect("no image loaded");
//! session.save("mask.png".as_ref()).expect("failed to save");
//! ```
//!
//! The transform itself is a pure function, usable without a session:
//!
//! ```
//! use luma_mask::{mask, Polarity};
//!
//! let source = image::RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));
//! let result = mask::apply(&source, Polarity::BlackTransparent);
//! assert_eq!(result.get_pixel(0, 0).0, [0, 0, 0, 0]);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod mask;
pub mod preview;
mod session;

pub use error::{Error, Result};
pub use mask::Polarity;
pub use session::{is_supported_source, MaskSession};
