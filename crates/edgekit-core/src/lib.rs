//! # edgekit-core
//!
//! Core types for the edgekit raster pipeline.
//!
//! This crate provides the foundational types shared by every edgekit stage:
//!
//! - [`PixelBuffer`] - Dense row-major RGBA raster, the pipeline's sole data carrier
//! - [`Error`] / [`Result`] - Shared error type for buffer construction and access
//! - [`pixel`] - Channel constants and the mean-luminance helper
//!
//! ## Design Philosophy
//!
//! A `PixelBuffer` is a plain owned `Vec<u8>` behind a validated shape. Pipeline
//! stages are pure functions: they read one buffer and allocate a fresh output,
//! never mutating their input. `Clone` is a deep copy, which is what lets the
//! orchestrator retain an untouched original for `reset`.
//!
//! ## Memory Layout
//!
//! Samples are stored row-major, top-to-bottom, channel-interleaved:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! A sample lives at index `(y * width + x) * 4 + channel`.
//!
//! ## Usage
//!
//! ```rust
//! use edgekit_core::PixelBuffer;
//!
//! let mut img = PixelBuffer::new(640, 480);
//! img.set_pixel(10, 10, [255, 128, 0, 255]);
//! assert_eq!(img.pixel(10, 10), [255, 128, 0, 255]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod pixel;

pub use buffer::{PixelBuffer, CHANNELS};
pub use error::{Error, Result};
pub use pixel::{luminance_mean, ALPHA, BLUE, GREEN, RED};

/// Prelude module for convenient imports.
///
/// ```
/// use edgekit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::{PixelBuffer, CHANNELS};
    pub use crate::error::{Error, Result};
    pub use crate::pixel::{luminance_mean, ALPHA, BLUE, GREEN, RED};
}
