//! # edgekit-ops
//!
//! Raster operations for the edgekit pipeline.
//!
//! Every operation is a pure function from a [`PixelBuffer`](edgekit_core::PixelBuffer)
//! to a freshly allocated `PixelBuffer` of identical dimensions; inputs are
//! never mutated.
//!
//! # Modules
//!
//! - [`grayscale`] - Mean-luminance flattening
//! - [`sobel`] - 3x3 gradient-magnitude edge detection
//! - [`tonal`] - Display-time brightness/contrast/grayscale adjustment
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::PixelBuffer;
//! use edgekit_ops::{grayscale, sobel_edges};
//!
//! let img = PixelBuffer::filled(16, 16, [200, 100, 30, 255]);
//! let edges = sobel_edges(&grayscale(&img));
//! assert_eq!(edges.dimensions(), img.dimensions());
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - Row-parallel convolution via rayon; output is
//!   bit-identical to the sequential path
//! - `serde` - Serialization for [`FilterState`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod grayscale;
pub mod sobel;
pub mod tonal;

pub use grayscale::grayscale;
pub use sobel::{sobel_edges, Kernel3, SOBEL_X, SOBEL_Y};
pub use tonal::{adjust, FilterState};
