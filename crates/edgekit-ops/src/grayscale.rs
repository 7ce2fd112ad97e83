//! Mean-luminance grayscale conversion.

use edgekit_core::{luminance_mean, PixelBuffer, CHANNELS};
use tracing::trace;

/// Converts a buffer to mean luminance: R = G = B = `floor((R + G + B) / 3)`.
///
/// Alpha is forced to 255 (fully opaque) regardless of input alpha. This is
/// the preprocessing step the Sobel engine expects; it is idempotent, since
/// an already-flat pixel averages to itself.
///
/// # Example
///
/// ```rust
/// use edgekit_core::PixelBuffer;
/// use edgekit_ops::grayscale;
///
/// let img = PixelBuffer::filled(2, 2, [10, 20, 30, 128]);
/// let gray = grayscale(&img);
/// assert_eq!(gray.pixel(0, 0), [20, 20, 20, 255]);
/// ```
pub fn grayscale(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "grayscale");

    let mut out = PixelBuffer::new(src.width(), src.height());
    for (dst, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        let luma = luminance_mean(px[0], px[1], px[2]);
        dst[0] = luma;
        dst[1] = luma;
        dst[2] = luma;
        dst[3] = 255;
    }
    out
}
