//! 3x3 gradient-magnitude edge detection (Sobel operator).
//!
//! Convolves the fixed [`SOBEL_X`]/[`SOBEL_Y`] kernel pair against a
//! luminance buffer and writes `sqrt(gx^2 + gy^2)` per interior pixel.
//!
//! # Border policy
//!
//! The outermost one-pixel ring (`x = 0`, `x = width - 1`, `y = 0`,
//! `y = height - 1`) is never written; it stays at the output buffer's zero
//! fill (transparent black). This matches the reference behavior exactly and
//! is intentional, not a gap to close. Inputs with `width < 3` or
//! `height < 3` have no interior at all and come back as an all-zero buffer
//! of the same dimensions.
//!
//! # Numeric semantics
//!
//! The floating-point magnitude is stored into an 8-bit channel as
//! `floor(magnitude) mod 256` - wraparound, not clamping - for bit-exact
//! parity with 8-bit typed-array storage. A raw magnitude of 1020 is stored
//! as 252.

use edgekit_core::{PixelBuffer, CHANNELS, RED};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

/// A fixed 3x3 convolution kernel, indexed `[row][col]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal gradient kernel (Gx).
pub const SOBEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical gradient kernel (Gy).
pub const SOBEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Stores a gradient magnitude into an 8-bit channel with modulo-256
/// wraparound after truncation.
#[inline]
fn wrap_u8(magnitude: f64) -> u8 {
    (magnitude as u32 % 256) as u8
}

/// Convolves one interior row, writing magnitudes into `out_row`.
///
/// `out_row` is the full RGBA row at `y`; columns 0 and `width - 1` are
/// left untouched.
fn sobel_row(src: &PixelBuffer, y: usize, out_row: &mut [u8]) {
    let width = src.width() as usize;
    for x in 1..width - 1 {
        let mut gx = 0i32;
        let mut gy = 0i32;
        // Kernel row is driven by the y offset, kernel column by the x
        // offset; swapping them flips the gradient orientation.
        for (j, (kx_row, ky_row)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
            for (i, (kx, ky)) in kx_row.iter().zip(ky_row.iter()).enumerate() {
                let s = src.sample((x + i - 1) as u32, (y + j - 1) as u32, RED) as i32;
                gx += s * kx;
                gy += s * ky;
            }
        }
        let magnitude = ((gx * gx + gy * gy) as f64).sqrt();
        let value = wrap_u8(magnitude);

        let offset = x * CHANNELS;
        out_row[offset] = value;
        out_row[offset + 1] = value;
        out_row[offset + 2] = value;
        out_row[offset + 3] = 255;
    }
}

/// Computes the gradient-magnitude edge map of a luminance buffer.
///
/// The input is expected to already be grayscale (R = G = B, as produced by
/// [`grayscale`](crate::grayscale)); only the red channel is sampled.
/// Output dimensions equal input dimensions. See the module docs for the
/// border policy and 8-bit storage semantics.
///
/// # Example
///
/// ```rust
/// use edgekit_core::PixelBuffer;
/// use edgekit_ops::sobel_edges;
///
/// // A flat field has no gradient anywhere.
/// let flat = PixelBuffer::filled(8, 8, [90, 90, 90, 255]);
/// let edges = sobel_edges(&flat);
/// assert!(edges.data().chunks_exact(4).all(|px| px[0] == 0));
/// ```
pub fn sobel_edges(src: &PixelBuffer) -> PixelBuffer {
    trace!(width = src.width(), height = src.height(), "sobel_edges");

    let (width, height) = src.dimensions();
    let mut out = PixelBuffer::new(width, height);
    if width < 3 || height < 3 {
        // No interior pixels; every pixel keeps the zero fill.
        return out;
    }

    let h = height as usize;
    let stride = width as usize * CHANNELS;
    let interior = &mut out.data_mut()[stride..(h - 1) * stride];

    #[cfg(feature = "parallel")]
    interior
        .par_chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(i, row)| sobel_row(src, i + 1, row));

    #[cfg(not(feature = "parallel"))]
    for (i, row) in interior.chunks_exact_mut(stride).enumerate() {
        sobel_row(src, i + 1, row);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grayscale;

    /// Builds a luminance buffer from per-pixel values.
    fn luma_buffer(width: u32, height: u32, f: impl Fn(u32, u32) -> u8) -> PixelBuffer {
        let mut img = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                let l = f(x, y);
                img.set_pixel(x, y, [l, l, l, 255]);
            }
        }
        img
    }

    #[test]
    fn test_wrap_u8_is_modulo_not_clamp() {
        assert_eq!(wrap_u8(0.0), 0);
        assert_eq!(wrap_u8(255.9), 255);
        assert_eq!(wrap_u8(256.0), 0);
        assert_eq!(wrap_u8(1020.0), 252);
    }

    #[test]
    fn test_flat_field_has_zero_interior() {
        let flat = luma_buffer(6, 5, |_, _| 143);
        let edges = sobel_edges(&flat);
        for y in 1..4 {
            for x in 1..5 {
                assert_eq!(edges.pixel(x, y), [0, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn test_border_ring_keeps_zero_fill() {
        let img = luma_buffer(5, 5, |x, _| if x < 2 { 0 } else { 255 });
        let edges = sobel_edges(&img);
        for x in 0..5 {
            assert_eq!(edges.pixel(x, 0), [0, 0, 0, 0]);
            assert_eq!(edges.pixel(x, 4), [0, 0, 0, 0]);
        }
        for y in 0..5 {
            assert_eq!(edges.pixel(0, y), [0, 0, 0, 0]);
            assert_eq!(edges.pixel(4, y), [0, 0, 0, 0]);
        }
    }

    #[test]
    fn test_vertical_step_edge() {
        // Columns 0-1 black, columns 2-4 white. Uniform rows cancel Gy, and
        // Gx responds with |255 * 4| = 1020 at the columns straddling the
        // step, which wraps to 252 in 8-bit storage.
        let img = luma_buffer(5, 5, |x, _| if x < 2 { 0 } else { 255 });
        let edges = sobel_edges(&img);
        assert_eq!(edges.pixel(1, 2)[0], 252);
        assert_eq!(edges.pixel(2, 2)[0], 252);
        assert_eq!(edges.pixel(3, 2)[0], 0);
    }

    #[test]
    fn test_horizontal_step_edge() {
        // Transposed case: Gy carries the response, Gx cancels.
        let img = luma_buffer(5, 5, |_, y| if y < 2 { 0 } else { 255 });
        let edges = sobel_edges(&img);
        assert_eq!(edges.pixel(2, 1)[0], 252);
        assert_eq!(edges.pixel(2, 2)[0], 252);
        assert_eq!(edges.pixel(2, 3)[0], 0);
    }

    #[test]
    fn test_degenerate_dimensions() {
        let tiny = luma_buffer(2, 2, |_, _| 200);
        let edges = sobel_edges(&tiny);
        assert_eq!(edges.dimensions(), (2, 2));
        assert!(edges.data().iter().all(|&s| s == 0));

        let strip = luma_buffer(10, 2, |x, _| (x * 20) as u8);
        assert!(sobel_edges(&strip).data().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_preserves_dimensions() {
        let img = luma_buffer(9, 4, |x, y| (x + y) as u8);
        assert_eq!(sobel_edges(&img).dimensions(), (9, 4));
    }

    #[test]
    fn test_interior_alpha_opaque() {
        let img = luma_buffer(4, 4, |x, _| (x * 50) as u8);
        let edges = sobel_edges(&img);
        for y in 1..3 {
            for x in 1..3 {
                assert_eq!(edges.pixel(x, y)[3], 255);
            }
        }
    }

    #[test]
    fn test_full_pipeline_on_color_input() {
        // grayscale -> sobel on a color image with a diagonal feature.
        let mut img = PixelBuffer::filled(8, 8, [30, 60, 90, 255]);
        for d in 0..8 {
            img.set_pixel(d, d, [240, 240, 240, 255]);
        }
        let edges = sobel_edges(&grayscale(&img));
        // The diagonal produces nonzero response next to it.
        assert_ne!(edges.pixel(3, 4)[0], 0);
    }
}
