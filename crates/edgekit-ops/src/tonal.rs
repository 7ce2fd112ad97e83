//! Display-time tonal adjustment: brightness, contrast-as-darkness, and
//! optional grayscale flattening.
//!
//! Unlike the Sobel engine this is not a convolution; every pixel is mapped
//! independently. The adjustment is a rendering-time transform over the
//! retained original, never a persistent mutation - the orchestrator
//! recomputes it from the original on every call and discards it on reset.

use edgekit_core::{luminance_mean, PixelBuffer, CHANNELS};
use tracing::debug;

/// Contrast pivot: values above stay above, values below stay below.
const MID_GRAY: f32 = 127.5;

/// Tonal adjustment state, as driven by a host UI.
///
/// `brightness` and `darkness` are integer percentages; the effective
/// contrast percentage is derived as `100 - darkness`. Defaults are the
/// identity transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterState {
    /// Multiplicative brightness percentage (100 = unchanged).
    pub brightness: u32,
    /// Darkness percentage; contrast slope becomes `(100 - darkness) / 100`.
    pub darkness: u32,
    /// Flatten to mean luminance after the scalar adjustments.
    pub grayscale: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brightness: 100,
            darkness: 0,
            grayscale: false,
        }
    }
}

impl FilterState {
    /// The identity adjustment (no change).
    pub fn identity() -> Self {
        Self::default()
    }

    /// Returns `true` if applying this state is a no-op.
    pub fn is_identity(&self) -> bool {
        self.brightness == 100 && self.darkness == 0 && !self.grayscale
    }

    /// Effective contrast percentage, `100 - darkness`, floored at 0.
    #[inline]
    pub fn contrast_percent(&self) -> u32 {
        100u32.saturating_sub(self.darkness)
    }
}

/// Applies a [`FilterState`] to a buffer, producing the adjusted copy.
///
/// Per RGB channel: brightness scales multiplicatively, then contrast
/// scales linearly about the 127.5 mid-point with slope
/// `(100 - darkness) / 100`; the result is clamped to `[0, 255]` and
/// rounded. Alpha passes through unchanged. With `grayscale` set, the
/// adjusted pixel is flattened with the same integer-mean formula as
/// [`grayscale`](crate::grayscale) (which also forces alpha opaque).
///
/// # Example
///
/// ```rust
/// use edgekit_core::PixelBuffer;
/// use edgekit_ops::{adjust, FilterState};
///
/// let img = PixelBuffer::filled(2, 2, [100, 100, 100, 255]);
/// let dimmed = adjust(&img, &FilterState { brightness: 50, ..FilterState::identity() });
/// assert_eq!(dimmed.pixel(0, 0), [50, 50, 50, 255]);
/// ```
pub fn adjust(src: &PixelBuffer, state: &FilterState) -> PixelBuffer {
    debug!(
        brightness = state.brightness,
        darkness = state.darkness,
        grayscale = state.grayscale,
        "tonal adjust"
    );

    if state.is_identity() {
        return src.clone();
    }

    let scale = state.brightness as f32 / 100.0;
    let slope = state.contrast_percent() as f32 / 100.0;

    let mut out = PixelBuffer::new(src.width(), src.height());
    for (dst, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        let mut rgb = [0u8; 3];
        for (channel, value) in rgb.iter_mut().enumerate() {
            let v = px[channel] as f32 * scale;
            let v = (v - MID_GRAY) * slope + MID_GRAY;
            *value = v.clamp(0.0, 255.0).round() as u8;
        }

        if state.grayscale {
            let luma = luminance_mean(rgb[0], rgb[1], rgb[2]);
            dst.copy_from_slice(&[luma, luma, luma, 255]);
        } else {
            dst.copy_from_slice(&[rgb[0], rgb[1], rgb[2], px[3]]);
        }
    }
    out
}
