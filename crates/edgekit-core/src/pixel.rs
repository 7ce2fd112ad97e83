//! Channel constants and the mean-luminance helper.

/// Index of the red channel within an interleaved pixel.
pub const RED: usize = 0;
/// Index of the green channel within an interleaved pixel.
pub const GREEN: usize = 1;
/// Index of the blue channel within an interleaved pixel.
pub const BLUE: usize = 2;
/// Index of the alpha channel within an interleaved pixel.
pub const ALPHA: usize = 3;

/// Mean luminance of an 8-bit RGB triple: `floor((R + G + B) / 3)`.
///
/// Integer truncation, not rounding. The edge-detection preprocessing and
/// the tonal grayscale flattening both use exactly this formula, so it
/// lives here rather than in either operation.
///
/// # Example
///
/// ```rust
/// use edgekit_core::luminance_mean;
///
/// assert_eq!(luminance_mean(10, 20, 30), 20);
/// assert_eq!(luminance_mean(0, 0, 2), 0); // truncates, never rounds
/// ```
#[inline]
pub fn luminance_mean(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_mean_truncates() {
        assert_eq!(luminance_mean(10, 20, 30), 20);
        assert_eq!(luminance_mean(1, 1, 0), 0);
        assert_eq!(luminance_mean(255, 255, 255), 255);
        assert_eq!(luminance_mean(255, 255, 254), 254);
    }
}
