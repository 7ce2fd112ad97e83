//! Error types for edgekit buffer operations.
//!
//! The [`Error`] enum covers the two ways a `PixelBuffer` interaction can go
//! wrong: constructing a buffer whose byte length does not match its declared
//! dimensions, and addressing a sample outside the raster. Every pipeline
//! stage is a total function over well-formed buffers, so stages themselves
//! never return errors; failures surface only at construction and at the
//! checked accessors.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur constructing or addressing a [`PixelBuffer`](crate::PixelBuffer).
#[derive(Debug, Error)]
pub enum Error {
    /// Raw sample data does not match `width * height * 4`.
    ///
    /// Returned by [`PixelBuffer::from_raw`](crate::PixelBuffer::from_raw)
    /// when the collaborator hands over a byte vector of the wrong length.
    /// The orchestrator must refuse to load such a raster.
    #[error("invalid buffer shape: {width}x{height} expects {expected} bytes, got {got}")]
    InvalidBufferShape {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Expected byte length (`width * height * 4`)
        expected: usize,
        /// Actual byte length supplied
        got: usize,
    },

    /// Pixel coordinates are outside the raster.
    ///
    /// Returned by the checked accessors when `x >= width` or `y >= height`.
    /// Reaching this from inside a pipeline stage is a loop-bounds bug, not
    /// a recoverable condition.
    #[error("pixel ({x}, {y}) out of bounds for buffer {width}x{height}")]
    OutOfBounds {
        /// X coordinate that was out of bounds
        x: u32,
        /// Y coordinate that was out of bounds
        y: u32,
        /// Buffer width
        width: u32,
        /// Buffer height
        height: u32,
    },
}

impl Error {
    /// Creates an [`Error::InvalidBufferShape`] error.
    #[inline]
    pub fn invalid_buffer_shape(width: u32, height: u32, expected: usize, got: usize) -> Self {
        Self::InvalidBufferShape {
            width,
            height,
            expected,
            got,
        }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_buffer_shape_message() {
        let err = Error::invalid_buffer_shape(4, 4, 64, 60);
        let msg = err.to_string();
        assert!(msg.contains("4x4"));
        assert!(msg.contains("64"));
        assert!(msg.contains("60"));
        assert!(!err.is_bounds_error());
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::out_of_bounds(100, 50, 80, 60);
        let msg = err.to_string();
        assert!(msg.contains("100"));
        assert!(msg.contains("80x60"));
        assert!(err.is_bounds_error());
    }
}
