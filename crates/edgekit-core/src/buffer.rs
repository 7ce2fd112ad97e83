//! The dense RGBA raster buffer shared by every pipeline stage.
//!
//! [`PixelBuffer`] owns a contiguous `Vec<u8>` of `width * height * 4`
//! samples in row-major, channel-interleaved order. It is the only data
//! type that crosses stage boundaries: the image loader produces one, each
//! stage consumes one and allocates a fresh one, and the renderer/exporter
//! consumes the final buffer via [`PixelBuffer::into_raw`].
//!
//! # Invariants
//!
//! - `data.len() == width * height * 4`, checked at construction.
//! - Sample index for `(x, y, channel)` is `(y * width + x) * 4 + channel`.
//!
//! # Used By
//!
//! - `edgekit-ops` - grayscale conversion, Sobel convolution, tonal adjustment
//! - `edgekit-pipeline` - original/working buffer management

use crate::error::{Error, Result};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Owned RGBA raster with validated shape.
///
/// `Clone` performs a deep copy of the sample data; there is no shared
/// ownership. The pipeline orchestrator depends on this to keep the retained
/// original image disjoint from the working buffer.
///
/// # Example
///
/// ```rust
/// use edgekit_core::PixelBuffer;
///
/// let img = PixelBuffer::filled(4, 4, [255, 0, 0, 255]);
/// assert_eq!(img.dimensions(), (4, 4));
/// assert_eq!(img.pixel(3, 3), [255, 0, 0, 255]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Buffer width in pixels
    width: u32,
    /// Buffer height in pixels
    height: u32,
    /// Interleaved RGBA samples, row-major
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a zero-filled buffer (transparent black).
    ///
    /// This is the allocation default every stage starts its output from;
    /// the Sobel engine documents its unwritten border ring in terms of
    /// this fill.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::new(8, 8);
    /// assert_eq!(img.pixel(0, 0), [0, 0, 0, 0]);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self {
            width,
            height,
            data: vec![0u8; len],
        }
    }

    /// Creates a buffer filled with a constant pixel value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::PixelBuffer;
    ///
    /// let gray = PixelBuffer::filled(16, 16, [128, 128, 128, 255]);
    /// assert_eq!(gray.pixel(7, 7), [128, 128, 128, 255]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Creates a buffer from raw interleaved RGBA samples.
    ///
    /// This is the entry point for the image-loader collaborator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBufferShape`] if `data.len()` is not exactly
    /// `width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::PixelBuffer;
    ///
    /// let img = PixelBuffer::from_raw(2, 2, vec![0; 16]).unwrap();
    /// assert_eq!(img.pixel_count(), 4);
    ///
    /// assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_buffer_shape(
                width,
                height,
                expected,
                data.len(),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Returns the buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of interleaved channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        CHANNELS
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw sample data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the raw sample data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning `(width, height, samples)` for the
    /// renderer/exporter collaborator.
    #[inline]
    pub fn into_raw(self) -> (u32, u32, Vec<u8>) {
        (self.width, self.height, self.data)
    }

    /// Returns the sample offset for pixel `(x, y)`.
    #[inline]
    fn pixel_offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds. Out-of-bounds access is a
    /// programming error; use [`try_pixel`](Self::try_pixel) when the
    /// coordinates come from outside the crate.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; CHANNELS] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for buffer {}x{}",
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        let mut out = [0u8; CHANNELS];
        out.copy_from_slice(&self.data[offset..offset + CHANNELS]);
        out
    }

    /// Returns the pixel at `(x, y)`, checking bounds.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `x >= width` or `y >= height`.
    #[inline]
    pub fn try_pixel(&self, x: u32, y: u32) -> Result<[u8; CHANNELS]> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        Ok(self.pixel(x, y))
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [u8; CHANNELS]) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for buffer {}x{}",
            self.width,
            self.height
        );
        let offset = self.pixel_offset(x, y);
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }

    /// Reads a single channel sample at `(x, y, channel)`.
    ///
    /// Hot path of the convolution inner loop.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates or channel are out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> u8 {
        debug_assert!(x < self.width && y < self.height && channel < CHANNELS);
        self.data[self.pixel_offset(x, y) + channel]
    }
}
