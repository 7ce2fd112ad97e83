//! The pipeline state machine.

use std::fmt;

use edgekit_core::PixelBuffer;
use edgekit_ops::{grayscale, sobel_edges, tonal, FilterState};
use tracing::debug;

use crate::error::{PipelineError, PipelineResult};

/// The stages a [`Pipeline`] moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// No image loaded yet.
    Idle,
    /// An image is loaded and untransformed.
    Loaded,
    /// A tonal adjustment is applied to the working buffer.
    Adjusted,
    /// The working buffer holds the edge map.
    EdgeDetected,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Idle => "idle",
            Stage::Loaded => "loaded",
            Stage::Adjusted => "adjusted",
            Stage::EdgeDetected => "edge-detected",
        };
        f.write_str(name)
    }
}

/// Synchronous orchestrator over the raster operations.
///
/// Holds the retained original buffer (never aliased by the working buffer;
/// `load` and `reset` deep-copy), the current working buffer handed to the
/// renderer, and the active [`FilterState`]. All methods run to completion
/// before returning; there is no internal concurrency or queuing.
#[derive(Debug, Default)]
pub struct Pipeline {
    stage: Option<ActiveState>,
    filters: FilterState,
}

/// Buffers that exist once an image has been loaded.
#[derive(Debug)]
struct ActiveState {
    stage: Stage,
    original: PixelBuffer,
    working: PixelBuffer,
}

impl Pipeline {
    /// Creates an idle pipeline with no image loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current stage.
    pub fn stage(&self) -> Stage {
        self.stage.as_ref().map_or(Stage::Idle, |s| s.stage)
    }

    /// Returns the current working buffer, or `None` while idle.
    pub fn current(&self) -> Option<&PixelBuffer> {
        self.stage.as_ref().map(|s| &s.working)
    }

    /// Returns the active tonal adjustment state.
    pub fn filters(&self) -> FilterState {
        self.filters
    }

    /// Loads a decoded raster, establishing the immutable original buffer.
    ///
    /// Permitted from every stage: loading while an image is already
    /// present replaces it, and the filter state returns to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Buffer`] if `data.len()` is not
    /// `width * height * 4`; the pipeline keeps its previous state.
    pub fn load(&mut self, width: u32, height: u32, data: Vec<u8>) -> PipelineResult<()> {
        let original = PixelBuffer::from_raw(width, height, data)?;
        debug!(width, height, "image loaded");
        self.stage = Some(ActiveState {
            stage: Stage::Loaded,
            working: original.clone(),
            original,
        });
        self.filters = FilterState::default();
        Ok(())
    }

    /// Applies a tonal adjustment, recomputed from the original buffer.
    ///
    /// Permitted from `Loaded` and (re-entrantly) from `Adjusted`; each
    /// call replaces the previous adjustment rather than compounding it.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidTransition`] from any other stage.
    pub fn adjust(&mut self, state: FilterState) -> PipelineResult<()> {
        let Some(active) = self.stage.as_mut() else {
            return Err(PipelineError::invalid_transition(Stage::Idle, "adjust"));
        };
        if !matches!(active.stage, Stage::Loaded | Stage::Adjusted) {
            return Err(PipelineError::invalid_transition(active.stage, "adjust"));
        }
        debug!(stage = %active.stage, "adjust");
        active.working = tonal::adjust(&active.original, &state);
        active.stage = Stage::Adjusted;
        self.filters = state;
        Ok(())
    }

    /// Runs grayscale conversion followed by Sobel edge detection on the
    /// original buffer, making the edge map the working buffer.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidTransition`] unless the pipeline is
    /// in `Loaded`.
    pub fn detect_edges(&mut self) -> PipelineResult<()> {
        let Some(active) = self.stage.as_mut() else {
            return Err(PipelineError::invalid_transition(
                Stage::Idle,
                "detect_edges",
            ));
        };
        if active.stage != Stage::Loaded {
            return Err(PipelineError::invalid_transition(
                active.stage,
                "detect_edges",
            ));
        }
        debug!("detect edges");
        active.working = sobel_edges(&grayscale(&active.original));
        active.stage = Stage::EdgeDetected;
        Ok(())
    }

    /// Discards the working buffer, restores a copy of the original, and
    /// clears the filter state to defaults.
    ///
    /// Permitted from every stage except `Idle`; from `Loaded` it is a
    /// no-op apart from clearing filters.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidTransition`] while idle.
    pub fn reset(&mut self) -> PipelineResult<()> {
        let Some(active) = self.stage.as_mut() else {
            return Err(PipelineError::invalid_transition(Stage::Idle, "reset"));
        };
        debug!(stage = %active.stage, "reset");
        active.working = active.original.clone();
        active.stage = Stage::Loaded;
        self.filters = FilterState::default();
        Ok(())
    }

    /// Consumes the pipeline, returning the working buffer as
    /// `(width, height, RGBA bytes)` for the exporter collaborator.
    ///
    /// Returns `None` if no image was ever loaded.
    pub fn into_raw(self) -> Option<(u32, u32, Vec<u8>)> {
        self.stage.map(|s| s.working.into_raw())
    }
}
