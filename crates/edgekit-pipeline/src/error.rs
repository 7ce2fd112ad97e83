//! Error types for pipeline transitions.

use thiserror::Error;

use crate::pipeline::Stage;

/// Result type alias using [`PipelineError`] as the error type.
pub type PipelineResult<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by [`Pipeline`](crate::Pipeline) transitions.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The requested event is not a legal transition from the current stage.
    #[error("invalid transition: {event} is not permitted in stage {stage}")]
    InvalidTransition {
        /// Stage the pipeline was in when the event arrived
        stage: Stage,
        /// Name of the rejected event
        event: &'static str,
    },

    /// The image loader handed over a malformed raster; the `load`
    /// transition is refused and the pipeline keeps its previous state.
    #[error(transparent)]
    Buffer(#[from] edgekit_core::Error),
}

impl PipelineError {
    /// Creates a [`PipelineError::InvalidTransition`] error.
    #[inline]
    pub fn invalid_transition(stage: Stage, event: &'static str) -> Self {
        Self::InvalidTransition { stage, event }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_message() {
        let err = PipelineError::invalid_transition(Stage::Idle, "detect_edges");
        assert_eq!(
            err.to_string(),
            "invalid transition: detect_edges is not permitted in stage idle"
        );
    }

    #[test]
    fn test_buffer_error_is_transparent() {
        let inner = edgekit_core::Error::invalid_buffer_shape(2, 2, 16, 3);
        let err = PipelineError::from(inner);
        assert!(err.to_string().contains("invalid buffer shape"));
    }
}
