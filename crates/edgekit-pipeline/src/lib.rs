//! # edgekit-pipeline
//!
//! Stateful orchestrator sequencing the edgekit raster operations.
//!
//! A [`Pipeline`] is driven synchronously by an external caller (typically
//! UI event handlers): it retains the original image loaded by the
//! collaborator, derives working buffers from it via the `edgekit-ops`
//! stages, and hands the current buffer back for display or export.
//!
//! # State machine
//!
//! ```text
//!              load                adjust
//!   Idle ------------> Loaded <------------> Adjusted
//!                        | ^  detect_edges      |
//!                        | +---- reset ---------+
//!                        v |
//!                   EdgeDetected
//! ```
//!
//! Transitions outside this diagram fail with
//! [`PipelineError::InvalidTransition`]; `load` is additionally permitted
//! from every stage (uploading a new image replaces the old one).
//!
//! # Example
//!
//! ```rust
//! use edgekit_ops::FilterState;
//! use edgekit_pipeline::Pipeline;
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.load(4, 4, vec![128; 4 * 4 * 4])?;
//! pipeline.adjust(FilterState { brightness: 80, ..FilterState::identity() })?;
//! pipeline.reset()?;
//! pipeline.detect_edges()?;
//! let edges = pipeline.current().unwrap();
//! assert_eq!(edges.dimensions(), (4, 4));
//! # Ok::<(), edgekit_pipeline::PipelineError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod pipeline;

pub use error::{PipelineError, PipelineResult};
pub use pipeline::{Pipeline, Stage};
