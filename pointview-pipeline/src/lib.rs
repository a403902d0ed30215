#![warn(clippy::all)]

//! Drives an external point cloud pipeline engine and exposes its input and output as
//! [`PointView`](pointview_core::containers::PointView)s
//!
//! The engine itself (stage graph, execution, format I/O) sits behind the [`PipelineEngine`](base::PipelineEngine)
//! trait. The [`PipelineManager`] is the handle callers work with.

/// The boundary to the pipeline engine and the in-memory reader stage
pub mod base;

mod error;
pub use self::error::*;

mod pipeline_manager;
pub use self::pipeline_manager::*;
