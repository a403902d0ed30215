use anyhow::Result;
use pointview_core::containers::PointViewSet;
use serde_json::Value;

use super::BufferReader;

/// How the engine is asked to run a pipeline. Both modes produce the same points, streaming only trades peak memory
/// for incremental processing
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Run the whole pipeline in memory
    #[default]
    Standard,
    /// Stream points through the pipeline if all of its stages support it
    PreferStream,
}

/// The external pipeline engine, seen from the boundary that a `PipelineManager` touches. Stage graph parsing,
/// scheduling, format I/O and metadata collection all live behind this trait. Errors from implementations are
/// forwarded to the caller unchanged.
pub trait PipelineEngine {
    /// Builds the stage graph from an already syntax-checked pipeline definition
    fn read_pipeline(&mut self, definition: &Value) -> Result<()>;
    /// Returns true if every stage of the current pipeline supports streaming
    fn is_streamable(&self) -> bool;
    /// Attaches `reader` as the input of the first stage of the current pipeline
    fn set_input(&mut self, reader: BufferReader) -> Result<()>;
    /// Runs the current pipeline and returns its output views
    fn execute(&mut self, mode: ExecutionMode) -> Result<PointViewSet>;
    /// Returns the metadata tree of the current pipeline
    fn metadata(&self) -> Result<Value>;
    /// Returns the stage graph of the current pipeline as pipeline definition text
    fn pipeline_graph(&self) -> Result<String>;
}
