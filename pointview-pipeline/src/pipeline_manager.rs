use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use pointview_core::{
    containers::{PointView, PointViewSet},
    layout::PointLayout,
};
use serde_json::{json, Value};

use crate::{
    base::{BufferReader, ExecutionMode, PipelineEngine},
    PipelineError,
};

/// Handle to a pipeline run by an external [`PipelineEngine`]. The handle owns the engine, checks the syntax of
/// pipeline definitions before the engine sees them and keeps the output views of the last successful execution.
///
/// Lifecycle: read a pipeline definition (from text or from a file), optionally install an input view, execute
/// any number of times, and query output, metadata, schema and stage graph afterwards.
pub struct PipelineManager {
    engine: Box<dyn PipelineEngine>,
    definition: Option<Value>,
    output: Option<PointViewSet>,
}

impl PipelineManager {
    /// Creates a new `PipelineManager` without a pipeline
    pub fn new<E: PipelineEngine + 'static>(engine: E) -> Self {
        Self {
            engine: Box::new(engine),
            definition: None,
            output: None,
        }
    }

    /// Reads the pipeline definition from the given JSON text. Malformed JSON fails with
    /// `PipelineError::Parse` before the engine is involved, errors from the engine are returned unchanged. After a
    /// failed read the manager holds no pipeline
    pub fn read_pipeline(&mut self, json: &str) -> Result<()> {
        self.definition = None;
        self.output = None;

        let definition: Value = serde_json::from_str(json).map_err(PipelineError::Parse)?;
        self.engine.read_pipeline(&definition)?;
        debug!("Read pipeline definition ({} bytes)", json.len());
        self.definition = Some(definition);
        Ok(())
    }

    /// Reads the pipeline definition from the JSON file at `path`
    pub fn read_pipeline_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let json = std::fs::read_to_string(path.as_ref()).context(format!(
            "Could not read pipeline definition file {}",
            path.as_ref().display()
        ))?;
        self.read_pipeline(&json)
    }

    /// Returns the definition of the current pipeline, if one was read successfully
    pub fn definition(&self) -> Option<&Value> {
        self.definition.as_ref()
    }

    /// Returns true if the engine can stream the current pipeline
    pub fn is_streamable(&self) -> bool {
        self.engine.is_streamable()
    }

    /// Executes the pipeline in standard mode and returns the total number of points in all output views
    pub fn execute(&mut self) -> Result<usize> {
        let views = self.run(ExecutionMode::Standard)?;
        let point_count = views.point_count();
        info!(
            "Executed pipeline: {} points in {} views",
            point_count,
            views.len()
        );
        self.output = Some(views);
        Ok(point_count)
    }

    /// Executes the pipeline, asking the engine to stream points through it. Streamed execution reports no point count
    pub fn execute_streamed(&mut self) -> Result<()> {
        let views = self.run(ExecutionMode::PreferStream)?;
        info!("Executed pipeline in streaming mode");
        self.output = Some(views);
        Ok(())
    }

    /// Installs `view` as the data source of the pipeline. The view is wrapped in a single-view [`BufferReader`]
    /// which the engine attaches as the input of the first stage. The view is moved, so it can't be changed
    /// through any other handle while the pipeline runs
    pub fn set_input_view(&mut self, view: PointView) -> Result<()> {
        self.set_input_reader(BufferReader::from(view))
    }

    /// Installs `reader` as the data source of the pipeline
    pub fn set_input_reader(&mut self, reader: BufferReader) -> Result<()> {
        if self.definition.is_none() {
            return Err(PipelineError::NoPipeline.into());
        }
        debug!(
            "Installing buffer reader with {} views and {} points as pipeline input",
            reader.len(),
            reader.point_count()
        );
        self.engine.set_input(reader)
    }

    /// Returns the first output view of the last execution
    pub fn output_view(&self) -> Result<&PointView> {
        let views = self.output_views()?;
        views
            .first()
            .ok_or_else(|| PipelineError::NoOutputViews.into())
    }

    /// Returns all output views of the last execution
    pub fn output_views(&self) -> Result<&PointViewSet> {
        self.output
            .as_ref()
            .ok_or_else(|| PipelineError::NotExecuted.into())
    }

    /// Returns the metadata of the pipeline as JSON text of the form `{"metadata": {...}}`
    pub fn metadata_as_json(&self) -> Result<String> {
        let metadata = self.engine.metadata()?;
        Ok(serde_json::to_string(&json!({ "metadata": metadata }))?)
    }

    /// Returns the schema of the pipeline output as JSON text of the form `{"schema": {"dimensions": [...]}}`. Each
    /// dimension entry has a `name`, a `size` in bytes and a base `type`. Before execution the dimension list is empty
    pub fn schema_as_json(&self) -> Result<String> {
        let empty_layout = PointLayout::new();
        let layout = self
            .output
            .as_ref()
            .and_then(|views| views.first())
            .map(|view| view.layout())
            .unwrap_or(&empty_layout);
        Ok(serde_json::to_string(&json!({
            "schema": {
                "dimensions": layout.schema()
            }
        }))?)
    }

    /// Returns the stage graph of the pipeline as text, exactly as the engine writes it
    pub fn pipeline_graph_as_text(&self) -> Result<String> {
        self.engine.pipeline_graph()
    }

    fn run(&mut self, mode: ExecutionMode) -> Result<PointViewSet> {
        if self.definition.is_none() {
            return Err(PipelineError::NoPipeline.into());
        }
        self.output = None;
        debug!("Executing pipeline with mode {:?}", mode);
        self.engine.execute(mode)
    }
}
