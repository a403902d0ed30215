use std::{cell::RefCell, rc::Rc};

use anyhow::{bail, Context, Result};
use pointview_core::{
    containers::{PointView, PointViewSet},
    layout::{DimTypeId, DimensionId},
    meta::SpatialReference,
};
use pointview_pipeline::base::{BufferReader, ExecutionMode, PipelineEngine};
use serde_json::{json, Value};

/// Everything the `TestEngine` was asked to do, shared with the test that created it
#[derive(Debug, Default)]
pub struct EngineLog {
    pub read_calls: usize,
    pub stages: Vec<String>,
    pub executions: Vec<ExecutionMode>,
    pub input_point_count: Option<usize>,
}

/// Stand-in for the external pipeline engine. Understands two stages: `readers.faux` creates a view with `count`
/// points of X/Y/Z, every other stage passes its input through. An installed `BufferReader` replaces all reader
/// stages
pub struct TestEngine {
    log: Rc<RefCell<EngineLog>>,
    definition: Option<Value>,
    input: Option<BufferReader>,
}

impl TestEngine {
    pub fn new() -> (Self, Rc<RefCell<EngineLog>>) {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let engine = Self {
            log: log.clone(),
            definition: None,
            input: None,
        };
        (engine, log)
    }

    fn stage_definitions(definition: &Value) -> Result<&Vec<Value>> {
        match definition {
            Value::Array(stages) => Ok(stages),
            Value::Object(object) => object
                .get("pipeline")
                .and_then(Value::as_array)
                .context("Pipeline object has no \"pipeline\" array"),
            _ => bail!("Pipeline definition must be an object or an array"),
        }
    }

    fn faux_view(stage: &Value) -> Result<PointView> {
        let count = stage.get("count").and_then(Value::as_u64).unwrap_or(0) as usize;
        let mut view = PointView::new();
        view.register_dimensions(&[
            DimTypeId::from(DimensionId::X),
            DimTypeId::from(DimensionId::Y),
            DimTypeId::from(DimensionId::Z),
        ])?;
        for index in 0..count {
            let point = view.append_point();
            view.set_field(DimensionId::X, point, index as f64)?;
            view.set_field(DimensionId::Y, point, 2.0 * index as f64)?;
            view.set_field(DimensionId::Z, point, -(index as f64))?;
        }
        if let Some(wkt) = stage.get("spatialreference").and_then(Value::as_str) {
            view.set_spatial_reference(SpatialReference::from_wkt(wkt));
        }
        Ok(view)
    }
}

impl PipelineEngine for TestEngine {
    fn read_pipeline(&mut self, definition: &Value) -> Result<()> {
        self.log.borrow_mut().read_calls += 1;
        let stages = Self::stage_definitions(definition)?
            .iter()
            .map(|stage| {
                stage
                    .get("type")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
                    .context("Stage without a \"type\"")
            })
            .collect::<Result<Vec<_>>>()?;
        self.log.borrow_mut().stages = stages;
        self.definition = Some(definition.clone());
        self.input = None;
        Ok(())
    }

    fn is_streamable(&self) -> bool {
        !self
            .log
            .borrow()
            .stages
            .iter()
            .any(|stage| stage == "filters.sort")
    }

    fn set_input(&mut self, reader: BufferReader) -> Result<()> {
        self.log.borrow_mut().input_point_count = Some(reader.point_count());
        self.input = Some(reader);
        Ok(())
    }

    fn execute(&mut self, mode: ExecutionMode) -> Result<PointViewSet> {
        self.log.borrow_mut().executions.push(mode);
        if let Some(input) = self.input.take() {
            return Ok(input.into_view_set());
        }
        let definition = self.definition.as_ref().context("No pipeline")?;
        let mut views = vec![];
        for stage in Self::stage_definitions(definition)? {
            match stage.get("type").and_then(Value::as_str) {
                Some("readers.faux") => views.push(Self::faux_view(stage)?),
                Some("filters.fail") => bail!("Stage filters.fail failed"),
                _ => {}
            }
        }
        Ok(views.into_iter().collect())
    }

    fn metadata(&self) -> Result<Value> {
        let log = self.log.borrow();
        Ok(json!({
            "stages": log.stages,
            "executed": !log.executions.is_empty(),
        }))
    }

    fn pipeline_graph(&self) -> Result<String> {
        let definition = self.definition.as_ref().context("No pipeline")?;
        Ok(serde_json::to_string_pretty(definition)?)
    }
}

pub fn faux_pipeline(counts: &[usize]) -> String {
    let stages = counts
        .iter()
        .map(|count| json!({ "type": "readers.faux", "count": count }))
        .collect::<Vec<_>>();
    json!({ "pipeline": stages }).to_string()
}
