use thiserror::Error;

/// Errors that the `PipelineManager` detects itself. Errors from the engine are passed through unchanged and are
/// never wrapped into this type
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Unable to parse pipeline definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No pipeline has been read")]
    NoPipeline,

    #[error("Pipeline has not been executed")]
    NotExecuted,

    #[error("Pipeline execution produced no point views")]
    NoOutputViews,
}
