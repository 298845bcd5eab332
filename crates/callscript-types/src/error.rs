use thiserror::Error;

/// Errors from rendering a script document.
///
/// Building a document never fails; only turning one into JSON can.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
