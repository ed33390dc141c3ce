/// Errors an engine adapter can report for style and source mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The operation requires a fully loaded style.
    StyleNotReady,
    /// The engine refused to attach a data source.
    SourceRejected(String),
    /// The engine refused to add a layer.
    LayerRejected(String),
    /// A single paint-property update was refused.
    PaintRejected {
        layer: String,
        property: String,
        reason: String,
    },
    /// Any other engine-level failure.
    Backend(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::StyleNotReady => write!(f, "style is not fully loaded"),
            EngineError::SourceRejected(msg) => write!(f, "source rejected: {msg}"),
            EngineError::LayerRejected(msg) => write!(f, "layer rejected: {msg}"),
            EngineError::PaintRejected {
                layer,
                property,
                reason,
            } => write!(f, "paint property {property} rejected on layer {layer}: {reason}"),
            EngineError::Backend(msg) => write!(f, "engine error: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
