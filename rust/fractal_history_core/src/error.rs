//! Errors surfaced to the UI layer.

use thiserror::Error;

/// Failure reported by the rendering engine while drawing or resizing a view.
#[derive(Debug, Error)]
#[error("fractal engine failed: {message}")]
pub struct RenderError {
    message: String,
}

impl RenderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum HistoryError {
    /// A null or missing descriptor was handed to `render`.
    #[error("cannot render: no fractal descriptor was given")]
    MissingDescriptor,

    /// Navigation or read attempted while nothing has been rendered.
    #[error("cannot {op}: render history is empty")]
    EmptyHistory { op: &'static str },

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The shared history is already borrowed, e.g. a descriptor called back
    /// into it while being drawn.
    #[error("render history is busy")]
    Busy,

    #[error("invalid history config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T, E = HistoryError> = std::result::Result<T, E>;
