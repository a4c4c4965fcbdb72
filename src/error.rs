//! Error types shared by the tensor algebra and the renderer.

use thiserror::Error;

/// Failures raised while building a [`Tensor`](crate::tensor::Tensor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// An explicit element list did not contain exactly `rows * columns` values.
    #[error("shape mismatch: a {rows}x{columns} tensor needs {expected} elements, got {actual}")]
    ShapeMismatch {
        /// Row count of the requested shape.
        rows: usize,
        /// Column count of the requested shape.
        columns: usize,
        /// Number of elements the shape requires.
        expected: usize,
        /// Number of elements that were supplied.
        actual: usize,
    },
}

/// Failures raised while setting up or running a render.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The colour sink could not accept pixel data.
    #[error("failed to write pixel data: {0}")]
    Io(#[from] std::io::Error),
    /// Camera settings that cannot produce a viewport.
    #[error("invalid camera settings: {0}")]
    InvalidCamera(String),
}
