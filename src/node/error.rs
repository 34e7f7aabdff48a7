//! Node execution error.

use thiserror::Error;

use crate::caption::CaptionError;
use crate::model::LayoutConfigError;
use crate::resources::FontError;


/// Error that may occur when executing the node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Rendering the text failed.
    #[error(transparent)]
    Caption(#[from] CaptionError),
    /// Chosen font isn't available.
    #[error("font not available: {0}")]
    Font(#[from] FontError),
    /// Node inputs are out of range.
    #[error("invalid node inputs: {0}")]
    Inputs(#[from] LayoutConfigError),
}

impl NodeError {
    /// Whether the error was caused by lack of the input image.
    #[inline]
    pub fn is_missing_input(&self) -> bool {
        match *self {
            NodeError::Caption(ref e) => e.is_missing_input(),
            _ => false,
        }
    }
}
