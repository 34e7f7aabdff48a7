//! Captioning error.

use std::path::PathBuf;

use thiserror::Error;

use crate::resources::FontError;


/// Error that may occur while rendering the text overlay.
///
/// Text that doesn't fit even at the smallest font size is *not* an error;
/// it is simply rendered overflowing its bounds.
#[derive(Debug, Error)]
pub enum CaptionError {
    /// No image was given to render the text onto.
    #[error("image input is required")]
    MissingInput,
    /// Font file couldn't be loaded.
    #[error("cannot load font {path}: {1}", path = .0.display())]
    Font(PathBuf, #[source] FontError),
}

impl CaptionError {
    /// Whether the error was caused by lack of the input image.
    #[inline]
    pub fn is_missing_input(&self) -> bool {
        match *self { CaptionError::MissingInput => true, _ => false }
    }
}
