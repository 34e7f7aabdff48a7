//! Module with the renderer configuration.

use crate::model::MIN_FONT_SIZE;


/// Default spacing between consecutive lines of text, in pixels.
pub const DEFAULT_LINE_SPACING: u32 = 4;


/// Structure holding configuration for the `TextOverlayRenderer`.
///
/// Unlike `LayoutConfig`, this doesn't change between invocations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Extra space between lines of text when measuring the whole text block.
    pub line_spacing: u32,
    /// Font size below which the text isn't shrunk any further.
    pub min_font_size: u32,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            line_spacing: DEFAULT_LINE_SPACING,
            min_font_size: MIN_FONT_SIZE,
        }
    }
}
